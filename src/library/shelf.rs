//! # Shelf
//!
//! One user's view of the `books` collection, split by reading progress:
//!
//! | partition     | started | finished |
//! |---------------|---------|----------|
//! | reading now   | set     | unset    |
//! | finished      | any     | set      |
//! | not started   | unset   | unset    |
//!
//! Every owned book lands in exactly one partition. Books owned by other
//! users are dropped before partitioning.

use super::types::SavedBook;

/// Ratings at or above this mark a finished book as a favourite.
pub const FAVOURITE_RATING: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    ReadingNow,
    Finished,
    NotStarted,
}

impl Progress {
    pub fn of(book: &SavedBook) -> Self {
        match (&book.started_reading, &book.finished_reading) {
            (_, Some(_)) => Progress::Finished,
            (Some(_), None) => Progress::ReadingNow,
            (None, None) => Progress::NotStarted,
        }
    }
}

#[derive(Debug, Default)]
pub struct Shelf<'a> {
    pub reading_now: Vec<&'a SavedBook>,
    pub finished: Vec<&'a SavedBook>,
    pub not_started: Vec<&'a SavedBook>,
}

impl<'a> Shelf<'a> {
    /// Partition the books owned by `user_id`.
    pub fn for_user(books: &'a [SavedBook], user_id: &str) -> Self {
        let mut shelf = Shelf::default();
        for book in books.iter().filter(|b| b.user_id == user_id) {
            match Progress::of(book) {
                Progress::ReadingNow => shelf.reading_now.push(book),
                Progress::Finished => shelf.finished.push(book),
                Progress::NotStarted => shelf.not_started.push(book),
            }
        }
        shelf
    }

    pub fn len(&self) -> usize {
        self.reading_now.len() + self.finished.len() + self.not_started.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> ReadingStats {
        ReadingStats {
            reading: self.reading_now.len(),
            finished: self.finished.len(),
            not_started: self.not_started.len(),
            favourites: self
                .finished
                .iter()
                .filter(|b| is_favourite(b))
                .count(),
        }
    }
}

/// Counts shown on the stats screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadingStats {
    pub reading: usize,
    pub finished: usize,
    pub not_started: usize,
    pub favourites: usize,
}

pub fn is_favourite(book: &SavedBook) -> bool {
    book.rating >= FAVOURITE_RATING
}

/// Find the current user's entry for a catalog id.
pub fn find_by_google_id<'a>(
    books: &'a [SavedBook],
    user_id: &str,
    google_book_id: &str,
) -> Option<&'a SavedBook> {
    books
        .iter()
        .find(|b| b.user_id == user_id && b.google_book_id == google_book_id)
}
