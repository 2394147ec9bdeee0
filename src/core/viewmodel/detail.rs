use std::fmt;

use crate::catalog::CatalogItem;
use crate::core::action::Effect;
use crate::core::resource::Resource;
use crate::library::shelf::find_by_google_id;
use crate::library::{CurrentUser, SavedBook};

/// Why a save didn't go out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveBlocked {
    /// The catalog item hasn't loaded (or failed to).
    NotLoaded,
    /// The library isn't known, so a duplicate can't be ruled out.
    LibraryNotLoaded,
    /// The user already has this catalog item on their shelf.
    AlreadySaved,
}

impl fmt::Display for SaveBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveBlocked::NotLoaded => write!(f, "Book details are still loading"),
            SaveBlocked::LibraryNotLoaded => write!(f, "Reading list is still loading"),
            SaveBlocked::AlreadySaved => write!(f, "Already on your reading list"),
        }
    }
}

/// A catalog book opened from search results.
#[derive(Debug, Default)]
pub struct DetailViewModel {
    pub book_id: String,
    pub book: Resource<CatalogItem>,
}

impl DetailViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, book_id: &str) -> Effect {
        self.book_id = book_id.to_string();
        self.book = Resource::Loading;
        Effect::LoadBook(self.book_id.clone())
    }

    pub fn on_book(&mut self, book: Resource<CatalogItem>) {
        self.book = book;
    }

    /// Build the save for the loaded book. `library` is the `books`
    /// collection; saving waits until it has loaded so duplicates are
    /// always caught.
    pub fn save(
        &self,
        user: &CurrentUser,
        library: &Resource<Vec<SavedBook>>,
    ) -> Result<Effect, SaveBlocked> {
        let item = self.book.data().ok_or(SaveBlocked::NotLoaded)?;
        let books = library.data().ok_or(SaveBlocked::LibraryNotLoaded)?;
        if find_by_google_id(books, &user.id, &item.id).is_some() {
            return Err(SaveBlocked::AlreadySaved);
        }
        Ok(Effect::SaveBook(SavedBook::from_catalog(item, &user.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> CurrentUser {
        CurrentUser {
            id: "me".to_string(),
            email: "me@example.com".to_string(),
            display_name: "me".to_string(),
        }
    }

    fn item(id: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_requests_book() {
        let mut vm = DetailViewModel::new();
        assert_eq!(vm.open("vol-9"), Effect::LoadBook("vol-9".to_string()));
        assert!(vm.book.is_loading());
    }

    #[test]
    fn test_save_before_load_blocked() {
        let vm = DetailViewModel::new();
        assert_eq!(
            vm.save(&user(), &Resource::Success(vec![])),
            Err(SaveBlocked::NotLoaded)
        );
    }

    #[test]
    fn test_save_builds_owned_book() {
        let mut vm = DetailViewModel::new();
        vm.open("vol-9");
        vm.on_book(Resource::Success(item("vol-9")));
        match vm.save(&user(), &Resource::Success(vec![])) {
            Ok(Effect::SaveBook(book)) => {
                assert_eq!(book.google_book_id, "vol-9");
                assert_eq!(book.user_id, "me");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_save_blocked_per_user() {
        let mut vm = DetailViewModel::new();
        vm.on_book(Resource::Success(item("vol-9")));

        let mine = SavedBook::from_catalog(&item("vol-9"), "me");
        assert_eq!(
            vm.save(&user(), &Resource::Success(vec![mine])),
            Err(SaveBlocked::AlreadySaved)
        );

        // Another user's copy doesn't count
        let theirs = SavedBook::from_catalog(&item("vol-9"), "them");
        assert!(vm.save(&user(), &Resource::Success(vec![theirs])).is_ok());
    }

    #[test]
    fn test_save_waits_for_library() {
        let mut vm = DetailViewModel::new();
        vm.on_book(Resource::Success(item("vol-9")));
        assert_eq!(
            vm.save(&user(), &Resource::Loading),
            Err(SaveBlocked::LibraryNotLoaded)
        );
        assert_eq!(
            vm.save(&user(), &Resource::Failure("disk full".to_string())),
            Err(SaveBlocked::LibraryNotLoaded)
        );
    }
}
