//! Editing a saved book: notes, rating and reading dates.
//!
//! The book is looked up in the last loaded library by catalog id. Edits go
//! into a draft; only the fields that differ from the stored book are sent.

use chrono::{DateTime, Utc};

use crate::core::action::Effect;
use crate::core::resource::Resource;
use crate::library::shelf::find_by_google_id;
use crate::library::types::MAX_RATING;
use crate::library::{CurrentUser, SavedBook, SavedBookPatch};

pub const NOT_ON_SHELF: &str = "This book is not on your reading list";

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateEdit {
    Notes(String),
    ToggleStarted,
    ToggleFinished,
    Rating(u8),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDraft {
    pub notes: String,
    pub rating: u8,
    pub mark_started: bool,
    pub mark_finished: bool,
}

#[derive(Debug, Default)]
pub struct UpdateViewModel {
    /// Catalog id the screen was opened for.
    pub book_id: String,
    pub book: Resource<SavedBook>,
    pub draft: UpdateDraft,
}

impl UpdateViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the form at `book_id` and resolve it against `library`.
    pub fn open(&mut self, book_id: &str, library: &Resource<Vec<SavedBook>>, user: &CurrentUser) {
        self.book_id = book_id.to_string();
        self.on_library(library, user);
    }

    /// Re-resolve the current book after the library changed.
    pub fn on_library(&mut self, library: &Resource<Vec<SavedBook>>, user: &CurrentUser) {
        self.book = match library {
            Resource::Loading => Resource::Loading,
            Resource::Failure(message) => Resource::Failure(message.clone()),
            Resource::Success(books) => match find_by_google_id(books, &user.id, &self.book_id) {
                Some(book) => Resource::Success(book.clone()),
                None => Resource::Failure(NOT_ON_SHELF.to_string()),
            },
        };

        self.draft = match self.book.data() {
            Some(book) => UpdateDraft {
                notes: book.notes.clone(),
                rating: book.stars(),
                mark_started: false,
                mark_finished: false,
            },
            None => UpdateDraft::default(),
        };
    }

    pub fn edit(&mut self, edit: UpdateEdit) {
        let Some(book) = self.book.data() else {
            return;
        };
        match edit {
            UpdateEdit::Notes(notes) => self.draft.notes = notes,
            // A date that's already recorded can't be re-marked
            UpdateEdit::ToggleStarted if book.started_reading.is_none() => {
                self.draft.mark_started = !self.draft.mark_started;
            }
            UpdateEdit::ToggleFinished if book.finished_reading.is_none() => {
                self.draft.mark_finished = !self.draft.mark_finished;
            }
            UpdateEdit::Rating(stars) => self.draft.rating = stars.min(MAX_RATING),
            _ => {}
        }
    }

    /// Fields that changed, stamped with `now` for newly marked dates.
    /// `None` when the draft matches the stored book.
    pub fn patch(&self, now: DateTime<Utc>) -> Option<SavedBookPatch> {
        let book = self.book.data()?;
        let patch = SavedBookPatch {
            notes: (self.draft.notes != book.notes).then(|| self.draft.notes.clone()),
            rating: (self.draft.rating != book.stars()).then(|| f64::from(self.draft.rating)),
            started_reading: self.draft.mark_started.then_some(now),
            finished_reading: self.draft.mark_finished.then_some(now),
        };
        (!patch.is_empty()).then_some(patch)
    }

    pub fn submit(&self, now: DateTime<Utc>) -> Effect {
        match (self.book.data(), self.patch(now)) {
            (Some(book), Some(patch)) => Effect::UpdateBook {
                id: book.id.clone(),
                patch,
            },
            _ => Effect::None,
        }
    }

    pub fn delete(&self) -> Effect {
        match self.book.data() {
            Some(book) => Effect::DeleteBook(book.id.clone()),
            None => Effect::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user() -> CurrentUser {
        CurrentUser {
            id: "me".to_string(),
            email: "me@example.com".to_string(),
            display_name: "me".to_string(),
        }
    }

    fn stored() -> SavedBook {
        SavedBook {
            id: "doc-1".to_string(),
            google_book_id: "vol-1".to_string(),
            user_id: "me".to_string(),
            notes: "slow start".to_string(),
            rating: 3.0,
            ..Default::default()
        }
    }

    fn opened() -> UpdateViewModel {
        let mut vm = UpdateViewModel::new();
        vm.open("vol-1", &Resource::Success(vec![stored()]), &user());
        vm
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_open_seeds_draft_from_book() {
        let vm = opened();
        assert_eq!(vm.book.data().map(|b| b.id.as_str()), Some("doc-1"));
        assert_eq!(vm.draft.notes, "slow start");
        assert_eq!(vm.draft.rating, 3);
    }

    #[test]
    fn test_open_unknown_book_fails() {
        let mut vm = UpdateViewModel::new();
        vm.open("vol-404", &Resource::Success(vec![stored()]), &user());
        assert_eq!(vm.book.error(), Some(NOT_ON_SHELF));
    }

    #[test]
    fn test_open_ignores_other_users_copy() {
        let mut theirs = stored();
        theirs.user_id = "them".to_string();
        let mut vm = UpdateViewModel::new();
        vm.open("vol-1", &Resource::Success(vec![theirs]), &user());
        assert!(vm.book.error().is_some());
    }

    #[test]
    fn test_open_while_library_loading() {
        let mut vm = UpdateViewModel::new();
        vm.open("vol-1", &Resource::Loading, &user());
        assert!(vm.book.is_loading());
        vm.on_library(&Resource::Success(vec![stored()]), &user());
        assert!(vm.book.data().is_some());
    }

    #[test]
    fn test_unchanged_draft_submits_nothing() {
        let vm = opened();
        assert_eq!(vm.patch(now()), None);
        assert_eq!(vm.submit(now()), Effect::None);
    }

    #[test]
    fn test_patch_carries_only_changes() {
        let mut vm = opened();
        vm.edit(UpdateEdit::Rating(5));
        vm.edit(UpdateEdit::ToggleStarted);
        let patch = vm.patch(now()).unwrap();
        assert_eq!(patch.rating, Some(5.0));
        assert_eq!(patch.started_reading, Some(now()));
        assert_eq!(patch.notes, None);
        assert_eq!(patch.finished_reading, None);

        assert_eq!(
            vm.submit(now()),
            Effect::UpdateBook {
                id: "doc-1".to_string(),
                patch
            }
        );
    }

    #[test]
    fn test_recorded_dates_cannot_be_remarked() {
        let mut book = stored();
        book.started_reading = Some(now());
        let mut vm = UpdateViewModel::new();
        vm.open("vol-1", &Resource::Success(vec![book]), &user());

        vm.edit(UpdateEdit::ToggleStarted);
        assert!(!vm.draft.mark_started);
        vm.edit(UpdateEdit::ToggleFinished);
        assert!(vm.draft.mark_finished);
    }

    #[test]
    fn test_rating_clamped() {
        let mut vm = opened();
        vm.edit(UpdateEdit::Rating(9));
        assert_eq!(vm.draft.rating, MAX_RATING);
    }

    #[test]
    fn test_delete_targets_document_id() {
        assert_eq!(opened().delete(), Effect::DeleteBook("doc-1".to_string()));
        assert_eq!(UpdateViewModel::new().delete(), Effect::None);
    }
}
