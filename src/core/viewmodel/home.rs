use crate::core::action::Effect;
use crate::core::resource::Resource;
use crate::library::{CurrentUser, SavedBook, Shelf};

/// Holds the whole `books` collection as last loaded. The home, update and
/// stats screens all read from here.
#[derive(Debug, Default)]
pub struct HomeViewModel {
    pub library: Resource<Vec<SavedBook>>,
}

impl HomeViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(&mut self) -> Effect {
        self.library = Resource::Loading;
        Effect::LoadLibrary
    }

    pub fn on_library(&mut self, library: Resource<Vec<SavedBook>>) {
        self.library = library;
    }

    /// Loaded books, or an empty slice while loading or after a failure.
    pub fn books(&self) -> &[SavedBook] {
        self.library.data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// The signed-in user's books, partitioned by progress.
    pub fn shelf(&self, user: &CurrentUser) -> Shelf<'_> {
        Shelf::for_user(self.books(), &user.id)
    }
}
