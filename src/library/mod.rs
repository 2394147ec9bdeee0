//! # Library
//!
//! The user's saved books and accounts, kept in a document store.
//!
//! - [`store`]: the `DocumentStore` seam and its error type
//! - [`file_store`]: JSON-file implementation of the store
//! - [`repository`]: `books` reads wrapped in a `Resource`
//! - [`shelf`]: per-user partitioning and reading stats
//! - [`accounts`]: `users` lookups for sign-in and sign-up

pub mod accounts;
pub mod file_store;
pub mod repository;
pub mod shelf;
pub mod store;
pub mod types;

pub use accounts::AuthError;
pub use file_store::FileStore;
pub use repository::LibraryRepository;
pub use shelf::{ReadingStats, Shelf};
pub use store::{BOOKS, Document, DocumentStore, StoreError, USERS};
pub use types::{CurrentUser, SavedBook, SavedBookPatch, UserProfile};
