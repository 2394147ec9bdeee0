use std::fmt;
use std::io;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Collection holding saved books.
pub const BOOKS: &str = "books";
/// Collection holding user profiles.
pub const USERS: &str = "users";

/// A stored document: generated id plus its field object.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

impl Document {
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        serde_json::from_value(self.fields.clone()).map_err(StoreError::Parse)
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Parse(serde_json::Error),
    /// Patch target does not exist.
    NotFound { collection: String, id: String },
    /// Document fields must be a JSON object; collection names must be plain identifiers.
    Invalid(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store I/O error: {e}"),
            StoreError::Parse(e) => write!(f, "store parse error: {e}"),
            StoreError::NotFound { collection, id } => {
                write!(f, "no document {id} in {collection}")
            }
            StoreError::Invalid(msg) => write!(f, "invalid store request: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

/// A document database with named collections.
///
/// Queries return whole collections; filtering happens on the caller's side.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns the name of the store backend.
    fn name(&self) -> &str;

    /// Every document in `collection`. A collection that was never written is empty.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Insert `fields` under a generated id and return the id.
    async fn add(&self, collection: &str, fields: Value) -> Result<String, StoreError>;

    /// Merge `patch` into an existing document. Fails with `NotFound` if absent.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Map<String, Value>,
    ) -> Result<(), StoreError>;

    /// Remove a document. Deleting a missing document succeeds.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
