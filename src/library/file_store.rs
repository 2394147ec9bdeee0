//! # File-backed document store
//!
//! Keeps each collection as one JSON object (`<root>/<collection>.json`)
//! mapping document id to fields.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash
//! safety, and go through a single async lock so concurrent effects can't
//! interleave a read-modify-write.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use super::store::{Document, DocumentStore, StoreError};

type Collection = BTreeMap<String, Value>;

pub struct FileStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        info!("Document store at {}", root.display());
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_path(&self, collection: &str) -> Result<PathBuf, StoreError> {
        let valid = !collection.is_empty()
            && collection
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::Invalid(format!(
                "collection name {collection:?}"
            )));
        }
        Ok(self.root.join(format!("{collection}.json")))
    }

    async fn read_collection(&self, collection: &str) -> Result<Collection, StoreError> {
        let path = self.collection_path(collection)?;
        if !tokio::fs::try_exists(&path).await? {
            return Ok(Collection::new());
        }
        let json = tokio::fs::read_to_string(&path).await?;
        serde_json::from_str(&json).map_err(StoreError::Parse)
    }

    /// Atomically write a collection (via `.tmp` + rename).
    async fn write_collection(
        &self,
        collection: &str,
        documents: &Collection,
    ) -> Result<(), StoreError> {
        let path = self.collection_path(collection)?;
        let tmp_path = path.with_extension("tmp");
        let json = serde_json::to_string_pretty(documents).map_err(StoreError::Parse)?;
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &path).await?;
        debug!("Wrote {} documents to {}", documents.len(), path.display());
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let documents = self.read_collection(collection).await?;
        Ok(documents
            .into_iter()
            .map(|(id, fields)| Document { id, fields })
            .collect())
    }

    async fn add(&self, collection: &str, fields: Value) -> Result<String, StoreError> {
        if !fields.is_object() {
            return Err(StoreError::Invalid("document fields must be an object".to_string()));
        }

        let _guard = self.write_lock.lock().await;
        let mut documents = self.read_collection(collection).await?;
        let id = uuid::Uuid::new_v4().simple().to_string();
        documents.insert(id.clone(), fields);
        self.write_collection(collection, &documents).await?;

        info!("Added document {} to {}", id, collection);
        Ok(id)
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Map<String, Value>,
    ) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut documents = self.read_collection(collection).await?;
        let Some(Value::Object(fields)) = documents.get_mut(id) else {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        };

        let changed: Vec<&String> = patch.keys().collect();
        debug!("Patching {}/{}: {:?}", collection, id, changed);
        fields.extend(patch);
        self.write_collection(collection, &documents).await?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut documents = self.read_collection(collection).await?;
        if documents.remove(id).is_some() {
            self.write_collection(collection, &documents).await?;
            info!("Deleted document {} from {}", id, collection);
        } else {
            debug!("Delete of missing document {}/{} ignored", collection, id);
        }
        Ok(())
    }
}
