use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::{fs, sync::Mutex};

use crate::document::{
    attributes::Attributes,
    id::IdGenerator,
    record_id,
    validate::{patch_object, validate_socials_patch},
    Collection, Creatable, MapCollection, Record, SiteDocument,
};
use crate::mutation::{merge_map, merge_record};

use super::error::StoreError;

/// File-backed store for the site document.
///
/// Every operation reads the whole file, applies its change and, if it
/// mutated anything, rewrites the whole file. Nothing is cached between
/// calls. A single lock serializes the read-modify-write sequences and
/// owns the id generator.
#[derive(Debug)]
pub struct DataStore {
    path: PathBuf,
    lock: Mutex<IdGenerator>,
}

impl DataStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(IdGenerator::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty document if the file does not exist yet.
    /// Returns whether a file was created.
    pub async fn ensure_exists(&self) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        if fs::try_exists(&self.path)
            .await
            .map_err(|e| StoreError::storage(&self.path, e))?
        {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::storage(&self.path, e))?;
        }
        self.write_document(&SiteDocument::default()).await?;
        tracing::info!(path = %self.path.display(), "created empty data file");
        Ok(true)
    }

    async fn read_document(&self) -> Result<SiteDocument, StoreError> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to read data file");
            StoreError::storage(&self.path, e)
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "malformed data file");
            StoreError::storage(&self.path, e)
        })
    }

    async fn write_document(&self, doc: &SiteDocument) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(doc).map_err(|e| StoreError::Encode("document", e))?;
        fs::write(&self.path, data).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to write data file");
            StoreError::storage(&self.path, e)
        })
    }

    /// Read the full document.
    pub async fn load(&self) -> Result<SiteDocument, StoreError> {
        let _guard = self.lock.lock().await;
        self.read_document().await
    }

    /// Replace the stored document, pretty-printed with two-space indentation.
    pub async fn save(&self, doc: &SiteDocument) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.write_document(doc).await
    }

    /// Load, apply `f`, and persist the result. Nothing is written if `f` fails.
    async fn mutate<R, F>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut SiteDocument, &mut IdGenerator) -> Result<R, StoreError>,
    {
        let mut ids = self.lock.lock().await;
        let mut doc = self.read_document().await?;
        let out = f(&mut doc, &mut *ids)?;
        self.write_document(&doc).await?;
        Ok(out)
    }

    /// Current value of one top-level collection.
    pub async fn get_collection(&self, collection: Collection) -> Result<Value, StoreError> {
        let doc = self.load().await?;
        Ok(doc.collection_value(collection))
    }

    /// Shallow-merge `patch` into `site` or `socials` and return the merged map.
    pub async fn update_map(
        &self,
        collection: MapCollection,
        patch: &Value,
    ) -> Result<Map<String, Value>, StoreError> {
        let patch = patch_object(collection.name(), patch)?;
        if collection == MapCollection::Socials {
            validate_socials_patch(patch)?;
        }

        let merged = self
            .mutate(|doc, _| {
                let target = doc.map_mut(collection);
                merge_map(target, patch);
                Ok(target.clone())
            })
            .await?;

        tracing::debug!(collection = collection.name(), keys = patch.len(), "merged map patch");
        Ok(merged)
    }

    /// Append a new record built from `attributes` with a fresh id.
    pub async fn create_item<T: Creatable>(&self, attributes: &Value) -> Result<T, StoreError> {
        let attrs = Attributes::new(attributes);
        let (id, item) = self
            .mutate(|doc, ids| {
                if let Some(max) = doc.max_created_id() {
                    ids.observe(max);
                }
                let id = ids.next_id();
                let item = T::from_attributes(id, &attrs);
                let stored = serde_json::to_value(&item).map_err(|e| StoreError::Encode(T::KIND, e))?;
                T::list_mut(doc).push(stored);
                Ok((id, item))
            })
            .await?;

        tracing::debug!(kind = T::KIND, id, "created record");
        Ok(item)
    }

    /// Merge `patch` into the record with `id`, keeping its position.
    /// Returns the stored record after the merge.
    pub async fn update_item<T: Record>(
        &self,
        id: i64,
        patch: &Value,
    ) -> Result<Map<String, Value>, StoreError> {
        let patch = patch_object(T::KIND, patch)?;
        let item = self
            .mutate(|doc, _| {
                let record = T::list_mut(doc)
                    .iter_mut()
                    .find(|record| record_id(record) == Some(id))
                    .and_then(Value::as_object_mut)
                    .ok_or(StoreError::NotFound(T::KIND))?;
                merge_record::<T>(record, patch)?;
                Ok(record.clone())
            })
            .await?;

        tracing::debug!(kind = T::KIND, id, "updated record");
        Ok(item)
    }

    /// Remove every record with `id`. Removing a missing id still succeeds.
    /// Returns how many records were removed.
    pub async fn delete_item<T: Creatable>(&self, id: i64) -> Result<usize, StoreError> {
        let removed = self
            .mutate(|doc, _| {
                let list = T::list_mut(doc);
                let before = list.len();
                list.retain(|record| record_id(record) != Some(id));
                Ok(before - list.len())
            })
            .await?;

        tracing::debug!(kind = T::KIND, id, removed, "deleted record");
        Ok(removed)
    }
}
