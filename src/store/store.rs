//! Record store implementation over a snapshot backend.

use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

use crate::error::{Result, TesseraError};
use crate::record::StringRecord;
use crate::storage::traits::SnapshotStorage;

/// The stored record collection, keyed by digest.
///
/// Every operation runs a full load(-modify-save) cycle against the
/// injected [`SnapshotStorage`]. Mutations hold an in-process lock across
/// the whole cycle, so threads sharing this store cannot lose each other's
/// updates; writers in *other* processes can still interleave whole cycles,
/// in which case the last save wins. A crash between modify and save loses
/// that one mutation.
#[derive(Debug)]
pub struct RecordStore {
    /// The snapshot backend.
    storage: Arc<dyn SnapshotStorage>,
    /// Serializes load-modify-save cycles for mutating operations.
    write_lock: Mutex<()>,
}

impl RecordStore {
    /// Create a store over the given snapshot backend.
    pub fn new(storage: Arc<dyn SnapshotStorage>) -> Self {
        RecordStore {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// Insert `record`, failing with `Conflict` if its id is already stored.
    pub fn insert(&self, record: StringRecord) -> Result<()> {
        let _guard = self.write_lock.lock();

        let mut snapshot = self.storage.load()?;
        if snapshot.contains_key(&record.id) {
            return Err(TesseraError::conflict(record.id));
        }

        let id = record.id.clone();
        snapshot.insert(id.clone(), record);
        self.storage.save(&snapshot)?;

        debug!("inserted record {id}");
        Ok(())
    }

    /// Fetch the record stored under `id`.
    pub fn get(&self, id: &str) -> Result<StringRecord> {
        let snapshot = self.storage.load()?;
        snapshot
            .get(id)
            .cloned()
            .ok_or_else(|| TesseraError::not_found(id))
    }

    /// Whether a record is stored under `id`.
    pub fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.storage.load()?.contains_key(id))
    }

    /// All stored records, in unspecified order.
    pub fn list_all(&self) -> Result<Vec<StringRecord>> {
        Ok(self.storage.load()?.into_values().collect())
    }

    /// Remove the record stored under `id`, failing with `NotFound` if absent.
    pub fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock();

        let mut snapshot = self.storage.load()?;
        if snapshot.remove(id).is_none() {
            return Err(TesseraError::not_found(id));
        }
        self.storage.save(&snapshot)?;

        debug!("deleted record {id}");
        Ok(())
    }

    /// Number of stored records.
    pub fn len(&self) -> Result<usize> {
        Ok(self.storage.load()?.len())
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PropertyAnalyzer;
    use crate::storage::file::FileSnapshotStorage;
    use crate::storage::memory::MemorySnapshotStorage;
    use tempfile::TempDir;

    fn memory_store() -> RecordStore {
        RecordStore::new(Arc::new(MemorySnapshotStorage::new()))
    }

    fn record_for(value: &str) -> StringRecord {
        StringRecord::new(value, PropertyAnalyzer::new().analyze(value))
    }

    #[test]
    fn test_insert_then_get() {
        let store = memory_store();
        let record = record_for("hello");

        store.insert(record.clone()).unwrap();
        let fetched = store.get(&record.id).unwrap();

        assert_eq!(fetched, record);
        assert!(store.contains(&record.id).unwrap());
        assert!(!store.contains("not-a-digest").unwrap());
    }

    #[test]
    fn test_duplicate_insert_is_a_conflict() {
        let store = memory_store();
        let record = record_for("hello");

        store.insert(record.clone()).unwrap();
        match store.insert(record) {
            Err(TesseraError::Conflict(_)) => {}
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = memory_store();

        match store.get("deadbeef") {
            Err(TesseraError::NotFound(id)) => assert_eq!(id, "deadbeef"),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn test_delete_then_delete_again() {
        let store = memory_store();
        let record = record_for("ephemeral");
        let id = record.id.clone();

        store.insert(record).unwrap();
        store.delete(&id).unwrap();

        match store.delete(&id) {
            Err(TesseraError::NotFound(_)) => {}
            other => panic!("expected not found on second delete, got {other:?}"),
        }
    }

    #[test]
    fn test_list_all_returns_every_record() {
        let store = memory_store();
        for value in ["one", "two", "three"] {
            store.insert(record_for(value)).unwrap();
        }

        let mut values: Vec<String> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|r| r.value)
            .collect();
        values.sort();

        assert_eq!(values, ["one", "three", "two"]);
        assert_eq!(store.len().unwrap(), 3);
        assert!(!store.is_empty().unwrap());
    }

    #[test]
    fn test_two_stores_share_a_file_backend() {
        let temp_dir = TempDir::new().unwrap();
        let record = record_for("shared");
        let id = record.id.clone();

        {
            let backend = Arc::new(FileSnapshotStorage::new_default(temp_dir.path()).unwrap());
            let store = RecordStore::new(backend);
            store.insert(record).unwrap();
        }

        let backend = Arc::new(FileSnapshotStorage::new_default(temp_dir.path()).unwrap());
        let store = RecordStore::new(backend);

        assert_eq!(store.get(&id).unwrap().value, "shared");
    }
}
