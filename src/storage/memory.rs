//! In-memory snapshot storage for testing and ephemeral stores.

use parking_lot::Mutex;

use crate::error::Result;
use crate::storage::traits::{RecordSnapshot, SnapshotStorage};

/// An in-memory snapshot backend.
///
/// Useful for tests and for stores that do not need to survive the
/// process. `load` clones the held snapshot; `save` replaces it whole,
/// which trivially satisfies the atomic-replace contract.
#[derive(Debug, Default)]
pub struct MemorySnapshotStorage {
    snapshot: Mutex<RecordSnapshot>,
}

impl MemorySnapshotStorage {
    /// Create a new, empty memory backend.
    pub fn new() -> Self {
        MemorySnapshotStorage {
            snapshot: Mutex::new(RecordSnapshot::default()),
        }
    }

    /// Number of records currently held.
    pub fn record_count(&self) -> usize {
        self.snapshot.lock().len()
    }
}

impl SnapshotStorage for MemorySnapshotStorage {
    fn load(&self) -> Result<RecordSnapshot> {
        Ok(self.snapshot.lock().clone())
    }

    fn save(&self, snapshot: &RecordSnapshot) -> Result<()> {
        *self.snapshot.lock() = snapshot.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PropertyAnalyzer;
    use crate::record::StringRecord;

    #[test]
    fn test_new_backend_is_empty() {
        let storage = MemorySnapshotStorage::new();
        assert!(storage.load().unwrap().is_empty());
        assert_eq!(storage.record_count(), 0);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let storage = MemorySnapshotStorage::new();
        let analyzer = PropertyAnalyzer::new();

        let record = StringRecord::new("hello", analyzer.analyze("hello"));
        let mut snapshot = RecordSnapshot::default();
        snapshot.insert(record.id.clone(), record.clone());

        storage.save(&snapshot).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[&record.id], record);
    }

    #[test]
    fn test_save_replaces_whole_snapshot() {
        let storage = MemorySnapshotStorage::new();
        let analyzer = PropertyAnalyzer::new();

        let first = StringRecord::new("first", analyzer.analyze("first"));
        let mut snapshot = RecordSnapshot::default();
        snapshot.insert(first.id.clone(), first);
        storage.save(&snapshot).unwrap();

        let second = StringRecord::new("second", analyzer.analyze("second"));
        let mut replacement = RecordSnapshot::default();
        replacement.insert(second.id.clone(), second.clone());
        storage.save(&replacement).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains_key(&second.id));
    }
}
