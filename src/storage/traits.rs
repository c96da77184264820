//! Snapshot persistence trait and common types.

use ahash::AHashMap;

use crate::error::Result;
use crate::record::StringRecord;

/// The persisted state: every stored record, keyed by digest.
pub type RecordSnapshot = AHashMap<String, StringRecord>;

/// A trait for backends that persist the whole record snapshot.
///
/// The contract is load-all/save-all: callers read the entire snapshot,
/// mutate it in memory, and write the entire snapshot back. A backend
/// promises atomic replace-on-save — after a failed `save` the previous
/// snapshot is still intact — and nothing stronger. There is no partial
/// write, no merge, and no recovery; a failure propagates as fatal for the
/// operation that triggered it.
pub trait SnapshotStorage: Send + Sync + std::fmt::Debug {
    /// Load the current snapshot.
    ///
    /// A backend with no saved state yet returns an empty snapshot.
    fn load(&self) -> Result<RecordSnapshot>;

    /// Replace the persisted state with `snapshot`.
    fn save(&self, snapshot: &RecordSnapshot) -> Result<()>;
}

/// Configuration for snapshot backends.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Pretty-print the serialized snapshot.
    pub pretty: bool,

    /// Sync writes to disk before publishing a new snapshot.
    pub sync_writes: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        SnapshotConfig {
            pretty: true,
            sync_writes: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_config_default() {
        let config = SnapshotConfig::default();

        assert!(config.pretty);
        assert!(!config.sync_writes);
    }
}
