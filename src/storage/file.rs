//! File-based snapshot storage.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, TesseraError};
use crate::storage::traits::{RecordSnapshot, SnapshotConfig, SnapshotStorage};

/// Name of the snapshot file inside the store directory.
const SNAPSHOT_FILE: &str = "strings.json";

/// Name of the temporary file a save is staged through.
const SNAPSHOT_TMP_FILE: &str = "strings.json.tmp";

/// A snapshot backend persisting to a single JSON file.
///
/// The snapshot lives at `<dir>/strings.json` as one JSON object mapping
/// digest to record. `save` stages the new snapshot in a temporary file in
/// the same directory and renames it over the target, so readers observe
/// either the old snapshot or the new one, never a partial write.
#[derive(Debug)]
pub struct FileSnapshotStorage {
    /// Directory holding the snapshot file.
    directory: PathBuf,
    /// Backend configuration.
    config: SnapshotConfig,
}

impl FileSnapshotStorage {
    /// Open (or initialize) a file-backed store in `directory`.
    ///
    /// Creates the directory and an empty `{}` snapshot if they do not
    /// exist yet.
    pub fn new<P: AsRef<Path>>(directory: P, config: SnapshotConfig) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();

        if !directory.exists() {
            fs::create_dir_all(&directory).map_err(|e| {
                TesseraError::storage(format!(
                    "failed to create store directory {}: {e}",
                    directory.display()
                ))
            })?;
        }

        if !directory.is_dir() {
            return Err(TesseraError::storage(format!(
                "store path is not a directory: {}",
                directory.display()
            )));
        }

        let storage = FileSnapshotStorage { directory, config };

        if !storage.snapshot_path().exists() {
            storage.save(&RecordSnapshot::default())?;
        }

        Ok(storage)
    }

    /// Open a file-backed store with the default configuration.
    pub fn new_default<P: AsRef<Path>>(directory: P) -> Result<Self> {
        Self::new(directory, SnapshotConfig::default())
    }

    /// Full path of the snapshot file.
    pub fn snapshot_path(&self) -> PathBuf {
        self.directory.join(SNAPSHOT_FILE)
    }

    fn tmp_path(&self) -> PathBuf {
        self.directory.join(SNAPSHOT_TMP_FILE)
    }
}

impl SnapshotStorage for FileSnapshotStorage {
    fn load(&self) -> Result<RecordSnapshot> {
        let path = self.snapshot_path();

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            // A missing file is an empty store, not an error.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RecordSnapshot::default());
            }
            Err(e) => {
                return Err(TesseraError::storage(format!(
                    "failed to read snapshot {}: {e}",
                    path.display()
                )));
            }
        };

        let snapshot: RecordSnapshot = serde_json::from_slice(&bytes).map_err(|e| {
            TesseraError::storage(format!("snapshot {} is not valid JSON: {e}", path.display()))
        })?;

        debug!("loaded snapshot: {} records from {}", snapshot.len(), path.display());
        Ok(snapshot)
    }

    fn save(&self, snapshot: &RecordSnapshot) -> Result<()> {
        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(snapshot)?
        } else {
            serde_json::to_vec(snapshot)?
        };

        let tmp = self.tmp_path();
        let path = self.snapshot_path();

        let mut file = File::create(&tmp).map_err(|e| {
            TesseraError::storage(format!("failed to stage snapshot {}: {e}", tmp.display()))
        })?;
        file.write_all(&bytes).map_err(|e| {
            TesseraError::storage(format!("failed to write snapshot {}: {e}", tmp.display()))
        })?;
        if self.config.sync_writes {
            file.sync_all().map_err(|e| {
                TesseraError::storage(format!("failed to sync snapshot {}: {e}", tmp.display()))
            })?;
        }
        drop(file);

        fs::rename(&tmp, &path).map_err(|e| {
            TesseraError::storage(format!(
                "failed to publish snapshot {}: {e}",
                path.display()
            ))
        })?;

        debug!("saved snapshot: {} records, {} bytes to {}", snapshot.len(), bytes.len(), path.display());
        Ok(())
    }
}
