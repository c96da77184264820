//! # Tessera
//!
//! A content-addressed string analysis and query engine.
//!
//! Submitted strings are analyzed into a set of deterministic properties,
//! stored under the SHA-256 digest of their trimmed value, and queried
//! either through structured filters or through a small natural-language
//! interpreter built from fixed phrase detectors.
//!
//! ## Features
//!
//! - Deterministic, Unicode-aware string property computation
//! - Content-addressed records: one record per distinct trimmed value
//! - Pluggable snapshot persistence (in-memory and atomic file backends)
//! - Structured filter listings with a full filter echo
//! - Natural-language queries over a fixed detector chain

pub mod analysis;
pub mod cli;
pub mod error;
pub mod query;
pub mod record;
pub mod service;
pub mod storage;
pub mod store;
pub mod util;

pub mod prelude {
    //! Convenient imports for the common library surface.

    pub use crate::analysis::{PropertyAnalyzer, TextProperties};
    pub use crate::error::{Result, TesseraError};
    pub use crate::query::{FilterSet, NaturalLanguageParser, ParsedQuery};
    pub use crate::record::StringRecord;
    pub use crate::service::RecordService;
    pub use crate::storage::{FileSnapshotStorage, MemorySnapshotStorage, SnapshotConfig};
    pub use crate::store::RecordStore;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
