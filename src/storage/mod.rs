//! Snapshot persistence layer for tessera.
//!
//! This module provides a pluggable snapshot system: the whole record set
//! is loaded and saved as one unit through the [`SnapshotStorage`] trait,
//! with file-system and in-memory backends.

pub mod file;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use file::*;
pub use memory::*;
pub use traits::*;
