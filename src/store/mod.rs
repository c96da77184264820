//! Record store built on top of the snapshot storage backends.

#[allow(clippy::module_inception)]
pub mod store;

// Re-export commonly used types
pub use store::RecordStore;
