//! Service layer orchestrating analysis, storage, and query interpretation.

pub mod response;
#[allow(clippy::module_inception)]
pub mod service;

// Re-export commonly used types
pub use response::{FilteredListing, InterpretedListing, InterpretedQuery};
pub use service::RecordService;
