//! Record model for stored strings.
//!
//! A [`StringRecord`] couples a submitted string with its derived
//! properties and creation timestamp, keyed by the content digest of
//! its trimmed value.

#[allow(clippy::module_inception)]
pub mod record;

// Re-export commonly used types
pub use record::StringRecord;
