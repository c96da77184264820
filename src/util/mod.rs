//! Utility modules for tessera.

pub mod digest;

// Re-export commonly used types
pub use digest::*;
