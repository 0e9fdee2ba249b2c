//! Data models
//!
//! Shared between roster-core and the presentation layer.
//! JSON field names are camelCase, matching the persisted collection.

pub mod employee;
pub mod preference;

// Re-exports
pub use employee::*;
pub use preference::*;
