//! Shared types for the roster workspace
//!
//! Domain models, the unified error system and small utilities used by
//! `roster-core` and by whatever presentation layer drives it.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
