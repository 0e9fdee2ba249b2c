//! Persistence layer
//!
//! - [`storage`] - redb keyed blob storage
//! - [`schema`] - structural check of stored records
//! - [`seed`] - fallback collection
//! - [`record_store`] - in-memory collection + full-collection writes

pub mod record_store;
pub mod schema;
pub mod seed;
pub mod storage;

pub use record_store::{LoadReport, LoadSource, RecordStore};
pub use schema::{check_record, parse_collection, ParsedCollection, RecordCheck};
pub use seed::seed_employees;
pub use storage::{LocalStorage, StorageError, StorageResult};
