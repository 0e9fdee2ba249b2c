//! redb-based client-local storage
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `kv` | blob key | JSON bytes | Independent keyed blobs |
//!
//! # Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`EMPLOYEES_KEY`] | JSON array of employees |
//! | [`DARK_MODE_KEY`] | JSON boolean |
//! | [`CAPABILITY_KEY`] | JSON string, `"admin"` / `"viewer"` |
//!
//! # Durability
//!
//! Every [`LocalStorage::put`] is a single write transaction. redb commits
//! with copy-on-write and an atomic pointer swap, so a reader sees either the
//! previous blob or the new one, never a partial write.

use redb::{Database, ReadableDatabase, ReadableTable, StorageBackend, TableDefinition};
use shared::AppError;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Keyed blobs: key = blob name, value = JSON bytes
const KV_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("kv");

/// Employee collection
pub const EMPLOYEES_KEY: &str = "roster.employees";
/// Dark mode preference
pub const DARK_MODE_KEY: &str = "roster.dark_mode";
/// Capability preference
pub const CAPABILITY_KEY: &str = "roster.capability";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!("Local storage failure: {}", err);
        AppError::storage_unavailable(err.to_string())
    }
}

/// Client-local keyed blob storage backed by redb
#[derive(Clone)]
pub struct LocalStorage {
    db: Arc<Database>,
}

impl std::fmt::Debug for LocalStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStorage").finish_non_exhaustive()
    }
}

impl LocalStorage {
    /// Open or create the database at the given path
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests, ephemeral sessions)
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::with_backend(redb::backends::InMemoryBackend::new())
    }

    /// Open a database on a custom redb backend
    pub fn with_backend(backend: impl StorageBackend) -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(backend)?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create the table so later read transactions can open it
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Read a blob
    pub fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    /// Write a blob, replacing any previous value in one transaction
    pub fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Remove a blob; returns whether it existed
    pub fn remove(&self, key: &str) -> StorageResult<bool> {
        let txn = self.db.begin_write()?;
        let existed = {
            let mut table = txn.open_table(KV_TABLE)?;
            table.remove(key)?.is_some()
        };
        txn.commit()?;
        Ok(existed)
    }
}
