//! Record Store - authoritative employee collection with full-collection persistence

use super::schema::{parse_collection, ParsedCollection};
use super::seed::seed_employees;
use super::storage::{LocalStorage, EMPLOYEES_KEY};
use shared::models::Employee;
use shared::AppResult;

/// Where the loaded collection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Nothing stored yet; seed installed
    Seeded,
    /// Stored blob was unreadable; seed installed in its place
    Recovered,
    /// Stored collection used; `dropped` malformed entries were discarded
    Persisted { dropped: usize },
}

/// Result of [`RecordStore::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub source: LoadSource,
    pub count: usize,
}

/// Owns the employee collection and mediates every write to storage
///
/// Every mutation goes through [`RecordStore::replace_all`], which writes the
/// whole collection in one storage transaction before swapping it in memory.
#[derive(Debug)]
pub struct RecordStore {
    storage: LocalStorage,
    records: Vec<Employee>,
}

impl RecordStore {
    /// Load the persisted collection, installing the seed when needed
    pub fn load(storage: LocalStorage) -> AppResult<(Self, LoadReport)> {
        let stored = storage.get(EMPLOYEES_KEY)?;

        let (records, source, needs_write) = match stored {
            None => {
                tracing::info!("No stored roster found, installing seed collection");
                (seed_employees(), LoadSource::Seeded, true)
            }
            Some(bytes) => match parse_collection(&bytes) {
                ParsedCollection::NotAnArray(reason) => {
                    tracing::warn!(%reason, "Stored roster is corrupt, reinstalling seed collection");
                    (seed_employees(), LoadSource::Recovered, true)
                }
                ParsedCollection::Records { valid, dropped } => {
                    if dropped > 0 {
                        tracing::warn!(dropped, kept = valid.len(), "Dropped malformed stored employees");
                    }
                    (valid, LoadSource::Persisted { dropped }, false)
                }
            },
        };

        let mut store = Self {
            storage,
            records: Vec::new(),
        };
        if needs_write {
            store.replace_all(records)?;
        } else {
            store.records = records;
        }

        let report = LoadReport {
            source,
            count: store.records.len(),
        };
        tracing::info!(count = report.count, source = ?report.source, "Roster loaded");
        Ok((store, report))
    }

    /// Current collection, in stored order (most recent first)
    pub fn snapshot(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by its opaque id
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.records.iter().find(|e| e.id == id)
    }

    /// Replace the full collection and persist it
    ///
    /// Storage is written first; on failure the in-memory collection is left
    /// untouched so memory and storage never disagree.
    pub fn replace_all(&mut self, records: Vec<Employee>) -> AppResult<()> {
        let bytes = serde_json::to_vec(&records)?;
        self.storage.put(EMPLOYEES_KEY, &bytes)?;
        self.records = records;
        Ok(())
    }
}
