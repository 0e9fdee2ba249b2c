//! Roster state - owns storage, records and preferences

use super::Config;
use crate::db::{LoadReport, LocalStorage, RecordStore};
use crate::query::{query_view, QueryParams};
use crate::services::{export, EmployeeService, Preferences};
use crate::stats::{summarize, RosterSummary};
use shared::models::{Capability, Employee, EmployeeDraft};
use shared::AppResult;

/// Everything the presentation layer talks to
///
/// Reads always go to the live collection, so a mutation is visible to the
/// very next query or summary.
#[derive(Debug)]
pub struct RosterState {
    records: RecordStore,
    preferences: Preferences,
    load_report: LoadReport,
}

impl RosterState {
    /// Open the on-disk database named by `config` and load the roster
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let path = config.db_path();
        tracing::info!(path = %path.display(), "Opening roster storage");
        let storage = LocalStorage::open(&path)?;
        Self::with_storage(storage)
    }

    /// Ephemeral roster (tests, demos)
    pub fn open_in_memory() -> AppResult<Self> {
        Self::with_storage(LocalStorage::open_in_memory()?)
    }

    pub fn with_storage(storage: LocalStorage) -> AppResult<Self> {
        let (records, load_report) = RecordStore::load(storage.clone())?;
        Ok(Self {
            records,
            preferences: Preferences::new(storage),
            load_report,
        })
    }

    /// How the collection was obtained at startup
    pub fn load_report(&self) -> LoadReport {
        self.load_report
    }

    /// Full collection snapshot
    pub fn load_all(&self) -> &[Employee] {
        self.records.snapshot()
    }

    pub fn query_view(&self, params: &QueryParams) -> Vec<Employee> {
        query_view(self.records.snapshot(), params)
    }

    pub fn aggregates(&self) -> RosterSummary {
        summarize(self.records.snapshot())
    }

    /// Mutation service bound to the stored capability flag
    pub fn employees(&mut self) -> AppResult<EmployeeService<'_>> {
        let capability = self.preferences.capability()?;
        Ok(EmployeeService::new(&mut self.records, capability))
    }

    pub fn create(&mut self, draft: EmployeeDraft) -> AppResult<Employee> {
        self.employees()?.create(draft)
    }

    pub fn update(&mut self, id: &str, draft: EmployeeDraft) -> AppResult<Option<Employee>> {
        self.employees()?.update(id, draft)
    }

    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        self.employees()?.delete(id)
    }

    /// Export the whole collection, regardless of any active view
    pub fn export_json(&self) -> AppResult<Vec<u8>> {
        export::export_json(self.records.snapshot())
    }

    pub fn export_csv(&self) -> AppResult<Vec<u8>> {
        export::export_csv(self.records.snapshot())
    }

    pub fn capability(&self) -> AppResult<Capability> {
        self.preferences.capability()
    }

    pub fn set_capability(&self, capability: Capability) -> AppResult<()> {
        self.preferences.set_capability(capability)
    }

    pub fn dark_mode(&self) -> AppResult<bool> {
        self.preferences.dark_mode()
    }

    pub fn set_dark_mode(&self, enabled: bool) -> AppResult<()> {
        self.preferences.set_dark_mode(enabled)
    }
}
