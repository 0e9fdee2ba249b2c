//! Preferences - dark mode and capability flag
//!
//! Each preference is its own keyed blob, independent of the employee
//! collection. Missing or unreadable values fall back to defaults.

use crate::db::storage::{LocalStorage, CAPABILITY_KEY, DARK_MODE_KEY};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::models::Capability;
use shared::AppResult;

#[derive(Debug, Clone)]
pub struct Preferences {
    storage: LocalStorage,
}

impl Preferences {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Dark mode on/off (default off)
    pub fn dark_mode(&self) -> AppResult<bool> {
        Ok(self.read(DARK_MODE_KEY)?.unwrap_or(false))
    }

    pub fn set_dark_mode(&self, enabled: bool) -> AppResult<()> {
        self.write(DARK_MODE_KEY, &enabled)
    }

    /// Capability flag (default admin)
    pub fn capability(&self) -> AppResult<Capability> {
        Ok(self.read(CAPABILITY_KEY)?.unwrap_or_default())
    }

    pub fn set_capability(&self, capability: Capability) -> AppResult<()> {
        tracing::info!(%capability, "Capability changed");
        self.write(CAPABILITY_KEY, &capability)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let Some(bytes) = self.storage.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "Ignoring unreadable preference");
                Ok(None)
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.storage.put(key, &bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> (LocalStorage, Preferences) {
        let storage = LocalStorage::open_in_memory().unwrap();
        (storage.clone(), Preferences::new(storage))
    }

    #[test]
    fn test_defaults() {
        let (_, prefs) = prefs();
        assert!(!prefs.dark_mode().unwrap());
        assert_eq!(prefs.capability().unwrap(), Capability::Admin);
    }

    #[test]
    fn test_stored_as_json() {
        let (storage, prefs) = prefs();
        prefs.set_dark_mode(true).unwrap();
        prefs.set_capability(Capability::Viewer).unwrap();

        assert_eq!(storage.get(DARK_MODE_KEY).unwrap().unwrap(), b"true");
        assert_eq!(storage.get(CAPABILITY_KEY).unwrap().unwrap(), b"\"viewer\"");
        assert!(prefs.dark_mode().unwrap());
        assert_eq!(prefs.capability().unwrap(), Capability::Viewer);
    }

    #[test]
    fn test_unreadable_falls_back() {
        let (storage, prefs) = prefs();
        storage.put(CAPABILITY_KEY, b"\"superuser\"").unwrap();
        storage.put(DARK_MODE_KEY, b"yes").unwrap();
        assert_eq!(prefs.capability().unwrap(), Capability::Admin);
        assert!(!prefs.dark_mode().unwrap());
    }
}
