//! Preference Model

use serde::{Deserialize, Serialize};

/// Capability flag gating write operations (admin / viewer)
///
/// This is a UI permission toggle, not a trust boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    #[default]
    Admin,
    Viewer,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Admin => "admin",
            Capability::Viewer => "viewer",
        }
    }

    /// Whether create / update / delete are allowed
    pub fn can_write(&self) -> bool {
        matches!(self, Capability::Admin)
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_json() {
        assert_eq!(serde_json::to_string(&Capability::Viewer).unwrap(), "\"viewer\"");
        let cap: Capability = serde_json::from_str("\"admin\"").unwrap();
        assert!(cap.can_write());
        assert!(!Capability::Viewer.can_write());
    }
}
