//! Capability discovery.

use serde::{Deserialize, Serialize};

use crate::mor::ManagedObjectReference;
use crate::types::DynamicData;

/// Capabilities supported by one target (vCenter, cluster or host).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanCapability {
    pub target: Option<ManagedObjectReference>,
    pub capabilities: Vec<String>,
    pub statuses: Vec<DynamicData>,
}

impl VsanCapability {
    /// Whether the named capability (e.g. `perfsvcverbosemode`) is supported.
    #[must_use]
    pub fn supports(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supports_matches_exact_names() {
        let cap = VsanCapability {
            capabilities: vec!["fileservices".to_string(), "perfanalysis".to_string()],
            ..VsanCapability::default()
        };
        assert!(cap.supports("fileservices"));
        assert!(!cap.supports("fileservice"));
    }
}
