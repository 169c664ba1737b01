//! Health service data objects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mor::ManagedObjectReference;
use crate::time::DateTime;
use crate::types::DynamicData;

/// Overall health colour reported by the health service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    Green,
    Yellow,
    Red,
    Info,
    Skipped,
    #[default]
    Unknown,
}

impl HealthStatus {
    /// Parses the wire string; anything unrecognised is `Unknown`.
    #[must_use]
    pub fn from_wire(s: &str) -> Self {
        match s {
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "red" => Self::Red,
            "info" => Self::Info,
            "skipped" => Self::Skipped,
            _ => Self::Unknown,
        }
    }

    /// Numeric severity: red 2, yellow 1, green 0, anything else -1.
    #[must_use]
    pub fn severity(self) -> i64 {
        match self {
            Self::Red => 2,
            Self::Yellow => 1,
            Self::Green => 0,
            Self::Info | Self::Skipped | Self::Unknown => -1,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Info => "info",
            Self::Skipped => "skipped",
            Self::Unknown => "unknown",
        })
    }
}

/// Health summary of a whole cluster.
///
/// The service fills only the properties named in the request's `fields`
/// list, so everything here is optional or defaulted. `overall_health` stays
/// a string on the wire and is interpreted through [`HealthStatus::from_wire`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanClusterHealthSummary {
    pub overall_health: String,
    pub overall_health_description: String,
    pub timestamp: Option<DateTime>,
    pub groups: Vec<VsanClusterHealthGroup>,
    pub cluster_status: Option<DynamicData>,
    pub network_health: Option<DynamicData>,
    pub object_health: Option<DynamicData>,
    pub disk_health: Option<DynamicData>,
    pub cluster_versions: Option<DynamicData>,
    pub health_test_summary: Option<DynamicData>,
}

impl VsanClusterHealthSummary {
    /// The parsed overall health colour.
    #[must_use]
    pub fn status(&self) -> HealthStatus {
        HealthStatus::from_wire(&self.overall_health)
    }
}

/// A group of related health tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanClusterHealthGroup {
    pub group_id: String,
    pub group_name: String,
    pub group_health: String,
    pub group_tests: Vec<VsanClusterHealthTest>,
    pub group_details: Vec<DynamicData>,
    pub in_progress: Option<bool>,
}

/// Result of one health test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanClusterHealthTest {
    pub test_id: String,
    pub test_name: String,
    pub test_description: String,
    pub test_short_description: String,
    pub test_health: String,
    pub test_details: Vec<DynamicData>,
    pub test_actions: Vec<DynamicData>,
}

/// Health check interval, silenced checks and telemetry settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanClusterHealthConfigs {
    pub enable_vsan_telemetry: Option<bool>,
    pub vsan_telemetry_interval: Option<i32>,
    pub vsan_telemetry_proxy: Option<VsanClusterTelemetryProxyConfig>,
    pub configs: Vec<DynamicData>,
}

/// Proxy used to reach the telemetry endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanClusterTelemetryProxyConfig {
    pub host: Option<String>,
    pub port: Option<i32>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub auto_discovered: Option<bool>,
}

/// Hardware compatibility state of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanClusterHclInfo {
    pub hcl_db_last_update: Option<DateTime>,
    pub hcl_db_age_health: Option<String>,
    pub host_results: Vec<DynamicData>,
    pub update_items: Vec<DynamicData>,
}

/// Versions of the health service on vCenter and every host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanClusterHealthSystemVersionResult {
    pub host_results: Vec<DynamicData>,
    pub vc_version: Option<String>,
    pub issue_found: bool,
}

/// Outcome of a host-side or cluster-wide VM creation test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanClusterCreateVmHealthTestResult {
    pub cluster_results: Vec<VsanHostCreateVmHealthTestResult>,
    pub test_id: Option<String>,
    pub timestamp: Option<DateTime>,
}

/// Per-host VM creation test outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanHostCreateVmHealthTestResult {
    pub hostname: String,
    pub state: String,
    pub fault: Option<DynamicData>,
}

/// Outcome of a network load test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanClusterNetworkLoadTestResult {
    pub cluster_result: Option<DynamicData>,
    pub host_results: Vec<DynamicData>,
}

/// A support bundle upload attached to a service request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanAttachToSrOperation {
    pub task: Option<ManagedObjectReference>,
    pub success: Option<bool>,
    pub timestamp: Option<DateTime>,
    pub sr_number: String,
}

impl Serialize for HealthStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HealthStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&s))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn severity_mapping() {
        assert_eq!(HealthStatus::Red.severity(), 2);
        assert_eq!(HealthStatus::Yellow.severity(), 1);
        assert_eq!(HealthStatus::Green.severity(), 0);
        assert_eq!(HealthStatus::Unknown.severity(), -1);
        assert_eq!(HealthStatus::Info.severity(), -1);
    }

    #[test]
    fn from_wire_is_total() {
        assert_eq!(HealthStatus::from_wire("red"), HealthStatus::Red);
        assert_eq!(HealthStatus::from_wire("RED"), HealthStatus::Unknown);
        assert_eq!(HealthStatus::from_wire(""), HealthStatus::Unknown);
    }

    #[test]
    fn unknown_colour_deserializes() {
        let status: HealthStatus = serde_json::from_value(json!("purple")).unwrap();
        assert_eq!(status, HealthStatus::Unknown);
    }

    #[test]
    fn partial_summary_decodes() {
        let summary: VsanClusterHealthSummary = serde_json::from_value(json!({
            "overallHealth": "yellow",
            "overallHealthDescription": "Disk balance",
        }))
        .unwrap();
        assert_eq!(summary.status(), HealthStatus::Yellow);
        assert!(summary.groups.is_empty());
        assert_eq!(summary.status().to_string(), "yellow");
    }
}
