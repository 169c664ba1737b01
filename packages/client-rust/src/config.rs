use std::time::Duration;

use serde::{Deserialize, Serialize};
use vsan_core::ApiVersion;

use crate::transport::DeadlineLayer;

/// Where and how the vSAN management service is reached.
///
/// Transports use these values to address the service; the stubs never read
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service path on the vCenter or host endpoint.
    pub path: String,
    /// SOAP namespace of the vSAN API.
    pub namespace: String,
    /// Timeout applied to calls whose context carries no deadline.
    /// `None` leaves such calls unbounded.
    pub default_timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            path: "/vsanHealth".to_string(),
            namespace: "vsan".to_string(),
            default_timeout_ms: Some(60_000),
        }
    }
}

impl ClientConfig {
    /// Service URL on `host` (e.g. `vc.example.com` or `vc.example.com:443`).
    #[must_use]
    pub fn service_url(&self, host: &str) -> String {
        format!("https://{host}{}", self.path)
    }

    /// `SOAPAction` header value for requests at `version`.
    #[must_use]
    pub fn soap_action(&self, version: &ApiVersion) -> String {
        format!("urn:{}/{version}", self.namespace)
    }

    /// Deadline layer carrying the configured default timeout.
    #[must_use]
    pub fn deadline_layer(&self) -> DeadlineLayer {
        match self.default_timeout_ms {
            Some(ms) => DeadlineLayer::with_default_timeout(Duration::from_millis(ms)),
            None => DeadlineLayer::new(),
        }
    }
}

/// Collector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Value of the `vcenter` tag on every point.
    pub vcenter: String,
    /// Collection interval in seconds; also the width of one lookback period.
    pub sampling_period_secs: u64,
    /// Sampling periods to look back on the first performance query of a cluster.
    pub lookback_periods: u64,
    /// Performance entity types to collect (`*` and `?` globs). Empty means all.
    pub metric_include: Vec<String>,
    /// Performance entity types to skip; wins over `metric_include`.
    pub metric_exclude: Vec<String>,
    /// Answer health queries from the service's cache instead of rerunning tests.
    pub fetch_from_cache: bool,
    /// Properties requested from the health summary.
    pub health_fields: Vec<String>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            vcenter: String::new(),
            sampling_period_secs: 300,
            lookback_periods: 3,
            metric_include: Vec::new(),
            metric_exclude: Vec::new(),
            fetch_from_cache: true,
            health_fields: vec![
                "overallHealth".to_string(),
                "overallHealthDescription".to_string(),
            ],
        }
    }
}

impl CollectorConfig {
    /// How far back the first performance query of a cluster reaches.
    #[must_use]
    pub fn lookback_secs(&self) -> u64 {
        self.lookback_periods.saturating_mul(self.sampling_period_secs)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn client_defaults_match_service_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.service_url("vc.example.com"), "https://vc.example.com/vsanHealth");
        assert_eq!(config.soap_action(&ApiVersion::new(7, 0)), "urn:vsan/7.0");
    }

    #[test]
    fn partial_client_config_keeps_defaults() {
        let config: ClientConfig = serde_json::from_value(json!({"default_timeout_ms": null})).unwrap();
        assert_eq!(config.path, "/vsanHealth");
        assert_eq!(config.default_timeout_ms, None);
    }

    #[test]
    fn collector_defaults() {
        let config = CollectorConfig::default();
        assert_eq!(config.lookback_secs(), 900);
        assert!(config.fetch_from_cache);
        assert_eq!(config.health_fields, ["overallHealth", "overallHealthDescription"]);
    }

    #[test]
    fn collector_config_deserializes() {
        let config: CollectorConfig = serde_json::from_value(json!({
            "vcenter": "vc01.lab",
            "sampling_period_secs": 60,
            "metric_include": ["cluster-*", "host-domclient"],
            "metric_exclude": ["*-disk"],
        }))
        .unwrap();
        assert_eq!(config.vcenter, "vc01.lab");
        assert_eq!(config.lookback_secs(), 180);
        assert_eq!(config.metric_include.len(), 2);
        assert_eq!(config.metric_exclude, ["*-disk"]);
    }
}
