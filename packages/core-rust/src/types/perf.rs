//! Performance service data objects.
//!
//! Performance data is returned in a compact CSV form: one
//! [`VsanPerfEntityMetricCsv`] per entity, whose `sample_info` lists the
//! sample timestamps and whose series each hold one comma-separated value
//! per timestamp.

use serde::{Deserialize, Serialize};

use crate::time::DateTime;

/// Selects the entities and time window of a performance query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPerfQuerySpec {
    /// `<entityType>:<uuid>`; the uuid may be `*` for every entity of the type.
    pub entity_ref_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
}

impl VsanPerfQuerySpec {
    /// Queries every entity of `entity_type` between `start` and `end`.
    #[must_use]
    pub fn all_entities(entity_type: &str, start: DateTime, end: DateTime) -> Self {
        Self {
            entity_ref_id: format!("{entity_type}:*"),
            start_time: Some(start),
            end_time: Some(end),
            ..Self::default()
        }
    }
}

/// Identifies one metric of an entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPerfMetricId {
    pub label: String,
    pub group: Option<String>,
    pub ranged_metric_id: Option<String>,
    pub description: Option<String>,
    pub metrics_collect_interval: Option<i32>,
    pub dependent_metrics: Vec<String>,
}

/// Values of one metric, one per sample, comma separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPerfMetricSeriesCsv {
    pub metric_id: VsanPerfMetricId,
    pub threshold: Option<VsanPerfThreshold>,
    pub values: String,
}

impl VsanPerfMetricSeriesCsv {
    /// Splits `values` into its per-sample fields.
    pub fn samples(&self) -> impl Iterator<Item = &str> {
        self.values.split(',')
    }
}

/// Warning and error thresholds attached to a metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPerfThreshold {
    pub direction: String,
    pub yellow: Option<String>,
    pub red: Option<String>,
}

/// All metrics of one entity over the queried window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPerfEntityMetricCsv {
    /// `<entityType>:<uuid>`.
    pub entity_ref_id: String,
    /// Comma-separated sample timestamps, each `YYYY-MM-DD HH:MM:SS` in UTC.
    pub sample_info: String,
    pub value: Vec<VsanPerfMetricSeriesCsv>,
}

impl VsanPerfEntityMetricCsv {
    /// Splits `entity_ref_id` into entity type and uuid.
    ///
    /// Returns `None` if there is no `:` separator.
    #[must_use]
    pub fn entity(&self) -> Option<(&str, &str)> {
        self.entity_ref_id.split_once(':')
    }
}

/// A graph grouping metrics of an entity type in the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPerfGraph {
    pub id: String,
    pub metrics: Vec<VsanPerfMetricId>,
    pub unit: String,
    pub threshold: Option<VsanPerfThreshold>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// An entity type the performance service can report on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPerfEntityType {
    pub name: String,
    pub id: String,
    pub graphs: Vec<VsanPerfGraph>,
    pub description: Option<String>,
}

/// Where the performance service runs and its role on each host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPerfNodeInformation {
    pub version: String,
    pub hostname: Option<String>,
    pub error: Option<crate::types::LocalizableMessage>,
    pub is_cmmds_master: bool,
    pub is_stats_master: bool,
    pub vsan_master_uuid: Option<String>,
    pub vsan_cmmds_master_uuid: Option<String>,
}

/// A named window of performance history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPerfTimeRange {
    pub name: String,
    pub start_time: Option<DateTime>,
    pub end_time: Option<DateTime>,
}

/// Filter for saved time ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPerfTimeRangeQuerySpec {
    pub name: Option<String>,
    pub start_time_from: Option<DateTime>,
    pub start_time_to: Option<DateTime>,
    pub end_time_from: Option<DateTime>,
    pub end_time_to: Option<DateTime>,
}

/// Input of a performance diagnosis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPerfDiagnoseQuerySpec {
    pub start_time: Option<DateTime>,
    pub end_time: Option<DateTime>,
    /// Benchmark goal such as `max_iops` or `max_throughput`.
    pub query_type: String,
    pub context: Option<String>,
}

/// One finding of a performance diagnosis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPerfDiagnosticResult {
    pub exception_id: String,
    pub recommendation: Option<String>,
    pub aggregation_function: Option<String>,
    pub aggregation_data: Vec<VsanPerfEntityMetricCsv>,
    pub exception_data: Vec<VsanPerfEntityMetricCsv>,
}

/// Describes an exception the diagnosis engine can report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPerfDiagnosticException {
    pub exception_id: String,
    pub exception_message: String,
    pub exception_details: String,
    pub exception_url: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn all_entities_spec_uses_wildcard() {
        let spec = VsanPerfQuerySpec::all_entities(
            "cluster-domclient",
            DateTime::from_millis(0),
            DateTime::from_millis(60_000),
        );
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["entityRefId"], "cluster-domclient:*");
        assert_eq!(json["startTime"], "1970-01-01T00:00:00.000Z");
        assert_eq!(json["endTime"], "1970-01-01T00:01:00.000Z");
        assert!(json.get("labels").is_none());
    }

    #[test]
    fn entity_metric_csv_splits_ref_id() {
        let metric: VsanPerfEntityMetricCsv = serde_json::from_value(json!({
            "entityRefId": "disk-group:52e5ec4e",
            "sampleInfo": "2019-05-10 08:30:00,2019-05-10 08:35:00",
            "value": [{"metricId": {"label": "iopsRead"}, "values": "10,12"}],
        }))
        .unwrap();
        assert_eq!(metric.entity(), Some(("disk-group", "52e5ec4e")));
        assert_eq!(metric.value[0].samples().collect::<Vec<_>>(), vec!["10", "12"]);
    }

    #[test]
    fn entity_without_separator() {
        let metric = VsanPerfEntityMetricCsv {
            entity_ref_id: "broken".to_string(),
            ..VsanPerfEntityMetricCsv::default()
        };
        assert_eq!(metric.entity(), None);
    }
}
