//! Task and performance data objects of the vSphere API.

use serde::{Deserialize, Serialize};

use crate::mor::ManagedObjectReference;
use crate::time::DateTime;
use crate::types::{DynamicData, LocalizableMessage};

/// Snapshot of a task's progress and outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskInfo {
    pub key: String,
    pub task: ManagedObjectReference,
    pub description: Option<LocalizableMessage>,
    pub name: Option<String>,
    pub description_id: String,
    pub entity: Option<ManagedObjectReference>,
    pub entity_name: Option<String>,
    /// `queued`, `running`, `success` or `error`.
    pub state: String,
    pub cancelled: bool,
    pub cancelable: bool,
    pub error: Option<DynamicData>,
    pub result: Option<serde_json::Value>,
    /// Percent done, while running.
    pub progress: Option<i32>,
    pub queue_time: Option<DateTime>,
    pub start_time: Option<DateTime>,
    pub complete_time: Option<DateTime>,
    pub event_chain_id: i32,
}

impl TaskInfo {
    /// Whether the task reached `success` or `error`.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.state.as_str(), "success" | "error")
    }
}

/// A counter of one entity, optionally narrowed to an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerfMetricId {
    pub counter_id: i32,
    /// Empty for the aggregate, `*` for every instance.
    pub instance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerfQuerySpec {
    pub entity: ManagedObjectReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sample: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metric_id: Vec<PerfMetricId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_id: Option<i32>,
    /// `normal` or `csv`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerfProviderSummary {
    pub entity: ManagedObjectReference,
    pub current_supported: bool,
    pub summary_supported: bool,
    /// Seconds between real-time samples.
    pub refresh_rate: Option<i32>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn task_info_reports_completion() {
        let running: TaskInfo = serde_json::from_value(json!({
            "key": "task-77",
            "task": {"type": "Task", "value": "task-77"},
            "descriptionId": "com.vmware.vsan.diskmgmt.tasks.initialize",
            "state": "running",
            "progress": 40,
        }))
        .unwrap();
        assert!(!running.is_done());
        assert_eq!(running.task, ManagedObjectReference::task("task-77"));
        assert_eq!(running.progress, Some(40));

        let failed = TaskInfo {
            state: "error".to_string(),
            ..running
        };
        assert!(failed.is_done());
    }

    #[test]
    fn perf_query_spec_omits_unset_fields() {
        let spec = PerfQuerySpec {
            entity: ManagedObjectReference::host("host-10"),
            metric_id: vec![PerfMetricId {
                counter_id: 6,
                instance: String::new(),
            }],
            ..PerfQuerySpec::default()
        };
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "entity": {"type": "HostSystem", "value": "host-10"},
                "metricId": [{"counterId": 6, "instance": ""}],
            })
        );
    }
}
