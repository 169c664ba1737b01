//! Capacity reporting data objects.

use serde::{Deserialize, Serialize};

use crate::types::DynamicData;

/// Cluster-wide capacity usage, in bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanSpaceUsage {
    pub total_capacity_b: i64,
    pub free_capacity_b: Option<i64>,
    pub uncommitted_b: Option<i64>,
    pub spa_overview: Option<VsanObjectSpaceSummary>,
    pub spa_details: Vec<VsanObjectSpaceSummary>,
    pub efficient_capacity: Option<DynamicData>,
    pub what_if_capacity: Vec<DynamicData>,
}

impl VsanSpaceUsage {
    /// Used capacity, when free capacity was reported.
    #[must_use]
    pub fn used_capacity_b(&self) -> Option<i64> {
        self.free_capacity_b
            .map(|free| self.total_capacity_b.saturating_sub(free))
    }
}

/// Space consumed by one class of objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanObjectSpaceSummary {
    pub obj_type: Option<String>,
    pub overhead_b: Option<i64>,
    pub temporary_overhead_b: Option<i64>,
    pub primary_capacity_b: Option<i64>,
    pub provision_capacity_b: Option<i64>,
    pub reserved_capacity_b: Option<i64>,
    pub overreserved_b: Option<i64>,
    pub physical_used_b: Option<i64>,
    pub used_b: Option<i64>,
}

/// Selects which entities a space query reports on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanSpaceQuerySpec {
    pub entity_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entity_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_capacity_requires_free() {
        let mut usage = VsanSpaceUsage {
            total_capacity_b: 1_000,
            ..VsanSpaceUsage::default()
        };
        assert_eq!(usage.used_capacity_b(), None);
        usage.free_capacity_b = Some(400);
        assert_eq!(usage.used_capacity_b(), Some(600));
    }
}
