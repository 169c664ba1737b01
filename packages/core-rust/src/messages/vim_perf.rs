//! Operations of the vSphere `PerformanceManager`.
//!
//! Distinct from the vSAN performance service in [`super::perf`]: these
//! counters are host and VM statistics keyed by numeric counter ids.

use crate::mor::ManagedObjectReference;
use crate::time::DateTime;
use crate::types::{DynamicData, PerfMetricId, PerfProviderSummary, PerfQuerySpec};

crate::soap_messages! {
    QueryPerf => QueryPerfResponse {
        query_spec: Vec<PerfQuerySpec>,
    } -> Vec<DynamicData>;

    QueryPerfComposite => QueryPerfCompositeResponse {
        query_spec: PerfQuerySpec,
    } -> DynamicData;

    QueryAvailablePerfMetric => QueryAvailablePerfMetricResponse {
        entity: ManagedObjectReference,
        begin_time?: DateTime,
        end_time?: DateTime,
        interval_id?: i32,
    } -> Vec<PerfMetricId>;

    QueryPerfCounter => QueryPerfCounterResponse {
        counter_id: Vec<i32>,
    } -> Vec<DynamicData>;

    QueryPerfCounterByLevel => QueryPerfCounterByLevelResponse {
        level: i32,
    } -> Vec<DynamicData>;

    QueryPerfProviderSummary => QueryPerfProviderSummaryResponse {
        entity: ManagedObjectReference,
    } -> PerfProviderSummary;

    CreatePerfInterval => CreatePerfIntervalResponse {
        interval_id: DynamicData,
    };

    RemovePerfInterval => RemovePerfIntervalResponse {
        sampling_period: i32,
    };

    UpdatePerfInterval => UpdatePerfIntervalResponse {
        interval: DynamicData,
    };

    ResetCounterLevelMapping => ResetCounterLevelMappingResponse {
        counters: Vec<i32>,
    };

    UpdateCounterLevelMapping => UpdateCounterLevelMappingResponse {
        counter_level_map: Vec<DynamicData>,
    };
}
