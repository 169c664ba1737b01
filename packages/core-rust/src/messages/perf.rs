//! Operations of `VsanPerformanceManager`.

use crate::mor::ManagedObjectReference;
use crate::types::{
    DynamicData, VsanObjectInformation, VsanPerfDiagnoseQuerySpec, VsanPerfDiagnosticException,
    VsanPerfDiagnosticResult, VsanPerfEntityMetricCsv, VsanPerfEntityType,
    VsanPerfNodeInformation, VsanPerfQuerySpec, VsanPerfTimeRange, VsanPerfTimeRangeQuerySpec,
};

crate::soap_messages! {
    /// Queries CSV performance data for the given entity specs.
    VsanPerfQueryPerf => VsanPerfQueryPerfResponse {
        query_specs: Vec<VsanPerfQuerySpec>,
        cluster?: ManagedObjectReference,
    } -> Vec<VsanPerfEntityMetricCsv>;

    /// Lists the entity types the performance service reports on.
    VsanPerfGetSupportedEntityTypes => VsanPerfGetSupportedEntityTypesResponse {}
        -> Vec<VsanPerfEntityType>;

    /// Lists entity types whose metrics are aggregated from other entities.
    VsanPerfGetAggregatedEntityTypes => VsanPerfGetAggregatedEntityTypesResponse {}
        -> Vec<VsanPerfEntityType>;

    /// Returns the policy and health of the performance statistics object.
    VsanPerfQueryStatsObjectInformation => VsanPerfQueryStatsObjectInformationResponse {
        cluster?: ManagedObjectReference,
    } -> VsanObjectInformation;

    /// Creates the statistics object, enabling the performance service.
    VsanPerfCreateStatsObject => VsanPerfCreateStatsObjectResponse {
        cluster?: ManagedObjectReference,
        profile?: DynamicData,
    } -> String;

    /// Task variant of [`VsanPerfCreateStatsObject`].
    VsanPerfCreateStatsObjectTask => VsanPerfCreateStatsObjectTaskResponse {
        cluster?: ManagedObjectReference,
        profile?: DynamicData,
    } -> ManagedObjectReference;

    /// Deletes the statistics object, disabling the performance service.
    VsanPerfDeleteStatsObject => VsanPerfDeleteStatsObjectResponse {
        cluster?: ManagedObjectReference,
    } -> bool;

    /// Task variant of [`VsanPerfDeleteStatsObject`].
    VsanPerfDeleteStatsObjectTask => VsanPerfDeleteStatsObjectTaskResponse {
        cluster?: ManagedObjectReference,
    } -> ManagedObjectReference;

    /// Applies a storage policy to the statistics object.
    VsanPerfSetStatsObjectPolicy => VsanPerfSetStatsObjectPolicyResponse {
        cluster?: ManagedObjectReference,
        profile?: DynamicData,
    } -> bool;

    /// Reports which host runs the statistics master and collectors.
    VsanPerfQueryNodeInformation => VsanPerfQueryNodeInformationResponse {
        cluster?: ManagedObjectReference,
    } -> Vec<VsanPerfNodeInformation>;

    /// Runs the performance diagnosis engine synchronously.
    VsanPerfDiagnose => VsanPerfDiagnoseResponse {
        perf_diagnose_query: VsanPerfDiagnoseQuerySpec,
        cluster?: ManagedObjectReference,
    } -> Vec<VsanPerfDiagnosticResult>;

    /// Task variant of [`VsanPerfDiagnose`].
    VsanPerfDiagnoseTask => VsanPerfDiagnoseTaskResponse {
        perf_diagnose_query: VsanPerfDiagnoseQuerySpec,
        cluster?: ManagedObjectReference,
    } -> ManagedObjectReference;

    VsanPerfGetSupportedDiagnosticExceptions => VsanPerfGetSupportedDiagnosticExceptionsResponse {}
        -> Vec<VsanPerfDiagnosticException>;

    /// Lists saved time ranges.
    VsanPerfQueryTimeRanges => VsanPerfQueryTimeRangesResponse {
        cluster?: ManagedObjectReference,
        query_spec: VsanPerfTimeRangeQuerySpec,
    } -> Vec<VsanPerfTimeRange>;

    VsanPerfSaveTimeRanges => VsanPerfSaveTimeRangesResponse {
        cluster?: ManagedObjectReference,
        time_ranges: Vec<VsanPerfTimeRange>,
    };

    VsanPerfDeleteTimeRange => VsanPerfDeleteTimeRangeResponse {
        cluster?: ManagedObjectReference,
        name: String,
    };

    /// Health of the performance service itself.
    VsanPerfQueryClusterHealth => VsanPerfQueryClusterHealthResponse {
        cluster: ManagedObjectReference,
    } -> Vec<DynamicData>;

    /// Switches collection of verbose-mode metrics.
    VsanPerfToggleVerboseMode => VsanPerfToggleVerboseModeResponse {
        cluster?: ManagedObjectReference,
        verbose_mode: bool,
    };
}
