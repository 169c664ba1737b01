//! Data objects of the vSAN management API and the vSphere objects it
//! shares.
//!
//! Only the objects that callers commonly inspect are modelled field by
//! field; the rest travel as [`DynamicData`]. All structs default missing
//! properties so partially filled results still decode.

pub mod capability;
pub mod cluster;
pub mod common;
pub mod file_service;
pub mod health;
pub mod host;
pub mod iscsi;
pub mod object;
pub mod perf;
pub mod property;
pub mod space;
pub mod task;

pub use capability::VsanCapability;
pub use cluster::{
    HostMaintenanceSpec, VimClusterVsanFaultDomainSpec, VimClusterVsanFaultDomainsConfigSpec,
    VimClusterVsanPreferredFaultDomainInfo, VimClusterVsanWitnessHostInfo,
    VimClusterVsanWitnessSpec, VsanClusterDefaultConfig, VsanConfigInfoEx,
    VsanDataEfficiencyCapacityState, VsanDataEfficiencyConfig, VsanHostDecommissionMode,
    VsanHostDiskMapInfoEx, VsanHostDiskMapping, VsanReconfigSpec,
};
pub use common::{DynamicData, KeyAnyValue, KeyValue, LocalizableMessage, OptionValue, UserSession};
pub use file_service::{
    VsanFileServiceDomain, VsanFileServiceDomainConfig, VsanFileServiceDomainQuerySpec,
    VsanFileServiceOvfSpec, VsanFileShare, VsanFileShareConfig, VsanFileShareQueryResult,
    VsanFileShareQuerySpec,
};
pub use health::{
    HealthStatus, VsanAttachToSrOperation, VsanClusterCreateVmHealthTestResult,
    VsanClusterHealthConfigs, VsanClusterHealthGroup, VsanClusterHealthSummary,
    VsanClusterHealthSystemVersionResult, VsanClusterHealthTest, VsanClusterHclInfo,
    VsanClusterNetworkLoadTestResult, VsanClusterTelemetryProxyConfig,
    VsanHostCreateVmHealthTestResult,
};
pub use host::{
    HostVsanInternalSystemCmmdsQuery, HostVsanInternalSystemVsanObjectOperationResult,
    VsanHostAboutInfoEx, VsanHostRuntimeStats, VsanNewPolicyBatch, VsanPolicyChangeBatch,
    VsanPolicySatisfiability, VsanProactiveRebalanceInfoEx, VsanQueryResultHostInfo,
    VsanRepairObjectsResult, VsanRuntimeStatsHostMap, VsanWhatIfEvacResult,
};
pub use iscsi::{
    VsanIscsiInitiatorGroup, VsanIscsiLun, VsanIscsiLunSpec, VsanIscsiTarget,
    VsanIscsiTargetAuthSpec, VsanIscsiTargetSpec,
};
pub use object::{
    VsanHostVsanObjectSyncQueryResult, VsanObjectIdentity, VsanObjectIdentityAndHealth,
    VsanObjectInformation, VsanObjectQuerySpec,
};
pub use perf::{
    VsanPerfDiagnoseQuerySpec, VsanPerfDiagnosticException, VsanPerfDiagnosticResult,
    VsanPerfEntityMetricCsv, VsanPerfEntityType, VsanPerfGraph, VsanPerfMetricId,
    VsanPerfMetricSeriesCsv, VsanPerfNodeInformation, VsanPerfQuerySpec, VsanPerfThreshold,
    VsanPerfTimeRange, VsanPerfTimeRangeQuerySpec,
};
pub use property::{
    AboutInfo, DynamicProperty, MissingProperty, ObjectContent, ObjectSpec, PropertyFilterSpec,
    PropertySpec, RetrieveOptions, RetrieveResult, ServiceContent, WaitOptions,
};
pub use space::{VsanObjectSpaceSummary, VsanSpaceQuerySpec, VsanSpaceUsage};
pub use task::{PerfMetricId, PerfProviderSummary, PerfQuerySpec, TaskInfo};
