//! Operations of the host-side `HostVsanHealthSystem`.

use crate::types::{
    DynamicData, OptionValue, VsanHostCreateVmHealthTestResult, VsanProactiveRebalanceInfoEx,
    VsanQueryResultHostInfo, VsanRepairObjectsResult,
};

crate::soap_messages! {
    VsanHostQueryHostInfoByUuids => VsanHostQueryHostInfoByUuidsResponse {
        uuids: Vec<String>,
    } -> Vec<VsanQueryResultHostInfo>;

    /// Creates and removes a test VM on this host.
    VsanHostCreateVmHealthTest => VsanHostCreateVmHealthTestResponse {
        timeout: i32,
    } -> VsanHostCreateVmHealthTestResult;

    VsanHostQuerySmartStats => VsanHostQuerySmartStatsResponse {
        disks?: Vec<String>,
        include_all_disks?: bool,
    } -> DynamicData;

    VsanHostQueryPhysicalDiskHealthSummary => VsanHostQueryPhysicalDiskHealthSummaryResponse {}
        -> DynamicData;

    VsanHostQueryObjectHealthSummary => VsanHostQueryObjectHealthSummaryResponse {
        obj_uuids?: Vec<String>,
        include_obj_uuids?: bool,
        local_host_only?: bool,
    } -> DynamicData;

    VsanHostQueryEncryptionHealthSummary => VsanHostQueryEncryptionHealthSummaryResponse {}
        -> DynamicData;

    VsanHostQueryHealthSystemVersion => VsanHostQueryHealthSystemVersionResponse {
        display_version?: bool,
    } -> String;

    VsanHostQueryCheckLimits => VsanHostQueryCheckLimitsResponse {} -> DynamicData;

    VsanHostQueryFileScanSummary => VsanHostQueryFileScanSummaryResponse {} -> DynamicData;

    VsanHostQueryAdvCfg => VsanHostQueryAdvCfgResponse {
        options: Vec<String>,
        include_all_advanced_options?: bool,
        non_default_only?: bool,
    } -> Vec<OptionValue>;

    VsanHostQueryVerifyNetworkSettings => VsanHostQueryVerifyNetworkSettingsResponse {
        peers?: Vec<String>,
        rounds?: i32,
        timeout?: i32,
    } -> DynamicData;

    /// Runs an iperf client against `server_ip`; the peer must run the server.
    VsanHostQueryRunIperfClient => VsanHostQueryRunIperfClientResponse {
        multicast: bool,
        server_ip: String,
    } -> DynamicData;

    VsanHostQueryRunIperfServer => VsanHostQueryRunIperfServerResponse {
        multicast: bool,
        server_ip?: String,
    } -> DynamicData;

    VsanHostRepairImmediateObjects => VsanHostRepairImmediateObjectsResponse {
        uuids?: Vec<String>,
        repair_type?: String,
    } -> VsanRepairObjectsResult;

    VsanHostClomdLiveness => VsanHostClomdLivenessResponse {} -> bool;

    /// Blocks until the health generation id changes or `timeout` seconds pass.
    VsanWaitForVsanHealthGenerationIdChange => VsanWaitForVsanHealthGenerationIdChangeResponse {
        timeout: i32,
    } -> bool;

    VsanGetHclInfo => VsanGetHclInfoResponse {} -> DynamicData;

    VsanStartProactiveRebalance => VsanStartProactiveRebalanceResponse {
        time_span?: i32,
        variance_threshold?: f32,
        time_threshold?: i32,
        rate_threshold?: i32,
    } -> bool;

    VsanStopProactiveRebalance => VsanStopProactiveRebalanceResponse {} -> bool;

    VsanHostGetProactiveRebalanceInfo => VsanHostGetProactiveRebalanceInfoResponse {}
        -> VsanProactiveRebalanceInfoEx;

    /// Creates the test disks of a VMDK load test without starting it.
    VsanHostPrepareVmdkLoadTest => VsanHostPrepareVmdkLoadTestResponse {
        run_name: String,
        specs: Vec<DynamicData>,
    } -> String;

    VsanHostRunVmdkLoadTest => VsanHostRunVmdkLoadTestResponse {
        run_name: String,
        duration_sec: i32,
        specs: Vec<DynamicData>,
    } -> Vec<DynamicData>;

    VsanHostCleanupVmdkLoadTest => VsanHostCleanupVmdkLoadTestResponse {
        run_name: String,
        specs?: Vec<DynamicData>,
    } -> String;
}
