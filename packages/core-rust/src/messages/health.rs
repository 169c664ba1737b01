//! Operations of `VsanVcClusterHealthSystem`.

use crate::mor::ManagedObjectReference;
use crate::time::DateTime;
use crate::types::{
    DynamicData, VsanAttachToSrOperation, VsanClusterCreateVmHealthTestResult,
    VsanClusterHealthConfigs, VsanClusterHealthSummary, VsanClusterHealthSystemVersionResult,
    VsanClusterHclInfo, VsanClusterNetworkLoadTestResult, VsanClusterTelemetryProxyConfig,
};

crate::soap_messages! {
    /// Returns the health summary of a cluster.
    ///
    /// `fields` restricts the summary to the named properties; with
    /// `fetch_from_cache` the service answers from its last periodic run
    /// instead of testing the cluster again.
    VsanQueryVcClusterHealthSummary => VsanQueryVcClusterHealthSummaryResponse {
        cluster?: ManagedObjectReference,
        vm_create_timeout?: i32,
        obj_uuids?: Vec<String>,
        include_obj_uuids?: bool,
        fields?: Vec<String>,
        fetch_from_cache?: bool,
        perspective?: String,
        hosts?: Vec<ManagedObjectReference>,
        include_data_protection_health?: bool,
    } -> VsanClusterHealthSummary;

    /// Task variant of [`VsanQueryVcClusterHealthSummary`].
    VsanQueryVcClusterHealthSummaryTask => VsanQueryVcClusterHealthSummaryTaskResponse {
        cluster: ManagedObjectReference,
        hosts?: Vec<ManagedObjectReference>,
        include_obj_uuids?: bool,
        fields?: Vec<String>,
        fetch_from_cache?: bool,
        perspective?: String,
    } -> ManagedObjectReference;

    VsanHealthGetPreflightCheckResult => VsanHealthGetPreflightCheckResultResponse {
        cluster: ManagedObjectReference,
    } -> DynamicData;

    /// Creates and deletes a test VM on every host.
    VsanQueryVcClusterCreateVmHealthTest => VsanQueryVcClusterCreateVmHealthTestResponse {
        cluster: ManagedObjectReference,
        timeout: i32,
    } -> VsanClusterCreateVmHealthTestResult;

    VsanQueryVcClusterCreateVmHealthHistoryTest => VsanQueryVcClusterCreateVmHealthHistoryTestResponse {
        cluster: ManagedObjectReference,
        count?: i32,
    } -> Vec<VsanClusterCreateVmHealthTestResult>;

    /// Runs a network load test between the hosts of a cluster.
    VsanQueryVcClusterNetworkPerfTest => VsanQueryVcClusterNetworkPerfTestResponse {
        cluster: ManagedObjectReference,
        multicast: bool,
        duration_sec?: i32,
    } -> VsanClusterNetworkLoadTestResult;

    VsanQueryVcClusterNetworkPerfHistoryTest => VsanQueryVcClusterNetworkPerfHistoryTestResponse {
        cluster: ManagedObjectReference,
        count?: i32,
    } -> Vec<VsanClusterNetworkLoadTestResult>;

    /// SMART counters of every disk in the cluster.
    VsanQueryVcClusterSmartStatsSummary => VsanQueryVcClusterSmartStatsSummaryResponse {
        cluster: ManagedObjectReference,
    } -> Vec<DynamicData>;

    VsanQueryVcClusterObjExtAttrs => VsanQueryVcClusterObjExtAttrsResponse {
        cluster: ManagedObjectReference,
        uuids?: Vec<String>,
    } -> Vec<DynamicData>;

    VsanHealthQueryVsanClusterHealthCheckInterval => VsanHealthQueryVsanClusterHealthCheckIntervalResponse {
        cluster: ManagedObjectReference,
    } -> i32;

    VsanHealthSetVsanClusterHealthCheckInterval => VsanHealthSetVsanClusterHealthCheckIntervalResponse {
        cluster: ManagedObjectReference,
        vsan_cluster_health_check_interval: i32,
    };

    VsanHealthGetVsanClusterSilentChecks => VsanHealthGetVsanClusterSilentChecksResponse {
        cluster: ManagedObjectReference,
    } -> Vec<String>;

    /// Adds and removes health checks from the silenced list.
    VsanHealthSetVsanClusterSilentChecks => VsanHealthSetVsanClusterSilentChecksResponse {
        cluster: ManagedObjectReference,
        add_silent_checks?: Vec<String>,
        remove_silent_checks?: Vec<String>,
    } -> bool;

    VsanHealthQueryVsanClusterHealthConfig => VsanHealthQueryVsanClusterHealthConfigResponse {
        cluster: ManagedObjectReference,
    } -> VsanClusterHealthConfigs;

    VsanHealthSetVsanClusterTelemetryConfig => VsanHealthSetVsanClusterTelemetryConfigResponse {
        cluster: ManagedObjectReference,
        vsan_cluster_health_config: VsanClusterHealthConfigs,
    };

    VsanHealthTestVsanClusterTelemetryProxy => VsanHealthTestVsanClusterTelemetryProxyResponse {
        proxy_config: VsanClusterTelemetryProxyConfig,
    } -> bool;

    VsanHealthSendVsanTelemetry => VsanHealthSendVsanTelemetryResponse {
        cluster: ManagedObjectReference,
    };

    /// Repairs the given objects, or every object needing repair.
    VsanHealthRepairClusterObjectsImmediate => VsanHealthRepairClusterObjectsImmediateResponse {
        cluster: ManagedObjectReference,
        uuids?: Vec<String>,
    } -> ManagedObjectReference;

    VsanHealthIsRebalanceRunning => VsanHealthIsRebalanceRunningResponse {
        cluster: ManagedObjectReference,
        target_hosts?: Vec<ManagedObjectReference>,
    } -> bool;

    VsanRebalanceCluster => VsanRebalanceClusterResponse {
        cluster: ManagedObjectReference,
        target_hosts?: Vec<ManagedObjectReference>,
    } -> ManagedObjectReference;

    VsanStopRebalanceCluster => VsanStopRebalanceClusterResponse {
        cluster: ManagedObjectReference,
        target_hosts?: Vec<ManagedObjectReference>,
    } -> ManagedObjectReference;

    /// Uploads a hardware compatibility database (JSON text).
    VsanVcUploadHclDb => VsanVcUploadHclDbResponse {
        db: String,
    } -> bool;

    VsanVcUpdateHclDbFromWeb => VsanVcUpdateHclDbFromWebResponse {
        url?: String,
    } -> bool;

    VsanVcUploadReleaseDb => VsanVcUploadReleaseDbResponse {
        db: String,
    } -> bool;

    VsanVcClusterGetHclInfo => VsanVcClusterGetHclInfoResponse {
        cluster?: ManagedObjectReference,
        include_hosts_result?: bool,
        include_vendor_info?: bool,
        esx_release?: String,
    } -> VsanClusterHclInfo;

    VsanVcClusterQueryVerifyHealthSystemVersions => VsanVcClusterQueryVerifyHealthSystemVersionsResponse {
        cluster: ManagedObjectReference,
    } -> VsanClusterHealthSystemVersionResult;

    /// Starts a VMDK load test across the cluster.
    VsanVcClusterRunVmdkLoadTest => VsanVcClusterRunVmdkLoadTestResponse {
        cluster: ManagedObjectReference,
        runname: String,
        duration_sec?: i32,
        specs?: Vec<DynamicData>,
        action?: String,
    } -> ManagedObjectReference;

    VsanQueryAttachToSrHistory => VsanQueryAttachToSrHistoryResponse {
        cluster: ManagedObjectReference,
        count?: i32,
        task_id?: String,
    } -> Vec<VsanAttachToSrOperation>;

    VsanAttachVsanSupportBundleToSr => VsanAttachVsanSupportBundleToSrResponse {
        cluster: ManagedObjectReference,
        sr_number: String,
    } -> ManagedObjectReference;

    VsanDownloadHclFile_Task => VsanDownloadHclFile_TaskResponse {
        sha1sums: Vec<String>,
    } -> ManagedObjectReference;

    VsanGetHclConstraints => VsanGetHclConstraintsResponse {
        release: String,
    } -> DynamicData;

    /// Time of the newest health result held in the cache.
    VsanHealthGetLastCheckTime => VsanHealthGetLastCheckTimeResponse {
        cluster: ManagedObjectReference,
    } -> Option<DateTime>;

    /// Results of earlier VMDK load test runs on a cluster.
    VsanQueryVcClusterVmdkLoadHistoryTest => VsanQueryVcClusterVmdkLoadHistoryTestResponse {
        cluster: ManagedObjectReference,
        count?: i32,
        task_id?: String,
    } -> Vec<DynamicData>;

    VsanQueryVcClusterVmdkWorkloadTypes => VsanQueryVcClusterVmdkWorkloadTypesResponse {}
        -> Vec<DynamicData>;

    VsanHealthSetLogLevel => VsanHealthSetLogLevelResponse {
        level?: String,
    };

    VsanHealthQueryVsanProxyConfig => VsanHealthQueryVsanProxyConfigResponse {
        cluster: ManagedObjectReference,
    } -> VsanClusterTelemetryProxyConfig;

    /// Every health check the service knows, with its group and description.
    VsanQueryAllSupportedHealthChecks => VsanQueryAllSupportedHealthChecksResponse {}
        -> Vec<DynamicData>;
}
