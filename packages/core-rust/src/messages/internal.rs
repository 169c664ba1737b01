//! Operations of the host-side `HostVsanInternalSystem`.

use crate::types::{
    DynamicData, HostVsanInternalSystemCmmdsQuery, HostVsanInternalSystemVsanObjectOperationResult,
    VsanNewPolicyBatch, VsanPolicySatisfiability,
};

crate::soap_messages! {
    /// Dumps CMMDS entries matching the queries as a JSON document
    /// (`{"result": [{"uuid", "owner", "type", "content"}, ...]}`).
    QueryCmmds => QueryCmmdsResponse {
        queries: Vec<HostVsanInternalSystemCmmdsQuery>,
    } -> String;

    QueryPhysicalVsanDisks => QueryPhysicalVsanDisksResponse {
        props?: Vec<String>,
    } -> String;

    QueryVsanObjects => QueryVsanObjectsResponse {
        uuids?: Vec<String>,
    } -> String;

    QueryObjectsOnPhysicalVsanDisk => QueryObjectsOnPhysicalVsanDiskResponse {
        disks: Vec<String>,
    } -> String;

    QueryVsanStatistics => QueryVsanStatisticsResponse {
        labels: Vec<String>,
    } -> String;

    /// Whether the given objects could be reconfigured to new policies.
    ReconfigurationSatisfiable => ReconfigurationSatisfiableResponse {
        pcbatch: Vec<crate::types::VsanPolicyChangeBatch>,
        ignore_satisfiability?: bool,
    } -> Vec<crate::types::VsanPolicySatisfiability>;

    ReconfigureDomObject => ReconfigureDomObjectResponse {
        uuid: String,
        policy: String,
    };

    DeleteVsanObjects => DeleteVsanObjectsResponse {
        uuids: Vec<String>,
        force?: bool,
    } -> Vec<HostVsanInternalSystemVsanObjectOperationResult>;

    UpgradeVsanObjects => UpgradeVsanObjectsResponse {
        uuids: Vec<String>,
        new_version: i32,
    } -> Vec<HostVsanInternalSystemVsanObjectOperationResult>;

    AbdicateDomOwnership => AbdicateDomOwnershipResponse {
        uuids: Vec<String>,
    } -> Vec<String>;

    QuerySyncingVsanObjects => QuerySyncingVsanObjectsResponse {
        uuids?: Vec<String>,
    } -> String;

    RunVsanPhysicalDiskDiagnostics => RunVsanPhysicalDiskDiagnosticsResponse {
        disks?: Vec<String>,
    } -> Vec<DynamicData>;

    /// Whether objects with the given sizes and policies fit on this host's cluster.
    CanProvisionObjects => CanProvisionObjectsResponse {
        npbatch: Vec<VsanNewPolicyBatch>,
        ignore_satisfiability?: bool,
    } -> Vec<VsanPolicySatisfiability>;

    GetVsanObjExtAttrs => GetVsanObjExtAttrsResponse {
        uuids: Vec<String>,
    } -> String;

    QueryVsanObjectUuidsByFilter => QueryVsanObjectUuidsByFilterResponse {
        uuids?: Vec<String>,
        limit?: i32,
        version?: i32,
    } -> Vec<String>;
}
