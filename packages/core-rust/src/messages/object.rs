//! Operations of `VsanObjectSystem`.

use crate::mor::ManagedObjectReference;
use crate::types::{
    DynamicData, VsanHostVsanObjectSyncQueryResult, VsanNewPolicyBatch, VsanObjectIdentityAndHealth, VsanObjectInformation,
    VsanObjectQuerySpec, VsanPolicyChangeBatch, VsanPolicySatisfiability,
};

crate::soap_messages! {
    /// Identities, health and space of the objects in a cluster.
    VsanQueryObjectIdentities => VsanQueryObjectIdentitiesResponse {
        cluster?: ManagedObjectReference,
        obj_uuids?: Vec<String>,
        obj_types?: Vec<String>,
        include_health?: bool,
        include_obj_identity?: bool,
        include_space_summary?: bool,
    } -> VsanObjectIdentityAndHealth;

    VosQueryVsanObjectInformation => VosQueryVsanObjectInformationResponse {
        cluster?: ManagedObjectReference,
        vsan_object_query_specs: Vec<VsanObjectQuerySpec>,
    } -> Vec<VsanObjectInformation>;

    /// Changes the storage policy of existing objects.
    VosSetVsanObjectPolicy => VosSetVsanObjectPolicyResponse {
        cluster?: ManagedObjectReference,
        vsan_object_uuid: String,
        profile?: Vec<DynamicData>,
    } -> bool;

    VsanQueryObjectPolicySatisfiability => VsanQueryObjectPolicySatisfiabilityResponse {
        cluster?: ManagedObjectReference,
        pcbatch: Vec<VsanPolicyChangeBatch>,
    } -> Vec<VsanPolicySatisfiability>;

    /// Whether newly created objects of the given sizes would fit.
    VsanQueryNewPolicySatisfiability => VsanQueryNewPolicySatisfiabilityResponse {
        cluster?: ManagedObjectReference,
        npbatch: Vec<VsanNewPolicyBatch>,
    } -> Vec<VsanPolicySatisfiability>;

    VsanQueryInaccessibleVmSwapObjects => VsanQueryInaccessibleVmSwapObjectsResponse {
        cluster?: ManagedObjectReference,
    } -> Vec<String>;

    VsanDeleteObjects_Task => VsanDeleteObjects_TaskResponse {
        cluster: ManagedObjectReference,
        obj_uuids: Vec<String>,
        force?: bool,
    } -> ManagedObjectReference;

    VsanQuerySyncingVsanObjectsSummary => VsanQuerySyncingVsanObjectsSummaryResponse {
        cluster: ManagedObjectReference,
        sync_obj_query_spec: DynamicData,
    } -> DynamicData;

    /// Objects currently resyncing, optionally narrowed to `uuids`.
    VsanQuerySyncingVsanObjects => VsanQuerySyncingVsanObjectsResponse {
        cluster?: ManagedObjectReference,
        uuids?: Vec<String>,
        start?: i32,
        limit?: i32,
        include_summary?: bool,
    } -> VsanHostVsanObjectSyncQueryResult;

    RelayoutObjects => RelayoutObjectsResponse {
        cluster: ManagedObjectReference,
    } -> ManagedObjectReference;

    VsanPurgeInaccessibleVmSwapObjects => VsanPurgeInaccessibleVmSwapObjectsResponse {
        cluster: ManagedObjectReference,
        obj_uuids?: Vec<String>,
    } -> ManagedObjectReference;
}
