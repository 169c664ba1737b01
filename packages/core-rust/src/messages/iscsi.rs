//! Operations of `VsanIscsiTargetSystem`.

use crate::mor::ManagedObjectReference;
use crate::types::{
    DynamicData, VsanIscsiInitiatorGroup, VsanIscsiLun, VsanIscsiLunSpec, VsanIscsiTarget,
    VsanIscsiTargetSpec,
};

crate::soap_messages! {
    // ----- Targets -----

    AddIscsiTarget => AddIscsiTargetResponse {
        cluster: ManagedObjectReference,
        target_spec: VsanIscsiTargetSpec,
    } -> ManagedObjectReference;

    EditIscsiTarget => EditIscsiTargetResponse {
        cluster: ManagedObjectReference,
        target_spec: VsanIscsiTargetSpec,
    } -> ManagedObjectReference;

    RemoveIscsiTarget => RemoveIscsiTargetResponse {
        cluster: ManagedObjectReference,
        alias: String,
    } -> ManagedObjectReference;

    GetIscsiTarget => GetIscsiTargetResponse {
        cluster: ManagedObjectReference,
        alias: String,
    } -> VsanIscsiTarget;

    GetIscsiTargets => GetIscsiTargetsResponse {
        cluster: ManagedObjectReference,
    } -> Vec<VsanIscsiTarget>;

    // ----- LUNs -----

    AddIscsiLUN => AddIscsiLUNResponse {
        cluster: ManagedObjectReference,
        target_alias: String,
        lun_spec: VsanIscsiLunSpec,
    } -> ManagedObjectReference;

    EditIscsiLUN => EditIscsiLUNResponse {
        cluster: ManagedObjectReference,
        target_alias: String,
        lun_spec: VsanIscsiLunSpec,
    } -> ManagedObjectReference;

    RemoveIscsiLUN => RemoveIscsiLUNResponse {
        cluster: ManagedObjectReference,
        target_alias: String,
        lun_id: i32,
    } -> ManagedObjectReference;

    GetIscsiLUN => GetIscsiLUNResponse {
        cluster: ManagedObjectReference,
        target_alias: String,
        lun_id: i32,
    } -> VsanIscsiLun;

    /// LUNs of the given targets, or of every target when none is named.
    GetIscsiLUNs => GetIscsiLUNsResponse {
        cluster: ManagedObjectReference,
        target_aliases?: Vec<String>,
    } -> Vec<VsanIscsiLun>;

    // ----- Initiator groups -----

    AddIscsiInitiatorGroup => AddIscsiInitiatorGroupResponse {
        cluster: ManagedObjectReference,
        initiator_group_name: String,
    };

    RemoveIscsiInitiatorGroup => RemoveIscsiInitiatorGroupResponse {
        cluster: ManagedObjectReference,
        initiator_group_name: String,
    };

    GetIscsiInitiatorGroup => GetIscsiInitiatorGroupResponse {
        cluster: ManagedObjectReference,
        initiator_group_name: String,
    } -> VsanIscsiInitiatorGroup;

    GetIscsiInitiatorGroups => GetIscsiInitiatorGroupsResponse {
        cluster: ManagedObjectReference,
    } -> Vec<VsanIscsiInitiatorGroup>;

    AddIscsiInitiatorsToGroup => AddIscsiInitiatorsToGroupResponse {
        cluster: ManagedObjectReference,
        initiator_group_name: String,
        initiator_names: Vec<String>,
    };

    RemoveIscsiInitiatorsFromGroup => RemoveIscsiInitiatorsFromGroupResponse {
        cluster: ManagedObjectReference,
        initiator_group_name: String,
        initiator_names: Vec<String>,
    };

    AddIscsiTargetToGroup => AddIscsiTargetToGroupResponse {
        cluster: ManagedObjectReference,
        initiator_group_name: String,
        target_alias: String,
    };

    RemoveIscsiTargetFromGroup => RemoveIscsiTargetFromGroupResponse {
        cluster: ManagedObjectReference,
        initiator_group_name: String,
        target_alias: String,
    };

    AddIscsiInitiatorsToTarget => AddIscsiInitiatorsToTargetResponse {
        cluster: ManagedObjectReference,
        target_alias: String,
        initiator_names: Vec<String>,
    };

    RemoveIscsiInitiatorsFromTarget => RemoveIscsiInitiatorsFromTargetResponse {
        cluster: ManagedObjectReference,
        target_alias: String,
        initiator_names: Vec<String>,
    };

    // ----- Service -----

    GetIscsiTargetsInGroup => GetIscsiTargetsInGroupResponse {
        cluster: ManagedObjectReference,
        initiator_group_name: String,
    } -> Vec<VsanIscsiTarget>;

    /// Home object of the iSCSI target service.
    GetIscsiHomeObject => GetIscsiHomeObjectResponse {
        cluster: ManagedObjectReference,
    } -> DynamicData;

    QueryIscsiTargetServiceVersion => QueryIscsiTargetServiceVersionResponse {} -> String;

    VsanVitQueryTargetSpaceUsage => VsanVitQueryTargetSpaceUsageResponse {
        cluster: ManagedObjectReference,
        target_aliases?: Vec<String>,
    } -> Vec<DynamicData>;
}
