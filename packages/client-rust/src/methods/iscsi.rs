//! Stubs of the iSCSI target system.

soap_methods! {
    managed_object: "VsanIscsiTargetSystem";
    messages: iscsi;

    add_iscsi_target => AddIscsiTarget;
    edit_iscsi_target => EditIscsiTarget;
    remove_iscsi_target => RemoveIscsiTarget;
    get_iscsi_target => GetIscsiTarget;
    get_iscsi_targets => GetIscsiTargets;
    add_iscsi_lun => AddIscsiLUN;
    edit_iscsi_lun => EditIscsiLUN;
    remove_iscsi_lun => RemoveIscsiLUN;
    get_iscsi_lun => GetIscsiLUN;
    get_iscsi_luns => GetIscsiLUNs;
    add_iscsi_initiator_group => AddIscsiInitiatorGroup;
    remove_iscsi_initiator_group => RemoveIscsiInitiatorGroup;
    get_iscsi_initiator_group => GetIscsiInitiatorGroup;
    get_iscsi_initiator_groups => GetIscsiInitiatorGroups;
    add_iscsi_initiators_to_group => AddIscsiInitiatorsToGroup;
    remove_iscsi_initiators_from_group => RemoveIscsiInitiatorsFromGroup;
    add_iscsi_target_to_group => AddIscsiTargetToGroup;
    remove_iscsi_target_from_group => RemoveIscsiTargetFromGroup;
    add_iscsi_initiators_to_target => AddIscsiInitiatorsToTarget;
    remove_iscsi_initiators_from_target => RemoveIscsiInitiatorsFromTarget;
    get_iscsi_targets_in_group => GetIscsiTargetsInGroup;
    get_iscsi_home_object => GetIscsiHomeObject;
    query_iscsi_target_service_version => QueryIscsiTargetServiceVersion;
    vsan_vit_query_target_space_usage => VsanVitQueryTargetSpaceUsage;
}
