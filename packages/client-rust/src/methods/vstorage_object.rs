//! Stubs of first class disk management.

soap_methods! {
    managed_object: "VcenterVStorageObjectManager";
    messages: storage;

    create_disk_task => CreateDisk_Task;
    register_disk => RegisterDisk;
    list_vstorage_object => ListVStorageObject;
    retrieve_vstorage_object => RetrieveVStorageObject;
    retrieve_vstorage_object_state => RetrieveVStorageObjectState;
    retrieve_vstorage_object_associations => RetrieveVStorageObjectAssociations;
    delete_vstorage_object_task => DeleteVStorageObject_Task;
    rename_vstorage_object => RenameVStorageObject;
    extend_disk_task => ExtendDisk_Task;
    inflate_disk_task => InflateDisk_Task;
    clone_vstorage_object_task => CloneVStorageObject_Task;
    relocate_vstorage_object_task => RelocateVStorageObject_Task;
    update_vstorage_object_policy_task => UpdateVStorageObjectPolicy_Task;
    vstorage_object_create_snapshot_task => VStorageObjectCreateSnapshot_Task;
    delete_snapshot_task => DeleteSnapshot_Task;
    retrieve_snapshot_info => RetrieveSnapshotInfo;
    reconcile_datastore_inventory_task => ReconcileDatastoreInventory_Task;
    schedule_reconcile_datastore_inventory => ScheduleReconcileDatastoreInventory;
    set_vstorage_object_control_flags => SetVStorageObjectControlFlags;
    clear_vstorage_object_control_flags => ClearVStorageObjectControlFlags;
    attach_tag_to_vstorage_object => AttachTagToVStorageObject;
    detach_tag_from_vstorage_object => DetachTagFromVStorageObject;
    list_vstorage_objects_attached_to_tag => ListVStorageObjectsAttachedToTag;
    list_tags_attached_to_vstorage_object => ListTagsAttachedToVStorageObject;
}
