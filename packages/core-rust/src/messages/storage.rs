//! Virtual disk and first class disk (`VStorageObject`) operations.
//!
//! First class disks on a vSAN datastore are vSAN objects with their own
//! identity, independent of any VM.

use crate::mor::ManagedObjectReference;
use crate::types::DynamicData;

crate::soap_messages! {
    CreateVirtualDisk_Task => CreateVirtualDisk_TaskResponse {
        name: String,
        datacenter?: ManagedObjectReference,
        spec: DynamicData,
    } -> ManagedObjectReference;

    DeleteVirtualDisk_Task => DeleteVirtualDisk_TaskResponse {
        name: String,
        datacenter?: ManagedObjectReference,
    } -> ManagedObjectReference;

    MoveVirtualDisk_Task => MoveVirtualDisk_TaskResponse {
        source_name: String,
        source_datacenter?: ManagedObjectReference,
        dest_name: String,
        dest_datacenter?: ManagedObjectReference,
        force?: bool,
        profile?: Vec<DynamicData>,
    } -> ManagedObjectReference;

    CopyVirtualDisk_Task => CopyVirtualDisk_TaskResponse {
        source_name: String,
        source_datacenter?: ManagedObjectReference,
        dest_name: String,
        dest_datacenter?: ManagedObjectReference,
        dest_spec?: DynamicData,
        force?: bool,
    } -> ManagedObjectReference;

    ExtendVirtualDisk_Task => ExtendVirtualDisk_TaskResponse {
        name: String,
        datacenter?: ManagedObjectReference,
        new_capacity_kb: i64,
        eager_zero?: bool,
    } -> ManagedObjectReference;

    InflateVirtualDisk_Task => InflateVirtualDisk_TaskResponse {
        name: String,
        datacenter?: ManagedObjectReference,
    } -> ManagedObjectReference;

    EagerZeroVirtualDisk_Task => EagerZeroVirtualDisk_TaskResponse {
        name: String,
        datacenter?: ManagedObjectReference,
    } -> ManagedObjectReference;

    ZeroFillVirtualDisk_Task => ZeroFillVirtualDisk_TaskResponse {
        name: String,
        datacenter?: ManagedObjectReference,
    } -> ManagedObjectReference;

    ShrinkVirtualDisk_Task => ShrinkVirtualDisk_TaskResponse {
        name: String,
        datacenter?: ManagedObjectReference,
        copy?: bool,
    } -> ManagedObjectReference;

    DefragmentVirtualDisk_Task => DefragmentVirtualDisk_TaskResponse {
        name: String,
        datacenter?: ManagedObjectReference,
    } -> ManagedObjectReference;

    QueryVirtualDiskUuid => QueryVirtualDiskUuidResponse {
        name: String,
        datacenter?: ManagedObjectReference,
    } -> String;

    SetVirtualDiskUuid => SetVirtualDiskUuidResponse {
        name: String,
        datacenter?: ManagedObjectReference,
        uuid: String,
    };

    QueryVirtualDiskFragmentation => QueryVirtualDiskFragmentationResponse {
        name: String,
        datacenter?: ManagedObjectReference,
    } -> i32;

    QueryVirtualDiskGeometry => QueryVirtualDiskGeometryResponse {
        name: String,
        datacenter?: ManagedObjectReference,
    } -> DynamicData;

    CreateDisk_Task => CreateDisk_TaskResponse {
        spec: DynamicData,
    } -> ManagedObjectReference;

    RegisterDisk => RegisterDiskResponse {
        path: String,
        name?: String,
    } -> DynamicData;

    /// Every first class disk id on `datastore`.
    ListVStorageObject => ListVStorageObjectResponse {
        datastore: ManagedObjectReference,
    } -> Vec<DynamicData>;

    RetrieveVStorageObject => RetrieveVStorageObjectResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
    } -> DynamicData;

    RetrieveVStorageObjectState => RetrieveVStorageObjectStateResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
    } -> DynamicData;

    RetrieveVStorageObjectAssociations => RetrieveVStorageObjectAssociationsResponse {
        ids?: Vec<DynamicData>,
    } -> Vec<DynamicData>;

    DeleteVStorageObject_Task => DeleteVStorageObject_TaskResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
    } -> ManagedObjectReference;

    RenameVStorageObject => RenameVStorageObjectResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
        name: String,
    };

    ExtendDisk_Task => ExtendDisk_TaskResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
        new_capacity_in_mb: i64,
    } -> ManagedObjectReference;

    InflateDisk_Task => InflateDisk_TaskResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
    } -> ManagedObjectReference;

    CloneVStorageObject_Task => CloneVStorageObject_TaskResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
        spec: DynamicData,
    } -> ManagedObjectReference;

    RelocateVStorageObject_Task => RelocateVStorageObject_TaskResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
        spec: DynamicData,
    } -> ManagedObjectReference;

    UpdateVStorageObjectPolicy_Task => UpdateVStorageObjectPolicy_TaskResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
        profile?: Vec<DynamicData>,
    } -> ManagedObjectReference;

    VStorageObjectCreateSnapshot_Task => VStorageObjectCreateSnapshot_TaskResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
        description: String,
    } -> ManagedObjectReference;

    DeleteSnapshot_Task => DeleteSnapshot_TaskResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
        snapshot_id: DynamicData,
    } -> ManagedObjectReference;

    RetrieveSnapshotInfo => RetrieveSnapshotInfoResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
    } -> DynamicData;

    ReconcileDatastoreInventory_Task => ReconcileDatastoreInventory_TaskResponse {
        datastore: ManagedObjectReference,
    } -> ManagedObjectReference;

    ScheduleReconcileDatastoreInventory => ScheduleReconcileDatastoreInventoryResponse {
        datastore: ManagedObjectReference,
    };

    SetVStorageObjectControlFlags => SetVStorageObjectControlFlagsResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
        control_flags?: Vec<String>,
    };

    ClearVStorageObjectControlFlags => ClearVStorageObjectControlFlagsResponse {
        id: DynamicData,
        datastore: ManagedObjectReference,
        control_flags?: Vec<String>,
    };

    AttachTagToVStorageObject => AttachTagToVStorageObjectResponse {
        id: DynamicData,
        category: String,
        tag: String,
    };

    DetachTagFromVStorageObject => DetachTagFromVStorageObjectResponse {
        id: DynamicData,
        category: String,
        tag: String,
    };

    ListVStorageObjectsAttachedToTag => ListVStorageObjectsAttachedToTagResponse {
        category: String,
        tag: String,
    } -> Vec<DynamicData>;

    ListTagsAttachedToVStorageObject => ListTagsAttachedToVStorageObjectResponse {
        id: DynamicData,
    } -> Vec<DynamicData>;
}
