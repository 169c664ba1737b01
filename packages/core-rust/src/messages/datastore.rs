//! Datastore operations of the vSphere API, including the file and
//! namespace managers used to lay out directories on vSAN datastores.

use crate::mor::ManagedObjectReference;
use crate::types::DynamicData;

crate::soap_messages! {
    RefreshDatastore => RefreshDatastoreResponse {};

    RefreshDatastoreStorageInfo => RefreshDatastoreStorageInfoResponse {};

    DestroyDatastore => DestroyDatastoreResponse {};

    RenameDatastore => RenameDatastoreResponse {
        new_name: String,
    };

    DatastoreEnterMaintenanceMode => DatastoreEnterMaintenanceModeResponse {} -> DynamicData;

    DatastoreExitMaintenanceMode_Task => DatastoreExitMaintenanceMode_TaskResponse {}
        -> ManagedObjectReference;

    UpdateVirtualMachineFiles_Task => UpdateVirtualMachineFiles_TaskResponse {
        mount_path_datastore_mapping: Vec<DynamicData>,
    } -> ManagedObjectReference;

    UpdateVVolVirtualMachineFiles_Task => UpdateVVolVirtualMachineFiles_TaskResponse {
        failover_pair?: Vec<DynamicData>,
    } -> ManagedObjectReference;

    SearchDatastore_Task => SearchDatastore_TaskResponse {
        datastore_path: String,
        search_spec?: DynamicData,
    } -> ManagedObjectReference;

    SearchDatastoreSubFolders_Task => SearchDatastoreSubFolders_TaskResponse {
        datastore_path: String,
        search_spec?: DynamicData,
    } -> ManagedObjectReference;

    DeleteFile => DeleteFileResponse {
        datastore_path: String,
    };

    MakeDirectory => MakeDirectoryResponse {
        name: String,
        datacenter?: ManagedObjectReference,
        create_parent_directories?: bool,
    };

    DeleteDatastoreFile_Task => DeleteDatastoreFile_TaskResponse {
        name: String,
        datacenter?: ManagedObjectReference,
    } -> ManagedObjectReference;

    MoveDatastoreFile_Task => MoveDatastoreFile_TaskResponse {
        source_name: String,
        source_datacenter?: ManagedObjectReference,
        destination_name: String,
        destination_datacenter?: ManagedObjectReference,
        force?: bool,
    } -> ManagedObjectReference;

    CopyDatastoreFile_Task => CopyDatastoreFile_TaskResponse {
        source_name: String,
        source_datacenter?: ManagedObjectReference,
        destination_name: String,
        destination_datacenter?: ManagedObjectReference,
        force?: bool,
    } -> ManagedObjectReference;

    /// Creates a top-level directory (a namespace object on vSAN) and
    /// returns its stable UUID path.
    CreateDirectory => CreateDirectoryResponse {
        datastore: ManagedObjectReference,
        display_name?: String,
        policy?: String,
        size?: i64,
    } -> String;

    DeleteDirectory => DeleteDirectoryResponse {
        datacenter?: ManagedObjectReference,
        datastore_path: String,
    };

    ConvertNamespacePathToUuidPath => ConvertNamespacePathToUuidPathResponse {
        datacenter?: ManagedObjectReference,
        namespace_url: String,
    } -> String;
}
