//! Inventory operations of the vSphere API: managed entities, folders,
//! datacenters, clusters and resource pools.

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, OptionValue};

crate::soap_messages! {
    Destroy_Task => Destroy_TaskResponse {} -> ManagedObjectReference;

    Rename_Task => Rename_TaskResponse {
        new_name: String,
    } -> ManagedObjectReference;

    Reload => ReloadResponse {};

    SetCustomValue => SetCustomValueResponse {
        key: String,
        value: String,
    };

    CreateFolder => CreateFolderResponse {
        name: String,
    } -> ManagedObjectReference;

    CreateClusterEx => CreateClusterExResponse {
        name: String,
        spec: DynamicData,
    } -> ManagedObjectReference;

    CreateDatacenter => CreateDatacenterResponse {
        name: String,
    } -> ManagedObjectReference;

    CreateStoragePod => CreateStoragePodResponse {
        name: String,
    } -> ManagedObjectReference;

    AddStandaloneHost_Task => AddStandaloneHost_TaskResponse {
        spec: DynamicData,
        comp_res_spec?: DynamicData,
        add_connected: bool,
        license?: String,
    } -> ManagedObjectReference;

    MoveIntoFolder_Task => MoveIntoFolder_TaskResponse {
        list: Vec<ManagedObjectReference>,
    } -> ManagedObjectReference;

    UnregisterAndDestroy_Task => UnregisterAndDestroy_TaskResponse {} -> ManagedObjectReference;

    CreateVM_Task => CreateVM_TaskResponse {
        config: DynamicData,
        pool: ManagedObjectReference,
        host?: ManagedObjectReference,
    } -> ManagedObjectReference;

    RegisterVM_Task => RegisterVM_TaskResponse {
        path: String,
        name?: String,
        as_template: bool,
        pool?: ManagedObjectReference,
        host?: ManagedObjectReference,
    } -> ManagedObjectReference;

    CreateDVS_Task => CreateDVS_TaskResponse {
        spec: DynamicData,
    } -> ManagedObjectReference;

    /// Connection details of a host not yet in the inventory.
    QueryConnectionInfo => QueryConnectionInfoResponse {
        hostname: String,
        port: i32,
        username: String,
        password: String,
        ssl_thumbprint?: String,
    } -> DynamicData;

    QueryConnectionInfoViaSpec => QueryConnectionInfoViaSpecResponse {
        spec: DynamicData,
    } -> DynamicData;

    PowerOnMultiVM_Task => PowerOnMultiVM_TaskResponse {
        vm: Vec<ManagedObjectReference>,
        option?: Vec<OptionValue>,
    } -> ManagedObjectReference;

    ReconfigureDatacenter_Task => ReconfigureDatacenter_TaskResponse {
        spec: DynamicData,
        modify: bool,
    } -> ManagedObjectReference;

    ReconfigureComputeResource_Task => ReconfigureComputeResource_TaskResponse {
        spec: DynamicData,
        modify: bool,
    } -> ManagedObjectReference;

    ReconfigureCluster_Task => ReconfigureCluster_TaskResponse {
        spec: DynamicData,
        modify: bool,
    } -> ManagedObjectReference;

    AddHost_Task => AddHost_TaskResponse {
        spec: DynamicData,
        as_connected: bool,
        resource_pool?: ManagedObjectReference,
        license?: String,
    } -> ManagedObjectReference;

    MoveInto_Task => MoveInto_TaskResponse {
        host: Vec<ManagedObjectReference>,
    } -> ManagedObjectReference;

    MoveHostInto_Task => MoveHostInto_TaskResponse {
        host: ManagedObjectReference,
        resource_pool?: ManagedObjectReference,
    } -> ManagedObjectReference;

    /// Checks which hosts can enter maintenance mode together.
    ClusterEnterMaintenanceMode => ClusterEnterMaintenanceModeResponse {
        host: Vec<ManagedObjectReference>,
        option?: Vec<OptionValue>,
    } -> DynamicData;

    RecommendHostsForVm => RecommendHostsForVmResponse {
        vm: ManagedObjectReference,
        pool?: ManagedObjectReference,
    } -> Vec<DynamicData>;

    RefreshRecommendation => RefreshRecommendationResponse {};

    ApplyRecommendation => ApplyRecommendationResponse {
        key: String,
    };

    CancelRecommendation => CancelRecommendationResponse {
        key: String,
    };

    RetrieveDasAdvancedRuntimeInfo => RetrieveDasAdvancedRuntimeInfoResponse {}
        -> Option<DynamicData>;

    PlaceVm => PlaceVmResponse {
        placement_spec: DynamicData,
    } -> DynamicData;

    FindRulesForVm => FindRulesForVmResponse {
        vm: ManagedObjectReference,
    } -> Vec<DynamicData>;

    ValidateHCIConfiguration => ValidateHCIConfigurationResponse {
        hci_config_spec?: DynamicData,
        hosts?: Vec<ManagedObjectReference>,
    } -> Vec<DynamicData>;

    /// Configures a new cluster for hyper-converged use, vSAN included.
    ConfigureHCI_Task => ConfigureHCI_TaskResponse {
        cluster_spec: DynamicData,
        host_inputs?: Vec<DynamicData>,
    } -> ManagedObjectReference;

    ExtendHCI_Task => ExtendHCI_TaskResponse {
        host_inputs?: Vec<DynamicData>,
        vsan_config_spec?: DynamicData,
    } -> ManagedObjectReference;

    AbandonHciWorkflow => AbandonHciWorkflowResponse {};

    CreateResourcePool => CreateResourcePoolResponse {
        name: String,
        spec: DynamicData,
    } -> ManagedObjectReference;

    UpdateConfig => UpdateConfigResponse {
        name?: String,
        config?: DynamicData,
    };

    MoveIntoResourcePool => MoveIntoResourcePoolResponse {
        list: Vec<ManagedObjectReference>,
    };

    DestroyChildren => DestroyChildrenResponse {};

    CreateVApp => CreateVAppResponse {
        name: String,
        res_spec: DynamicData,
        config_spec: DynamicData,
        vm_folder?: ManagedObjectReference,
    } -> ManagedObjectReference;

    /// Starts an import; returns the `HttpNfcLease` that receives the disks.
    ImportVApp => ImportVAppResponse {
        spec: DynamicData,
        folder?: ManagedObjectReference,
        host?: ManagedObjectReference,
    } -> ManagedObjectReference;

    RegisterChildVM_Task => RegisterChildVM_TaskResponse {
        path: String,
        name?: String,
        host?: ManagedObjectReference,
    } -> ManagedObjectReference;

    UpdateChildResourceConfiguration => UpdateChildResourceConfigurationResponse {
        spec: Vec<DynamicData>,
    };

    QueryResourceConfigOption => QueryResourceConfigOptionResponse {} -> DynamicData;

    RefreshRuntime => RefreshRuntimeResponse {};
}
