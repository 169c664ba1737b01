//! Operations of distributed switches and their port groups.

use crate::mor::ManagedObjectReference;
use crate::types::DynamicData;

crate::soap_messages! {
    ReconfigureDvs_Task => ReconfigureDvs_TaskResponse {
        spec: DynamicData,
    } -> ManagedObjectReference;

    /// Adds port groups; the vSAN VMkernel adapters usually live on one.
    AddDVPortgroup_Task => AddDVPortgroup_TaskResponse {
        spec: Vec<DynamicData>,
    } -> ManagedObjectReference;

    FetchDVPorts => FetchDVPortsResponse {
        criteria?: DynamicData,
    } -> Vec<DynamicData>;

    FetchDVPortKeys => FetchDVPortKeysResponse {
        criteria?: DynamicData,
    } -> Vec<String>;

    RefreshDVPortState => RefreshDVPortStateResponse {
        port_keys?: Vec<String>,
    };

    RectifyDvsHost_Task => RectifyDvsHost_TaskResponse {
        hosts?: Vec<ManagedObjectReference>,
    } -> ManagedObjectReference;

    PerformDvsProductSpecOperation_Task => PerformDvsProductSpecOperation_TaskResponse {
        operation: String,
        product_spec?: DynamicData,
    } -> ManagedObjectReference;

    MergeDvs_Task => MergeDvs_TaskResponse {
        dvs: ManagedObjectReference,
    } -> ManagedObjectReference;

    MoveDVPort_Task => MoveDVPort_TaskResponse {
        port_key: Vec<String>,
        destination_portgroup_key?: String,
    } -> ManagedObjectReference;

    ReconfigureDVPort_Task => ReconfigureDVPort_TaskResponse {
        port: Vec<DynamicData>,
    } -> ManagedObjectReference;

    UpdateDvsCapability => UpdateDvsCapabilityResponse {
        capability: DynamicData,
    };

    EnableNetworkResourceManagement => EnableNetworkResourceManagementResponse {
        enable: bool,
    };

    QueryUsedVlanIdInDvs => QueryUsedVlanIdInDvsResponse {} -> Vec<i32>;

    LookupDvPortGroup => LookupDvPortGroupResponse {
        portgroup_key: String,
    } -> Option<ManagedObjectReference>;

    ReconfigureDVPortgroup_Task => ReconfigureDVPortgroup_TaskResponse {
        spec: DynamicData,
    } -> ManagedObjectReference;

    DVPortgroupRollback_Task => DVPortgroupRollback_TaskResponse {
        entity_backup?: DynamicData,
    } -> ManagedObjectReference;
}
