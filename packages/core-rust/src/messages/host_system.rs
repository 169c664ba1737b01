//! Operations of the vSphere `HostSystem`.

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, HostMaintenanceSpec};

crate::soap_messages! {
    /// `maintenance_spec` carries the vSAN decommission mode.
    EnterMaintenanceMode_Task => EnterMaintenanceMode_TaskResponse {
        timeout: i32,
        evacuate_powered_off_vms?: bool,
        maintenance_spec?: HostMaintenanceSpec,
    } -> ManagedObjectReference;

    ExitMaintenanceMode_Task => ExitMaintenanceMode_TaskResponse {
        timeout: i32,
    } -> ManagedObjectReference;

    RebootHost_Task => RebootHost_TaskResponse {
        force: bool,
    } -> ManagedObjectReference;

    ShutdownHost_Task => ShutdownHost_TaskResponse {
        force: bool,
    } -> ManagedObjectReference;

    DisconnectHost_Task => DisconnectHost_TaskResponse {} -> ManagedObjectReference;

    ReconnectHost_Task => ReconnectHost_TaskResponse {
        cnx_spec?: DynamicData,
        reconnect_spec?: DynamicData,
    } -> ManagedObjectReference;

    PowerDownHostToStandBy_Task => PowerDownHostToStandBy_TaskResponse {
        timeout_sec: i32,
        evacuate_powered_off_vms?: bool,
    } -> ManagedObjectReference;

    PowerUpHostFromStandBy_Task => PowerUpHostFromStandBy_TaskResponse {
        timeout_sec: i32,
    } -> ManagedObjectReference;

    QueryHostConnectionInfo => QueryHostConnectionInfoResponse {} -> DynamicData;

    /// Seconds since the host hardware last booted.
    RetrieveHardwareUptime => RetrieveHardwareUptimeResponse {} -> i64;

    QueryMemoryOverheadEx => QueryMemoryOverheadExResponse {
        vm_config_info: DynamicData,
    } -> i64;

    AcquireCimServicesTicket => AcquireCimServicesTicketResponse {} -> DynamicData;

    UpdateSystemResources => UpdateSystemResourcesResponse {
        resource_info: DynamicData,
    };

    QueryTpmAttestationReport => QueryTpmAttestationReportResponse {} -> Option<DynamicData>;

    UpdateFlags => UpdateFlagsResponse {
        flag_info: DynamicData,
    };

    UpdateIpmi => UpdateIpmiResponse {
        ipmi_info: DynamicData,
    };

    EnterLockdownMode => EnterLockdownModeResponse {};

    ExitLockdownMode => ExitLockdownModeResponse {};

    PrepareCrypto => PrepareCryptoResponse {};

    EnableCrypto => EnableCryptoResponse {
        key_plain: DynamicData,
    };

    ConfigureCryptoKey => ConfigureCryptoKeyResponse {
        key_id?: DynamicData,
    };
}
