//! Operations of the vSphere `VirtualMachine` and its snapshots.

use crate::mor::ManagedObjectReference;
use crate::types::DynamicData;

crate::soap_messages! {
    PowerOnVM_Task => PowerOnVM_TaskResponse {
        host?: ManagedObjectReference,
    } -> ManagedObjectReference;

    PowerOffVM_Task => PowerOffVM_TaskResponse {} -> ManagedObjectReference;

    ResetVM_Task => ResetVM_TaskResponse {} -> ManagedObjectReference;

    SuspendVM_Task => SuspendVM_TaskResponse {} -> ManagedObjectReference;

    /// Asks the guest tools to shut down; returns before the guest stops.
    ShutdownGuest => ShutdownGuestResponse {};

    RebootGuest => RebootGuestResponse {};

    StandbyGuest => StandbyGuestResponse {};

    ReconfigVM_Task => ReconfigVM_TaskResponse {
        spec: DynamicData,
    } -> ManagedObjectReference;

    CloneVM_Task => CloneVM_TaskResponse {
        folder: ManagedObjectReference,
        name: String,
        spec: DynamicData,
    } -> ManagedObjectReference;

    RelocateVM_Task => RelocateVM_TaskResponse {
        spec: DynamicData,
        priority?: String,
    } -> ManagedObjectReference;

    MigrateVM_Task => MigrateVM_TaskResponse {
        pool?: ManagedObjectReference,
        host?: ManagedObjectReference,
        priority: String,
        state?: String,
    } -> ManagedObjectReference;

    CustomizeVM_Task => CustomizeVM_TaskResponse {
        spec: DynamicData,
    } -> ManagedObjectReference;

    CreateSnapshot_Task => CreateSnapshot_TaskResponse {
        name: String,
        description?: String,
        memory: bool,
        quiesce: bool,
    } -> ManagedObjectReference;

    RevertToCurrentSnapshot_Task => RevertToCurrentSnapshot_TaskResponse {
        host?: ManagedObjectReference,
        suppress_power_on?: bool,
    } -> ManagedObjectReference;

    RemoveAllSnapshots_Task => RemoveAllSnapshots_TaskResponse {
        consolidate?: bool,
    } -> ManagedObjectReference;

    ConsolidateVMDisks_Task => ConsolidateVMDisks_TaskResponse {} -> ManagedObjectReference;

    ReloadVirtualMachineFromPath_Task => ReloadVirtualMachineFromPath_TaskResponse {
        configuration_path: String,
    } -> ManagedObjectReference;

    UpgradeVM_Task => UpgradeVM_TaskResponse {
        version?: String,
    } -> ManagedObjectReference;

    MarkAsTemplate => MarkAsTemplateResponse {};

    MarkAsVirtualMachine => MarkAsVirtualMachineResponse {
        pool: ManagedObjectReference,
        host?: ManagedObjectReference,
    };

    UnregisterVM => UnregisterVMResponse {};

    TerminateVM => TerminateVMResponse {};

    AcquireTicket => AcquireTicketResponse {
        ticket_type: String,
    } -> DynamicData;

    AcquireMksTicket => AcquireMksTicketResponse {} -> DynamicData;

    RefreshStorageInfo => RefreshStorageInfoResponse {};

    MountToolsInstaller => MountToolsInstallerResponse {};

    UnmountToolsInstaller => UnmountToolsInstallerResponse {};

    ResetGuestInformation => ResetGuestInformationResponse {};

    SetScreenResolution => SetScreenResolutionResponse {
        width: i32,
        height: i32,
    };

    ExtractOvfEnvironment => ExtractOvfEnvironmentResponse {} -> String;

    DefragmentAllDisks => DefragmentAllDisksResponse {};

    SendNMI => SendNMIResponse {};

    /// Answers a pending question shown in `runtime.question`.
    AnswerVM => AnswerVMResponse {
        question_id: String,
        answer_choice: String,
    };

    /// Disk areas changed since `change_id`, for incremental backup.
    QueryChangedDiskAreas => QueryChangedDiskAreasResponse {
        snapshot?: ManagedObjectReference,
        device_key: i32,
        start_offset: i64,
        change_id: String,
    } -> DynamicData;

    QueryFaultToleranceCompatibility => QueryFaultToleranceCompatibilityResponse {}
        -> Vec<DynamicData>;

    RemoveSnapshot_Task => RemoveSnapshot_TaskResponse {
        remove_children: bool,
        consolidate?: bool,
    } -> ManagedObjectReference;

    RevertToSnapshot_Task => RevertToSnapshot_TaskResponse {
        host?: ManagedObjectReference,
        suppress_power_on?: bool,
    } -> ManagedObjectReference;

    RenameSnapshot => RenameSnapshotResponse {
        name?: String,
        description?: String,
    };

    ExportSnapshot => ExportSnapshotResponse {} -> ManagedObjectReference;
}
