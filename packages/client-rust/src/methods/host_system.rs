//! Stubs of ESXi hosts.

soap_methods! {
    managed_object: "HostSystem";
    messages: host_system;

    enter_maintenance_mode_task => EnterMaintenanceMode_Task;
    exit_maintenance_mode_task => ExitMaintenanceMode_Task;
    reboot_host_task => RebootHost_Task;
    shutdown_host_task => ShutdownHost_Task;
    disconnect_host_task => DisconnectHost_Task;
    reconnect_host_task => ReconnectHost_Task;
    power_down_host_to_stand_by_task => PowerDownHostToStandBy_Task;
    power_up_host_from_stand_by_task => PowerUpHostFromStandBy_Task;
    query_host_connection_info => QueryHostConnectionInfo;
    retrieve_hardware_uptime => RetrieveHardwareUptime;
    query_memory_overhead_ex => QueryMemoryOverheadEx;
    acquire_cim_services_ticket => AcquireCimServicesTicket;
    update_system_resources => UpdateSystemResources;
    query_tpm_attestation_report => QueryTpmAttestationReport;
    update_flags => UpdateFlags;
    update_ipmi => UpdateIpmi;
    enter_lockdown_mode => EnterLockdownMode;
    exit_lockdown_mode => ExitLockdownMode;
    prepare_crypto => PrepareCrypto;
    enable_crypto => EnableCrypto;
    configure_crypto_key => ConfigureCryptoKey;
}
