//! Stubs of per-host service control.

soap_methods! {
    managed_object: "HostServiceSystem";
    messages: host_config;

    start_service => StartService;
    stop_service => StopService;
    restart_service => RestartService;
    refresh_services => RefreshServices;
    update_service_policy => UpdateServicePolicy;
    uninstall_service => UninstallService;
}
