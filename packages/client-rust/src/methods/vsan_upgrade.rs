//! Stubs of the legacy on-disk format upgrade system.

soap_methods! {
    managed_object: "VsanUpgradeSystem";
    messages: vim_vsan;

    perform_vsan_upgrade_task => PerformVsanUpgrade_Task;
    perform_vsan_upgrade_preflight_check => PerformVsanUpgradePreflightCheck;
    query_vsan_upgrade_status => QueryVsanUpgradeStatus;
}
