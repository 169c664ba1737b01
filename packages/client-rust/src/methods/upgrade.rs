//! Stubs of the on-disk format upgrade system.

soap_methods! {
    managed_object: "VsanUpgradeSystemEx";
    messages: upgrade;

    perform_vsan_upgrade_ex => PerformVsanUpgradeEx;
    perform_vsan_upgrade_preflight_check_ex => PerformVsanUpgradePreflightCheckEx;
    perform_vsan_upgrade_preflight_async_check_task => PerformVsanUpgradePreflightAsyncCheck_Task;
    retrieve_supported_vsan_format_version => RetrieveSupportedVsanFormatVersion;
    query_upgrade_status_ex => QueryUpgradeStatusEx;
}
