//! Stubs of the host-side extended vSAN system.

soap_methods! {
    managed_object: "VsanSystemEx";
    messages: system_ex;

    vsan_get_about_info_ex => VsanGetAboutInfoEx;
    vsan_host_get_runtime_stats => VsanHostGetRuntimeStats;
    vsan_query_what_if_evacuation_result => VsanQueryWhatIfEvacuationResult;
    vsan_query_host_status_ex => VsanQueryHostStatusEx;
    vsan_host_update_firmware => VsanHostUpdateFirmware;
}
