//! Stubs of the cluster configuration system.

soap_methods! {
    managed_object: "VsanVcClusterConfigSystem";
    messages: cluster_config;

    vsan_cluster_get_config => VsanClusterGetConfig;
    vsan_cluster_reconfig => VsanClusterReconfig;
    vsan_encrypted_cluster_rekey_task => VsanEncryptedClusterRekey_Task;
    vsan_cluster_get_runtime_stats => VsanClusterGetRuntimeStats;
    vsan_cluster_get_hcl_info => VsanClusterGetHclInfo;
    vsan_cluster_validate_config => VsanClusterValidateConfig;
    vsan_check_cluster_clomd_liveness => VsanCheckClusterClomdLiveness;
}
