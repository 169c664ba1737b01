//! Stubs of the vCenter appliance deployer.

soap_methods! {
    managed_object: "VsanVcsaDeployerSystem";
    messages: platform;

    vsan_prepare_vsan_for_vcsa => VsanPrepareVsanForVcsa;
    vsan_post_config_for_vcsa => VsanPostConfigForVcsa;
    vsan_vcsa_get_bootstrap_progress => VsanVcsaGetBootstrapProgress;
    vsan_vcsa_query_config_options => VsanVcsaQueryConfigOptions;
}
