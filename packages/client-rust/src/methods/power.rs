//! Stubs of the cluster power system.

soap_methods! {
    managed_object: "VsanClusterPowerSystem";
    messages: platform;

    perform_cluster_power_action => PerformClusterPowerAction;
}
