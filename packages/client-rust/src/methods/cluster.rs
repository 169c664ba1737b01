//! Stubs of clusters.

soap_methods! {
    managed_object: "ClusterComputeResource";
    messages: inventory;

    reconfigure_cluster_task => ReconfigureCluster_Task;
    add_host_task => AddHost_Task;
    move_into_task => MoveInto_Task;
    move_host_into_task => MoveHostInto_Task;
    cluster_enter_maintenance_mode => ClusterEnterMaintenanceMode;
    recommend_hosts_for_vm => RecommendHostsForVm;
    refresh_recommendation => RefreshRecommendation;
    apply_recommendation => ApplyRecommendation;
    cancel_recommendation => CancelRecommendation;
    retrieve_das_advanced_runtime_info => RetrieveDasAdvancedRuntimeInfo;
    place_vm => PlaceVm;
    find_rules_for_vm => FindRulesForVm;
    validate_hci_configuration => ValidateHCIConfiguration;
    configure_hci_task => ConfigureHCI_Task;
    extend_hci_task => ExtendHCI_Task;
    abandon_hci_workflow => AbandonHciWorkflow;
}
