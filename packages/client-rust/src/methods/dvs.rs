//! Stubs of distributed switches.

soap_methods! {
    managed_object: "DistributedVirtualSwitch";
    messages: network;

    reconfigure_dvs_task => ReconfigureDvs_Task;
    add_dv_portgroup_task => AddDVPortgroup_Task;
    fetch_dv_ports => FetchDVPorts;
    fetch_dv_port_keys => FetchDVPortKeys;
    refresh_dv_port_state => RefreshDVPortState;
    rectify_dvs_host_task => RectifyDvsHost_Task;
    perform_dvs_product_spec_operation_task => PerformDvsProductSpecOperation_Task;
    merge_dvs_task => MergeDvs_Task;
    move_dv_port_task => MoveDVPort_Task;
    reconfigure_dv_port_task => ReconfigureDVPort_Task;
    update_dvs_capability => UpdateDvsCapability;
    enable_network_resource_management => EnableNetworkResourceManagement;
    query_used_vlan_id_in_dvs => QueryUsedVlanIdInDvs;
    lookup_dv_port_group => LookupDvPortGroup;
}
