//! Stubs of per-host network configuration.

soap_methods! {
    managed_object: "HostNetworkSystem";
    messages: host_config;

    add_virtual_nic => AddVirtualNic;
    remove_virtual_nic => RemoveVirtualNic;
    update_virtual_nic => UpdateVirtualNic;
    add_virtual_switch => AddVirtualSwitch;
    remove_virtual_switch => RemoveVirtualSwitch;
    update_virtual_switch => UpdateVirtualSwitch;
    add_port_group => AddPortGroup;
    remove_port_group => RemovePortGroup;
    update_port_group => UpdatePortGroup;
    query_network_hint => QueryNetworkHint;
    refresh_network_system => RefreshNetworkSystem;
    update_network_config => UpdateNetworkConfig;
    update_dns_config => UpdateDnsConfig;
    update_ip_route_config => UpdateIpRouteConfig;
}
