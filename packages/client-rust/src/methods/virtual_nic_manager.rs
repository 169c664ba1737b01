//! Stubs of the per-host VMkernel adapter tagging.

soap_methods! {
    managed_object: "HostVirtualNicManager";
    messages: host_config;

    select_vnic_for_nic_type => SelectVnicForNicType;
    deselect_vnic_for_nic_type => DeselectVnicForNicType;
    query_net_config => QueryNetConfig;
}
