//! Stubs of datacenters.

soap_methods! {
    managed_object: "Datacenter";
    messages: inventory;

    query_connection_info => QueryConnectionInfo;
    query_connection_info_via_spec => QueryConnectionInfoViaSpec;
    power_on_multi_vm_task => PowerOnMultiVM_Task;
    reconfigure_datacenter_task => ReconfigureDatacenter_Task;
}
