//! Stubs of distributed port groups.

soap_methods! {
    managed_object: "DistributedVirtualPortgroup";
    messages: network;

    reconfigure_dv_portgroup_task => ReconfigureDVPortgroup_Task;
    dv_portgroup_rollback_task => DVPortgroupRollback_Task;
}
