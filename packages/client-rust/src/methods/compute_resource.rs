//! Stubs of compute resources.

soap_methods! {
    managed_object: "ComputeResource";
    messages: inventory;

    reconfigure_compute_resource_task => ReconfigureComputeResource_Task;
}
