//! Stubs of the resource check system.

soap_methods! {
    managed_object: "VsanResourceCheckSystem";
    messages: platform;

    vsan_perform_resource_check => VsanPerformResourceCheck;
    vsan_get_resource_check_status => VsanGetResourceCheckStatus;
}
