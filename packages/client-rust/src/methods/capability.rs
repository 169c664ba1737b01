//! Stubs of the capability system.

soap_methods! {
    managed_object: "VsanCapabilitySystem";
    messages: capability;

    vsan_get_capabilities => VsanGetCapabilities;
    vsan_get_capability_status => VsanGetCapabilityStatus;
}
