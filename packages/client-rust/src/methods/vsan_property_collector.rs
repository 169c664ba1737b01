//! Stubs of the property collector on the vSAN endpoint.

soap_methods! {
    managed_object: "PropertyCollector";
    messages: service;

    vsan_retrieve_properties => VsanRetrieveProperties;
}
