//! Stubs of the vSphere root object.

soap_methods! {
    managed_object: "ServiceInstance";
    messages: service;

    retrieve_service_content => RetrieveServiceContent;
    current_time => CurrentTime;
    retrieve_product_components => RetrieveProductComponents;
}
