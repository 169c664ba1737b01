//! Stubs of property collector filters.

soap_methods! {
    managed_object: "PropertyFilter";
    messages: service;

    destroy_property_filter => DestroyPropertyFilter;
}
