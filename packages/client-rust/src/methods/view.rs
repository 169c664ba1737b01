//! Stubs common to every view.

soap_methods! {
    managed_object: "View";
    messages: service;

    destroy_view => DestroyView;
}
