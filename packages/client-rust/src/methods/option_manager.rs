//! Stubs of advanced settings, on vCenter and on each host.

soap_methods! {
    managed_object: "OptionManager";
    messages: host_config;

    query_options => QueryOptions;
    update_options => UpdateOptions;
}
