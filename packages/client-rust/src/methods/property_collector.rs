//! Stubs of the vSphere property collector.

soap_methods! {
    managed_object: "PropertyCollector";
    messages: service;

    retrieve_properties => RetrieveProperties;
    retrieve_properties_ex => RetrievePropertiesEx;
    continue_retrieve_properties_ex => ContinueRetrievePropertiesEx;
    cancel_retrieve_properties_ex => CancelRetrievePropertiesEx;
    create_filter => CreateFilter;
    wait_for_updates_ex => WaitForUpdatesEx;
    wait_for_updates => WaitForUpdates;
    check_for_updates => CheckForUpdates;
    cancel_wait_for_updates => CancelWaitForUpdates;
    create_property_collector => CreatePropertyCollector;
    destroy_property_collector => DestroyPropertyCollector;
}
