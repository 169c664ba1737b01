//! Stubs of the event manager.

soap_methods! {
    managed_object: "EventManager";
    messages: task;

    query_events => QueryEvents;
    post_event => PostEvent;
    log_user_event => LogUserEvent;
    create_collector_for_events => CreateCollectorForEvents;
    retrieve_argument_description => RetrieveArgumentDescription;
}
