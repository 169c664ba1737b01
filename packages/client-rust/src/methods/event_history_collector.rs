//! Stubs of event history collectors.

soap_methods! {
    managed_object: "EventHistoryCollector";
    messages: task;

    read_next_events => ReadNextEvents;
    read_previous_events => ReadPreviousEvents;
}
