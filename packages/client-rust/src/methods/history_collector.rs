//! Stubs common to task and event history collectors.

soap_methods! {
    managed_object: "HistoryCollector";
    messages: task;

    reset_collector => ResetCollector;
    rewind_collector => RewindCollector;
    set_collector_page_size => SetCollectorPageSize;
    destroy_collector => DestroyCollector;
}
