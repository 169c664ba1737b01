//! Stubs of task history collectors.

soap_methods! {
    managed_object: "TaskHistoryCollector";
    messages: task;

    read_next_tasks => ReadNextTasks;
    read_previous_tasks => ReadPreviousTasks;
}
