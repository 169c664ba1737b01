//! Stubs of the task manager.

soap_methods! {
    managed_object: "TaskManager";
    messages: task;

    create_task => CreateTask;
    create_collector_for_tasks => CreateCollectorForTasks;
}
