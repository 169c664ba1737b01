//! Stubs of tasks.

soap_methods! {
    managed_object: "Task";
    messages: task;

    cancel_task => CancelTask;
    set_task_state => SetTaskState;
    update_progress => UpdateProgress;
    set_task_description => SetTaskDescription;
}
