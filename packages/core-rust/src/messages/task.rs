//! Tasks, events and their history collectors.

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, LocalizableMessage, TaskInfo};

crate::soap_messages! {
    CancelTask => CancelTaskResponse {};

    SetTaskState => SetTaskStateResponse {
        state: String,
        result?: serde_json::Value,
        fault?: DynamicData,
    };

    UpdateProgress => UpdateProgressResponse {
        percent_done: i32,
    };

    SetTaskDescription => SetTaskDescriptionResponse {
        description: LocalizableMessage,
    };

    /// Creates a task tracked by vCenter on behalf of an extension.
    CreateTask => CreateTaskResponse {
        obj: ManagedObjectReference,
        task_type_id: String,
        initiated_by?: String,
        cancelable: bool,
        parent_task_key?: String,
        activation_id?: String,
    } -> TaskInfo;

    CreateCollectorForTasks => CreateCollectorForTasksResponse {
        filter: DynamicData,
    } -> ManagedObjectReference;

    ResetCollector => ResetCollectorResponse {};

    RewindCollector => RewindCollectorResponse {};

    SetCollectorPageSize => SetCollectorPageSizeResponse {
        max_count: i32,
    };

    DestroyCollector => DestroyCollectorResponse {};

    ReadNextTasks => ReadNextTasksResponse {
        max_count: i32,
    } -> Vec<TaskInfo>;

    ReadPreviousTasks => ReadPreviousTasksResponse {
        max_count: i32,
    } -> Vec<TaskInfo>;

    QueryEvents => QueryEventsResponse {
        filter: DynamicData,
    } -> Vec<DynamicData>;

    PostEvent => PostEventResponse {
        event_to_post: DynamicData,
        task_info?: TaskInfo,
    };

    LogUserEvent => LogUserEventResponse {
        entity: ManagedObjectReference,
        msg: String,
    };

    CreateCollectorForEvents => CreateCollectorForEventsResponse {
        filter: DynamicData,
    } -> ManagedObjectReference;

    RetrieveArgumentDescription => RetrieveArgumentDescriptionResponse {
        event_type_id: String,
    } -> Vec<DynamicData>;

    ReadNextEvents => ReadNextEventsResponse {
        max_count: i32,
    } -> Vec<DynamicData>;

    ReadPreviousEvents => ReadPreviousEventsResponse {
        max_count: i32,
    } -> Vec<DynamicData>;
}
