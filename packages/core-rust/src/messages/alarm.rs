//! Operations of the vSphere `AlarmManager` and its alarms.

use crate::mor::ManagedObjectReference;
use crate::types::DynamicData;

crate::soap_messages! {
    CreateAlarm => CreateAlarmResponse {
        entity: ManagedObjectReference,
        spec: DynamicData,
    } -> ManagedObjectReference;

    /// Alarms defined on `entity`, or every alarm when unset.
    GetAlarm => GetAlarmResponse {
        entity?: ManagedObjectReference,
    } -> Vec<ManagedObjectReference>;

    GetAlarmState => GetAlarmStateResponse {
        entity: ManagedObjectReference,
    } -> Vec<DynamicData>;

    AcknowledgeAlarm => AcknowledgeAlarmResponse {
        alarm: ManagedObjectReference,
        entity: ManagedObjectReference,
    };

    AreAlarmActionsEnabled => AreAlarmActionsEnabledResponse {
        entity: ManagedObjectReference,
    } -> bool;

    EnableAlarmActions => EnableAlarmActionsResponse {
        entity: ManagedObjectReference,
        enabled: bool,
    };

    ClearTriggeredAlarms => ClearTriggeredAlarmsResponse {
        filter: DynamicData,
    };

    DisableAlarm => DisableAlarmResponse {
        alarm: ManagedObjectReference,
        entity: ManagedObjectReference,
    };

    EnableAlarm => EnableAlarmResponse {
        alarm: ManagedObjectReference,
        entity: ManagedObjectReference,
    };

    ReconfigureAlarm => ReconfigureAlarmResponse {
        spec: DynamicData,
    };

    RemoveAlarm => RemoveAlarmResponse {};
}
