//! Stubs of the alarm manager.

soap_methods! {
    managed_object: "AlarmManager";
    messages: alarm;

    create_alarm => CreateAlarm;
    get_alarm => GetAlarm;
    get_alarm_state => GetAlarmState;
    acknowledge_alarm => AcknowledgeAlarm;
    are_alarm_actions_enabled => AreAlarmActionsEnabled;
    enable_alarm_actions => EnableAlarmActions;
    clear_triggered_alarms => ClearTriggeredAlarms;
    disable_alarm => DisableAlarm;
    enable_alarm => EnableAlarm;
}
