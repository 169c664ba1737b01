//! Stubs of alarms.

soap_methods! {
    managed_object: "Alarm";
    messages: alarm;

    reconfigure_alarm => ReconfigureAlarm;
    remove_alarm => RemoveAlarm;
}
