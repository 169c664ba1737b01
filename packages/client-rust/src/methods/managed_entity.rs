//! Stubs common to every inventory entity.

soap_methods! {
    managed_object: "ManagedEntity";
    messages: inventory;

    destroy_task => Destroy_Task;
    rename_task => Rename_Task;
    reload => Reload;
    set_custom_value => SetCustomValue;
}
