//! Stubs of resource pools and vApps.

soap_methods! {
    managed_object: "ResourcePool";
    messages: inventory;

    create_resource_pool => CreateResourcePool;
    update_config => UpdateConfig;
    move_into_resource_pool => MoveIntoResourcePool;
    destroy_children => DestroyChildren;
    create_vapp => CreateVApp;
    import_vapp => ImportVApp;
    register_child_vm_task => RegisterChildVM_Task;
    update_child_resource_configuration => UpdateChildResourceConfiguration;
    query_resource_config_option => QueryResourceConfigOption;
    refresh_runtime => RefreshRuntime;
}
