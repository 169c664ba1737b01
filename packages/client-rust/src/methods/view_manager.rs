//! Stubs of the view manager.

soap_methods! {
    managed_object: "ViewManager";
    messages: service;

    create_container_view => CreateContainerView;
    create_list_view => CreateListView;
    create_list_view_from_view => CreateListViewFromView;
    create_inventory_view => CreateInventoryView;
}
