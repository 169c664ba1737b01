//! Stubs of list views.

soap_methods! {
    managed_object: "ListView";
    messages: service;

    modify_list_view => ModifyListView;
    reset_list_view => ResetListView;
    reset_list_view_from_view => ResetListViewFromView;
}
