//! Stubs of custom field definitions.

soap_methods! {
    managed_object: "CustomFieldsManager";
    messages: admin;

    add_custom_field_def => AddCustomFieldDef;
    remove_custom_field_def => RemoveCustomFieldDef;
    rename_custom_field_def => RenameCustomFieldDef;
    set_field => SetField;
}
