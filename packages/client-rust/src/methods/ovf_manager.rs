//! Stubs of the OVF manager.

soap_methods! {
    managed_object: "OvfManager";
    messages: ovf;

    parse_descriptor => ParseDescriptor;
    validate_host => ValidateHost;
    create_import_spec => CreateImportSpec;
    create_descriptor => CreateDescriptor;
}
