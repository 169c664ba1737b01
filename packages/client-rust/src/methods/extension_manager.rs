//! Stubs of the extension manager.

soap_methods! {
    managed_object: "ExtensionManager";
    messages: admin;

    register_extension => RegisterExtension;
    unregister_extension => UnregisterExtension;
    update_extension => UpdateExtension;
    find_extension => FindExtension;
    set_extension_certificate => SetExtensionCertificate;
    query_managed_by => QueryManagedBy;
    get_public_key => GetPublicKey;
    set_public_key => SetPublicKey;
}
