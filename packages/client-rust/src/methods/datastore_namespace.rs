//! Stubs of the datastore namespace manager.

soap_methods! {
    managed_object: "DatastoreNamespaceManager";
    messages: datastore;

    create_directory => CreateDirectory;
    delete_directory => DeleteDirectory;
    convert_namespace_path_to_uuid_path => ConvertNamespacePathToUuidPath;
}
