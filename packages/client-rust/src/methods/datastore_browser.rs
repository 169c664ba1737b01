//! Stubs of the datastore browser.

soap_methods! {
    managed_object: "HostDatastoreBrowser";
    messages: datastore;

    search_datastore_task => SearchDatastore_Task;
    search_datastore_sub_folders_task => SearchDatastoreSubFolders_Task;
    delete_file => DeleteFile;
}
