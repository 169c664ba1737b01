//! Stubs of the datastore file manager.

soap_methods! {
    managed_object: "FileManager";
    messages: datastore;

    make_directory => MakeDirectory;
    delete_datastore_file_task => DeleteDatastoreFile_Task;
    move_datastore_file_task => MoveDatastoreFile_Task;
    copy_datastore_file_task => CopyDatastoreFile_Task;
}
