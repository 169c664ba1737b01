//! Stubs of the virtual disk manager.

soap_methods! {
    managed_object: "VirtualDiskManager";
    messages: storage;

    create_virtual_disk_task => CreateVirtualDisk_Task;
    delete_virtual_disk_task => DeleteVirtualDisk_Task;
    move_virtual_disk_task => MoveVirtualDisk_Task;
    copy_virtual_disk_task => CopyVirtualDisk_Task;
    extend_virtual_disk_task => ExtendVirtualDisk_Task;
    inflate_virtual_disk_task => InflateVirtualDisk_Task;
    eager_zero_virtual_disk_task => EagerZeroVirtualDisk_Task;
    zero_fill_virtual_disk_task => ZeroFillVirtualDisk_Task;
    shrink_virtual_disk_task => ShrinkVirtualDisk_Task;
    defragment_virtual_disk_task => DefragmentVirtualDisk_Task;
    query_virtual_disk_uuid => QueryVirtualDiskUuid;
    set_virtual_disk_uuid => SetVirtualDiskUuid;
    query_virtual_disk_fragmentation => QueryVirtualDiskFragmentation;
    query_virtual_disk_geometry => QueryVirtualDiskGeometry;
}
