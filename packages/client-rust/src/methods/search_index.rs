//! Stubs of the inventory search index.

soap_methods! {
    managed_object: "SearchIndex";
    messages: admin;

    find_by_uuid => FindByUuid;
    find_all_by_uuid => FindAllByUuid;
    find_by_ip => FindByIp;
    find_all_by_ip => FindAllByIp;
    find_by_dns_name => FindByDnsName;
    find_all_by_dns_name => FindAllByDnsName;
    find_by_inventory_path => FindByInventoryPath;
    find_by_datastore_path => FindByDatastorePath;
    find_child => FindChild;
}
