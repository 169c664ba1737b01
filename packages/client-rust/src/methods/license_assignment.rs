//! Stubs of license assignment.

soap_methods! {
    managed_object: "LicenseAssignmentManager";
    messages: admin;

    update_assigned_license => UpdateAssignedLicense;
    remove_assigned_license => RemoveAssignedLicense;
    query_assigned_licenses => QueryAssignedLicenses;
}
