//! Stubs of the license manager.

soap_methods! {
    managed_object: "LicenseManager";
    messages: admin;

    query_license_source_availability => QueryLicenseSourceAvailability;
    query_license_usage => QueryLicenseUsage;
    set_license_edition => SetLicenseEdition;
    check_license_feature => CheckLicenseFeature;
    enable_feature => EnableFeature;
    disable_feature => DisableFeature;
    configure_license_source => ConfigureLicenseSource;
    update_license => UpdateLicense;
    add_license => AddLicense;
    remove_license => RemoveLicense;
    decode_license => DecodeLicense;
    update_license_label => UpdateLicenseLabel;
    remove_license_label => RemoveLicenseLabel;
}
