//! Stubs of NFC leases.

soap_methods! {
    managed_object: "HttpNfcLease";
    messages: ovf;

    http_nfc_lease_complete => HttpNfcLeaseComplete;
    http_nfc_lease_abort => HttpNfcLeaseAbort;
    http_nfc_lease_progress => HttpNfcLeaseProgress;
    http_nfc_lease_get_manifest => HttpNfcLeaseGetManifest;
    http_nfc_lease_set_manifest_checksum_type => HttpNfcLeaseSetManifestChecksumType;
}
