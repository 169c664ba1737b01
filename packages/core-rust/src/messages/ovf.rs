//! OVF descriptors and the NFC leases that move disk data during import
//! and export.

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, KeyValue};

crate::soap_messages! {
    ParseDescriptor => ParseDescriptorResponse {
        ovf_descriptor: String,
        pdp: DynamicData,
    } -> DynamicData;

    ValidateHost => ValidateHostResponse {
        ovf_descriptor: String,
        host: ManagedObjectReference,
        vhp: DynamicData,
    } -> DynamicData;

    /// Builds the `ImportVApp` spec for a descriptor and target.
    CreateImportSpec => CreateImportSpecResponse {
        ovf_descriptor: String,
        resource_pool: ManagedObjectReference,
        datastore: ManagedObjectReference,
        cisp: DynamicData,
    } -> DynamicData;

    CreateDescriptor => CreateDescriptorResponse {
        obj: ManagedObjectReference,
        cdp: DynamicData,
    } -> DynamicData;

    HttpNfcLeaseComplete => HttpNfcLeaseCompleteResponse {};

    HttpNfcLeaseAbort => HttpNfcLeaseAbortResponse {
        fault?: DynamicData,
    };

    /// Keeps the lease alive; `percent` is overall progress.
    HttpNfcLeaseProgress => HttpNfcLeaseProgressResponse {
        percent: i32,
    };

    HttpNfcLeaseGetManifest => HttpNfcLeaseGetManifestResponse {} -> Vec<DynamicData>;

    HttpNfcLeaseSetManifestChecksumType => HttpNfcLeaseSetManifestChecksumTypeResponse {
        device_url_to_checksum_types?: Vec<KeyValue>,
    };
}
