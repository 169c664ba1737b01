//! Administrative singletons of the vSphere API: inventory search,
//! permissions, licensing, extensions and custom fields.

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, KeyValue};

crate::soap_messages! {
    /// Finds a VM (`vm_search = true`) or host by BIOS or instance UUID.
    FindByUuid => FindByUuidResponse {
        datacenter?: ManagedObjectReference,
        uuid: String,
        vm_search: bool,
        instance_uuid?: bool,
    } -> Option<ManagedObjectReference>;

    FindAllByUuid => FindAllByUuidResponse {
        datacenter?: ManagedObjectReference,
        uuid: String,
        vm_search: bool,
        instance_uuid?: bool,
    } -> Vec<ManagedObjectReference>;

    FindByIp => FindByIpResponse {
        datacenter?: ManagedObjectReference,
        ip: String,
        vm_search: bool,
    } -> Option<ManagedObjectReference>;

    FindAllByIp => FindAllByIpResponse {
        datacenter?: ManagedObjectReference,
        ip: String,
        vm_search: bool,
    } -> Vec<ManagedObjectReference>;

    FindByDnsName => FindByDnsNameResponse {
        datacenter?: ManagedObjectReference,
        dns_name: String,
        vm_search: bool,
    } -> Option<ManagedObjectReference>;

    FindAllByDnsName => FindAllByDnsNameResponse {
        datacenter?: ManagedObjectReference,
        dns_name: String,
        vm_search: bool,
    } -> Vec<ManagedObjectReference>;

    /// Resolves a path such as `dc1/host/vsan-cluster`.
    FindByInventoryPath => FindByInventoryPathResponse {
        inventory_path: String,
    } -> Option<ManagedObjectReference>;

    FindByDatastorePath => FindByDatastorePathResponse {
        datacenter: ManagedObjectReference,
        path: String,
    } -> Option<ManagedObjectReference>;

    FindChild => FindChildResponse {
        entity: ManagedObjectReference,
        name: String,
    } -> Option<ManagedObjectReference>;

    AddAuthorizationRole => AddAuthorizationRoleResponse {
        name: String,
        priv_ids?: Vec<String>,
    } -> i32;

    RemoveAuthorizationRole => RemoveAuthorizationRoleResponse {
        role_id: i32,
        fail_if_used: bool,
    };

    UpdateAuthorizationRole => UpdateAuthorizationRoleResponse {
        role_id: i32,
        new_name: String,
        priv_ids?: Vec<String>,
    };

    MergePermissions => MergePermissionsResponse {
        src_role_id: i32,
        dst_role_id: i32,
    };

    RetrieveRolePermissions => RetrieveRolePermissionsResponse {
        role_id: i32,
    } -> Vec<DynamicData>;

    RetrieveEntityPermissions => RetrieveEntityPermissionsResponse {
        entity: ManagedObjectReference,
        inherited: bool,
    } -> Vec<DynamicData>;

    RetrieveAllPermissions => RetrieveAllPermissionsResponse {} -> Vec<DynamicData>;

    SetEntityPermissions => SetEntityPermissionsResponse {
        entity: ManagedObjectReference,
        permission?: Vec<DynamicData>,
    };

    ResetEntityPermissions => ResetEntityPermissionsResponse {
        entity: ManagedObjectReference,
        permission?: Vec<DynamicData>,
    };

    RemoveEntityPermission => RemoveEntityPermissionResponse {
        entity: ManagedObjectReference,
        user: String,
        is_group: bool,
    };

    HasPrivilegeOnEntity => HasPrivilegeOnEntityResponse {
        entity: ManagedObjectReference,
        session_id: String,
        priv_id?: Vec<String>,
    } -> Vec<bool>;

    HasPrivilegeOnEntities => HasPrivilegeOnEntitiesResponse {
        entity: Vec<ManagedObjectReference>,
        session_id: String,
        priv_id?: Vec<String>,
    } -> Vec<DynamicData>;

    HasUserPrivilegeOnEntities => HasUserPrivilegeOnEntitiesResponse {
        entities: Vec<ManagedObjectReference>,
        user_name: String,
        priv_id?: Vec<String>,
    } -> Vec<DynamicData>;

    FetchUserPrivilegeOnEntities => FetchUserPrivilegeOnEntitiesResponse {
        entities: Vec<ManagedObjectReference>,
        user_name: String,
    } -> Vec<DynamicData>;

    QueryLicenseSourceAvailability => QueryLicenseSourceAvailabilityResponse {
        host?: ManagedObjectReference,
    } -> Vec<DynamicData>;

    QueryLicenseUsage => QueryLicenseUsageResponse {
        host?: ManagedObjectReference,
    } -> DynamicData;

    SetLicenseEdition => SetLicenseEditionResponse {
        host?: ManagedObjectReference,
        feature_key?: String,
    };

    CheckLicenseFeature => CheckLicenseFeatureResponse {
        host?: ManagedObjectReference,
        feature_key: String,
    } -> bool;

    EnableFeature => EnableFeatureResponse {
        host?: ManagedObjectReference,
        feature_key: String,
    } -> bool;

    DisableFeature => DisableFeatureResponse {
        host?: ManagedObjectReference,
        feature_key: String,
    } -> bool;

    ConfigureLicenseSource => ConfigureLicenseSourceResponse {
        host?: ManagedObjectReference,
        license_source: DynamicData,
    };

    UpdateLicense => UpdateLicenseResponse {
        license_key: String,
        labels?: Vec<KeyValue>,
    } -> DynamicData;

    AddLicense => AddLicenseResponse {
        license_key: String,
        labels?: Vec<KeyValue>,
    } -> DynamicData;

    RemoveLicense => RemoveLicenseResponse {
        license_key: String,
    };

    DecodeLicense => DecodeLicenseResponse {
        license_key: String,
    } -> DynamicData;

    UpdateLicenseLabel => UpdateLicenseLabelResponse {
        license_key: String,
        label_key: String,
        label_value: String,
    };

    RemoveLicenseLabel => RemoveLicenseLabelResponse {
        license_key: String,
        label_key: String,
    };

    /// Assigns a license key to an entity, e.g. a vSAN cluster's instance UUID.
    UpdateAssignedLicense => UpdateAssignedLicenseResponse {
        entity: String,
        license_key: String,
        entity_display_name?: String,
    } -> DynamicData;

    RemoveAssignedLicense => RemoveAssignedLicenseResponse {
        entity_id: String,
    };

    QueryAssignedLicenses => QueryAssignedLicensesResponse {
        entity_id?: String,
    } -> Vec<DynamicData>;

    RegisterExtension => RegisterExtensionResponse {
        extension: DynamicData,
    };

    UnregisterExtension => UnregisterExtensionResponse {
        extension_key: String,
    };

    UpdateExtension => UpdateExtensionResponse {
        extension: DynamicData,
    };

    FindExtension => FindExtensionResponse {
        extension_key: String,
    } -> Option<DynamicData>;

    SetExtensionCertificate => SetExtensionCertificateResponse {
        extension_key: String,
        certificate_pem?: String,
    };

    QueryManagedBy => QueryManagedByResponse {
        extension_key: String,
    } -> Vec<ManagedObjectReference>;

    GetPublicKey => GetPublicKeyResponse {} -> String;

    SetPublicKey => SetPublicKeyResponse {
        extension_key: String,
        public_key: String,
    };

    AddCustomFieldDef => AddCustomFieldDefResponse {
        name: String,
        mo_type?: String,
        field_def_policy?: DynamicData,
        field_policy?: DynamicData,
    } -> DynamicData;

    RemoveCustomFieldDef => RemoveCustomFieldDefResponse {
        key: i32,
    };

    RenameCustomFieldDef => RenameCustomFieldDefResponse {
        key: i32,
        name: String,
    };

    SetField => SetFieldResponse {
        entity: ManagedObjectReference,
        key: i32,
        value: String,
    };
}
