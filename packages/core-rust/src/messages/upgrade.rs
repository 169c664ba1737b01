//! Operations of `VsanUpgradeSystemEx` and `VsanVumSystem`.

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, KeyValue};

crate::soap_messages! {
    /// Upgrades the on-disk format of every disk group in a cluster.
    PerformVsanUpgradeEx => PerformVsanUpgradeExResponse {
        cluster: ManagedObjectReference,
        perform_object_upgrade?: bool,
        downgrade_format?: bool,
        allow_reduced_redundancy?: bool,
        exclude_hosts?: Vec<ManagedObjectReference>,
        spec?: DynamicData,
    } -> ManagedObjectReference;

    PerformVsanUpgradePreflightCheckEx => PerformVsanUpgradePreflightCheckExResponse {
        cluster: ManagedObjectReference,
        downgrade_format?: bool,
        spec?: DynamicData,
    } -> DynamicData;

    PerformVsanUpgradePreflightAsyncCheck_Task => PerformVsanUpgradePreflightAsyncCheck_TaskResponse {
        cluster: ManagedObjectReference,
        downgrade_format?: bool,
        spec?: DynamicData,
    } -> ManagedObjectReference;

    RetrieveSupportedVsanFormatVersion => RetrieveSupportedVsanFormatVersionResponse {
        cluster: ManagedObjectReference,
    } -> i32;

    QueryUpgradeStatusEx => QueryUpgradeStatusExResponse {
        cluster: ManagedObjectReference,
    } -> DynamicData;

    FetchIsoDepotCookie => FetchIsoDepotCookieResponse {
        username: String,
        password: String,
    };

    GetVsanVumConfig => GetVsanVumConfigResponse {} -> DynamicData;

    VsanVumConfigSet => VsanVumConfigSetResponse {
        config: DynamicData,
    };

    /// Release recommendations computed for a cluster.
    VsanVcQueryReleaseRecommendation => VsanVcQueryReleaseRecommendationResponse {
        cluster: ManagedObjectReference,
        options?: Vec<KeyValue>,
    } -> Vec<DynamicData>;
}
