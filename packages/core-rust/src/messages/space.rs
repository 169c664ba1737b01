//! Operations of `VsanSpaceReportSystem`.

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, VsanSpaceQuerySpec, VsanSpaceUsage};

crate::soap_messages! {
    /// Capacity and usage breakdown of a cluster.
    VsanQuerySpaceUsage => VsanQuerySpaceUsageResponse {
        cluster: ManagedObjectReference,
        storage_policies?: Vec<DynamicData>,
        whatif_capacity_only?: bool,
    } -> VsanSpaceUsage;

    /// Space consumed by vSAN-managed objects of the given entities.
    QueryVsanManagedStorageSpaceUsage => QueryVsanManagedStorageSpaceUsageResponse {
        cluster: ManagedObjectReference,
        query_spec: VsanSpaceQuerySpec,
    } -> Vec<DynamicData>;

    VsanQueryEntitySpaceUsage => VsanQueryEntitySpaceUsageResponse {
        cluster: ManagedObjectReference,
        query_spec: VsanSpaceQuerySpec,
    } -> Vec<DynamicData>;
}
