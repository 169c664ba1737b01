//! Operations of `VsanVcClusterConfigSystem`.

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, VsanConfigInfoEx, VsanReconfigSpec};

crate::soap_messages! {
    /// Extended vSAN configuration of a cluster.
    VsanClusterGetConfig => VsanClusterGetConfigResponse {
        cluster: ManagedObjectReference,
    } -> VsanConfigInfoEx;

    /// Applies a reconfiguration and returns the tracking task.
    VsanClusterReconfig => VsanClusterReconfigResponse {
        cluster: ManagedObjectReference,
        vsan_reconfig_spec: VsanReconfigSpec,
    } -> ManagedObjectReference;

    VsanEncryptedClusterRekey_Task => VsanEncryptedClusterRekey_TaskResponse {
        encrypted_cluster: ManagedObjectReference,
        deep_rekey?: bool,
        allow_reduced_redundancy?: bool,
    } -> ManagedObjectReference;

    VsanClusterGetRuntimeStats => VsanClusterGetRuntimeStatsResponse {
        cluster: ManagedObjectReference,
        stats?: Vec<String>,
    } -> Vec<crate::types::VsanRuntimeStatsHostMap>;

    VsanClusterGetHclInfo => VsanClusterGetHclInfoResponse {
        cluster: ManagedObjectReference,
    } -> DynamicData;

    VsanClusterValidateConfig => VsanClusterValidateConfigResponse {
        cluster: ManagedObjectReference,
        vsan_reconfig_spec: VsanReconfigSpec,
    } -> Vec<DynamicData>;

    /// Reports whether the cluster is ready to be converted to vSAN.
    VsanCheckClusterClomdLiveness => VsanCheckClusterClomdLivenessResponse {
        cluster: ManagedObjectReference,
    } -> DynamicData;
}
