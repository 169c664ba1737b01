//! Operations of the host-side `VsanSystemEx`.

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, VsanHostAboutInfoEx, VsanHostRuntimeStats, VsanWhatIfEvacResult};

crate::soap_messages! {
    /// Version and build of the vSAN software on the host.
    VsanGetAboutInfoEx => VsanGetAboutInfoExResponse {} -> VsanHostAboutInfoEx;

    VsanHostGetRuntimeStats => VsanHostGetRuntimeStatsResponse {
        stats?: Vec<String>,
        cluster_uuid?: String,
    } -> VsanHostRuntimeStats;

    /// Simulates evacuating the host or some of its disks.
    VsanQueryWhatIfEvacuationResult => VsanQueryWhatIfEvacuationResultResponse {
        evac_entity_uuid: String,
    } -> VsanWhatIfEvacResult;

    /// Cluster membership and health of the host, per vSAN cluster.
    VsanQueryHostStatusEx => VsanQueryHostStatusExResponse {
        cluster_uuids: Vec<String>,
    } -> Vec<DynamicData>;

    VsanHostUpdateFirmware => VsanHostUpdateFirmwareResponse {
        spec: DynamicData,
    } -> ManagedObjectReference;
}
