//! Operations of `VimClusterVsanVcStretchedClusterSystem`.

use crate::mor::ManagedObjectReference;
use crate::types::{
    DynamicData, VimClusterVsanFaultDomainsConfigSpec, VimClusterVsanPreferredFaultDomainInfo,
    VimClusterVsanWitnessHostInfo,
};

crate::soap_messages! {
    /// Converts a cluster into a stretched cluster with a witness host.
    VSANVcConvertToStretchedCluster => VSANVcConvertToStretchedClusterResponse {
        cluster: ManagedObjectReference,
        fault_domain_config: VimClusterVsanFaultDomainsConfigSpec,
        witness_host: ManagedObjectReference,
        preferred_fd: String,
        disk_mapping?: DynamicData,
    } -> ManagedObjectReference;

    VSANVcAddWitnessHost => VSANVcAddWitnessHostResponse {
        cluster: ManagedObjectReference,
        witness_host: ManagedObjectReference,
        preferred_fd: String,
        disk_mapping?: DynamicData,
    } -> ManagedObjectReference;

    VSANVcRemoveWitnessHost => VSANVcRemoveWitnessHostResponse {
        cluster: ManagedObjectReference,
        witness_host?: ManagedObjectReference,
        witness_address?: String,
    } -> ManagedObjectReference;

    VSANVcGetWitnessHosts => VSANVcGetWitnessHostsResponse {
        cluster: ManagedObjectReference,
    } -> Vec<VimClusterVsanWitnessHostInfo>;

    VSANVcGetPreferredFaultDomain => VSANVcGetPreferredFaultDomainResponse {
        cluster: ManagedObjectReference,
    } -> VimClusterVsanPreferredFaultDomainInfo;

    VSANVcSetPreferredFaultDomain => VSANVcSetPreferredFaultDomainResponse {
        cluster: ManagedObjectReference,
        preferred_fd: String,
        witness_host?: ManagedObjectReference,
    } -> ManagedObjectReference;

    /// Whether a host is a witness of any stretched cluster.
    VSANVcIsWitnessHost => VSANVcIsWitnessHostResponse {
        host: ManagedObjectReference,
    } -> bool;

    VSANIsWitnessVirtualAppliance => VSANIsWitnessVirtualApplianceResponse {
        hosts: Vec<ManagedObjectReference>,
    } -> Vec<DynamicData>;

    VSANVcRetrieveStretchedClusterVcCapability => VSANVcRetrieveStretchedClusterVcCapabilityResponse {
        cluster: ManagedObjectReference,
        verify_all_connected?: bool,
    } -> Vec<DynamicData>;

    /// Two-node clusters that share the given witness host.
    VSANVcGetWitnessedClusters => VSANVcGetWitnessedClustersResponse {
        witness_host: ManagedObjectReference,
    } -> Vec<DynamicData>;
}
