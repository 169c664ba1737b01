//! Operations of `VsanFileServiceSystem`.

use crate::mor::ManagedObjectReference;
use crate::types::{
    DynamicData, VsanFileServiceDomain, VsanFileServiceDomainConfig,
    VsanFileServiceDomainQuerySpec, VsanFileServiceOvfSpec, VsanFileShareConfig,
    VsanFileShareQueryResult, VsanFileShareQuerySpec,
};

crate::soap_messages! {
    // ----- Domains -----

    CreateFileServiceDomain => CreateFileServiceDomainResponse {
        domain_config: VsanFileServiceDomainConfig,
        cluster: ManagedObjectReference,
    } -> ManagedObjectReference;

    ReconfigureFileServiceDomain => ReconfigureFileServiceDomainResponse {
        domain_name: String,
        domain_config: VsanFileServiceDomainConfig,
        cluster: ManagedObjectReference,
    } -> ManagedObjectReference;

    RemoveFileServiceDomain => RemoveFileServiceDomainResponse {
        domain_name: String,
        cluster: ManagedObjectReference,
    } -> ManagedObjectReference;

    VsanClusterQueryFileServiceDomains => VsanClusterQueryFileServiceDomainsResponse {
        query_spec?: VsanFileServiceDomainQuerySpec,
        cluster: ManagedObjectReference,
    } -> Vec<VsanFileServiceDomain>;

    // ----- Shares -----

    CreateFileShare => CreateFileShareResponse {
        config: VsanFileShareConfig,
        cluster: ManagedObjectReference,
    } -> ManagedObjectReference;

    ReconfigureFileShare => ReconfigureFileShareResponse {
        share_uuid: String,
        config: VsanFileShareConfig,
        cluster: ManagedObjectReference,
        force?: bool,
    } -> ManagedObjectReference;

    RemoveFileShare => RemoveFileShareResponse {
        share_uuid: String,
        cluster: ManagedObjectReference,
        force?: bool,
    } -> ManagedObjectReference;

    /// Pages through file shares; pass `next_offset` back as `offset`.
    QueryFileShares => QueryFileSharesResponse {
        query_spec: VsanFileShareQuerySpec,
        cluster: ManagedObjectReference,
    } -> VsanFileShareQueryResult;

    // ----- Service -----

    /// Downloads the file service appliance image to vCenter.
    DownloadFileServiceOvf => DownloadFileServiceOvfResponse {
        download_url: String,
    } -> ManagedObjectReference;

    FindOvfDownloadUrl => FindOvfDownloadUrlResponse {
        cluster: ManagedObjectReference,
    } -> String;

    VsanQueryFileServiceOvfs => VsanQueryFileServiceOvfsResponse {} -> Vec<VsanFileServiceOvfSpec>;

    UpgradeFsvm => UpgradeFsvmResponse {
        cluster: ManagedObjectReference,
    } -> ManagedObjectReference;

    VsanPerformFileServiceEnablePreflightCheck => VsanPerformFileServiceEnablePreflightCheckResponse {
        cluster: ManagedObjectReference,
        domain_config?: VsanFileServiceDomainConfig,
        network?: ManagedObjectReference,
    } -> DynamicData;

    /// Spreads file server containers evenly across the cluster's hosts.
    VsanRebalanceFileService => VsanRebalanceFileServiceResponse {
        cluster: ManagedObjectReference,
    } -> ManagedObjectReference;
}
