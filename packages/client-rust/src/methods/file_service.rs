//! Stubs of the file service system.

soap_methods! {
    managed_object: "VsanFileServiceSystem";
    messages: file_service;

    create_file_service_domain => CreateFileServiceDomain;
    reconfigure_file_service_domain => ReconfigureFileServiceDomain;
    remove_file_service_domain => RemoveFileServiceDomain;
    vsan_cluster_query_file_service_domains => VsanClusterQueryFileServiceDomains;
    create_file_share => CreateFileShare;
    reconfigure_file_share => ReconfigureFileShare;
    remove_file_share => RemoveFileShare;
    query_file_shares => QueryFileShares;
    download_file_service_ovf => DownloadFileServiceOvf;
    find_ovf_download_url => FindOvfDownloadUrl;
    vsan_query_file_service_ovfs => VsanQueryFileServiceOvfs;
    upgrade_fsvm => UpgradeFsvm;
    vsan_perform_file_service_enable_preflight_check => VsanPerformFileServiceEnablePreflightCheck;
    vsan_rebalance_file_service => VsanRebalanceFileService;
}
