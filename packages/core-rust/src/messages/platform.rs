//! Operations of the smaller cluster-wide systems: switch migration,
//! resource checks, power actions, remote datastores and vCenter deployment.

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, KeyValue};

crate::soap_messages! {
    // ----- VsanVdsSystem -----

    /// Migrates vSAN traffic from standard switches to a distributed switch.
    VsanVssMigrateVds => VsanVssMigrateVdsResponse {
        cluster: ManagedObjectReference,
        vds_spec?: DynamicData,
        step: String,
        migration_plan?: DynamicData,
    } -> ManagedObjectReference;

    VsanVdsGetMigrationPlan => VsanVdsGetMigrationPlanResponse {
        cluster: ManagedObjectReference,
        vsw_name?: String,
        vds_name?: String,
        vmk_name?: Vec<String>,
    } -> DynamicData;

    VsanRollbackVdsToVss => VsanRollbackVdsToVssResponse {
        task: ManagedObjectReference,
    } -> ManagedObjectReference;

    // ----- VsanResourceCheckSystem -----

    /// Starts a what-if check for host or disk group evacuation.
    VsanPerformResourceCheck => VsanPerformResourceCheckResponse {
        resource_check_spec: DynamicData,
        cluster?: ManagedObjectReference,
    } -> ManagedObjectReference;

    VsanGetResourceCheckStatus => VsanGetResourceCheckStatusResponse {
        resource_check_spec?: DynamicData,
        cluster?: ManagedObjectReference,
    } -> DynamicData;

    // ----- VsanClusterPowerSystem -----

    PerformClusterPowerAction => PerformClusterPowerActionResponse {
        cluster: ManagedObjectReference,
        cluster_power_action: DynamicData,
    } -> ManagedObjectReference;

    // ----- VsanRemoteDatastoreSystem -----

    /// Datastores of other clusters that can be mounted remotely.
    QueryRemoteServerClusters => QueryRemoteServerClustersResponse {
        cluster: ManagedObjectReference,
    } -> Vec<DynamicData>;

    MountPrecheck => MountPrecheckResponse {
        cluster: ManagedObjectReference,
        datastore: ManagedObjectReference,
    } -> DynamicData;

    VsanRemoteDatastoreMount => VsanRemoteDatastoreMountResponse {
        cluster: ManagedObjectReference,
        datastore: ManagedObjectReference,
    } -> ManagedObjectReference;

    VsanRemoteDatastoreUnmount => VsanRemoteDatastoreUnmountResponse {
        cluster: ManagedObjectReference,
        datastore: ManagedObjectReference,
    } -> ManagedObjectReference;

    // ----- VsanVcsaDeployerSystem -----

    VsanPrepareVsanForVcsa => VsanPrepareVsanForVcsaResponse {
        spec: DynamicData,
    } -> String;

    VsanPostConfigForVcsa => VsanPostConfigForVcsaResponse {
        spec: DynamicData,
    } -> String;

    /// Progress of a deployment started by the two calls above.
    VsanVcsaGetBootstrapProgress => VsanVcsaGetBootstrapProgressResponse {
        task_id: Vec<String>,
    } -> Vec<DynamicData>;

    VsanVcsaQueryConfigOptions => VsanVcsaQueryConfigOptionsResponse {
        options?: Vec<KeyValue>,
    } -> Vec<KeyValue>;
}
