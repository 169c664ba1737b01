//! Stubs of the switch migration system.

soap_methods! {
    managed_object: "VsanVdsSystem";
    messages: platform;

    vsan_vss_migrate_vds => VsanVssMigrateVds;
    vsan_vds_get_migration_plan => VsanVdsGetMigrationPlan;
    vsan_rollback_vds_to_vss => VsanRollbackVdsToVss;
}
