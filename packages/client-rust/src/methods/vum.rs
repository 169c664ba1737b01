//! Stubs of the update manager integration.

soap_methods! {
    managed_object: "VsanVumSystem";
    messages: upgrade;

    fetch_iso_depot_cookie => FetchIsoDepotCookie;
    get_vsan_vum_config => GetVsanVumConfig;
    vsan_vum_config_set => VsanVumConfigSet;
    vsan_vc_query_release_recommendation => VsanVcQueryReleaseRecommendation;
}
