//! One async stub per remote operation.
//!
//! Every stub is the same template ([`invoke`]): wrap the caller's request in
//! a fresh [`Envelope`], make exactly one round trip through the transport,
//! and hand back the response. Transport errors are returned unchanged and
//! the response is not looked at. Stubs are grouped by the managed object
//! type that serves them; each group also exports an `OPERATIONS` table.

use vsan_core::Method;

use crate::context::CallContext;
use crate::envelope::Envelope;
use crate::error::SoapError;
use crate::transport::RoundTripper;

/// Declares one stub function per operation plus the group's `OPERATIONS`
/// table.
///
/// ```text
/// soap_methods! {
///     managed_object: "VsanPerformanceManager";
///     messages: perf;
///     vsan_perf_query_perf => VsanPerfQueryPerf;
/// }
/// ```
///
/// `messages` names the `vsan_core::messages` submodule holding the request
/// types.
macro_rules! soap_methods {
    (
        managed_object: $mo:literal;
        messages: $msgs:ident;
        $( $(#[$meta:meta])* $fn_name:ident => $op:ident; )*
    ) => {
        $(
            #[doc = concat!("Invokes `", stringify!($op), "` on `", $mo, "`.")]
            $(#[$meta])*
            ///
            /// # Errors
            ///
            /// Returns the transport's error unchanged, or
            /// [`SoapError::EmptyResponse`](crate::SoapError::EmptyResponse) if the
            /// transport completed without installing a response.
            pub async fn $fn_name<R>(
                ctx: &$crate::CallContext,
                rt: &R,
                req: &::vsan_core::messages::$msgs::$op,
            ) -> Result<
                <::vsan_core::messages::$msgs::$op as ::vsan_core::Method>::Response,
                $crate::SoapError,
            >
            where
                R: $crate::RoundTripper + ?Sized,
            {
                $crate::methods::invoke(ctx, rt, req).await
            }
        )*

        /// Operations of this group, in declaration order.
        pub const OPERATIONS: &[$crate::methods::OperationInfo] = &[
            $(
                $crate::methods::OperationInfo {
                    name: <::vsan_core::messages::$msgs::$op as ::vsan_core::Method>::OPERATION,
                    function: stringify!($fn_name),
                    managed_object: $mo,
                },
            )*
        ];
    };
}

pub mod alarm;
pub mod alarm_manager;
pub mod authorization;
pub mod capability;
pub mod cluster;
pub mod cluster_config;
pub mod compute_resource;
pub mod custom_fields;
pub mod datacenter;
pub mod datastore;
pub mod datastore_browser;
pub mod datastore_namespace;
pub mod disk;
pub mod dv_portgroup;
pub mod dvs;
pub mod event_history_collector;
pub mod event_manager;
pub mod extension_manager;
pub mod file_manager;
pub mod file_service;
pub mod folder;
pub mod health;
pub mod history_collector;
pub mod host_datastore;
pub mod host_firewall;
pub mod host_health;
pub mod host_network;
pub mod host_service;
pub mod host_storage;
pub mod host_system;
pub mod host_vsan;
pub mod internal;
pub mod iscsi;
pub mod license;
pub mod license_assignment;
pub mod list_view;
pub mod managed_entity;
pub mod nfc_lease;
pub mod object;
pub mod option_manager;
pub mod ovf_manager;
pub mod perf;
pub mod power;
pub mod property_collector;
pub mod property_filter;
pub mod remote_datastore;
pub mod resource_check;
pub mod resource_pool;
pub mod search_index;
pub mod service_instance;
pub mod session;
pub mod snapshot;
pub mod space;
pub mod stretched;
pub mod system_ex;
pub mod task;
pub mod task_history_collector;
pub mod task_manager;
pub mod upgrade;
pub mod vcsa;
pub mod vds;
pub mod view;
pub mod view_manager;
pub mod vim_perf;
pub mod virtual_disk_manager;
pub mod virtual_machine;
pub mod virtual_nic_manager;
pub mod vsan_property_collector;
pub mod vsan_upgrade;
pub mod vstorage_object;
pub mod vum;

// ---------------------------------------------------------------------------
// invoke
// ---------------------------------------------------------------------------

/// Performs one call of operation `M`.
///
/// Builds an envelope borrowing `req`, calls the transport's round trip
/// exactly once, and returns the response the transport installed.
///
/// # Errors
///
/// Returns the transport's error unchanged. Returns
/// `SoapError::EmptyResponse` if the transport succeeded without installing a
/// response.
pub async fn invoke<M, R>(ctx: &CallContext, rt: &R, req: &M) -> Result<M::Response, SoapError>
where
    M: Method,
    R: RoundTripper + ?Sized,
{
    let mut envelope = Envelope::new(req);
    tracing::debug!(
        operation = M::OPERATION,
        call_id = ctx.call_id(),
        this = %req.this(),
        "invoking"
    );
    rt.round_trip(ctx, &mut envelope).await?;
    envelope.into_response().ok_or(SoapError::EmptyResponse {
        operation: M::OPERATION,
    })
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Catalog entry for one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationInfo {
    /// Remote operation name.
    pub name: &'static str,
    /// Name of the stub function in its group module.
    pub function: &'static str,
    /// Managed object type that serves the operation.
    pub managed_object: &'static str,
}

/// Every group's operation table.
const GROUPS: &[&[OperationInfo]] = &[
    // vSAN management API.
    perf::OPERATIONS,
    health::OPERATIONS,
    space::OPERATIONS,
    cluster_config::OPERATIONS,
    disk::OPERATIONS,
    object::OPERATIONS,
    stretched::OPERATIONS,
    vum::OPERATIONS,
    upgrade::OPERATIONS,
    capability::OPERATIONS,
    iscsi::OPERATIONS,
    file_service::OPERATIONS,
    vds::OPERATIONS,
    resource_check::OPERATIONS,
    power::OPERATIONS,
    remote_datastore::OPERATIONS,
    vcsa::OPERATIONS,
    system_ex::OPERATIONS,
    host_health::OPERATIONS,
    internal::OPERATIONS,
    vsan_property_collector::OPERATIONS,
    // vSphere API (`/sdk`).
    session::OPERATIONS,
    service_instance::OPERATIONS,
    property_collector::OPERATIONS,
    property_filter::OPERATIONS,
    view_manager::OPERATIONS,
    view::OPERATIONS,
    list_view::OPERATIONS,
    host_vsan::OPERATIONS,
    vsan_upgrade::OPERATIONS,
    managed_entity::OPERATIONS,
    folder::OPERATIONS,
    datacenter::OPERATIONS,
    compute_resource::OPERATIONS,
    cluster::OPERATIONS,
    resource_pool::OPERATIONS,
    host_system::OPERATIONS,
    datastore::OPERATIONS,
    datastore_browser::OPERATIONS,
    file_manager::OPERATIONS,
    datastore_namespace::OPERATIONS,
    virtual_machine::OPERATIONS,
    snapshot::OPERATIONS,
    task::OPERATIONS,
    task_manager::OPERATIONS,
    history_collector::OPERATIONS,
    task_history_collector::OPERATIONS,
    event_manager::OPERATIONS,
    event_history_collector::OPERATIONS,
    alarm_manager::OPERATIONS,
    alarm::OPERATIONS,
    vim_perf::OPERATIONS,
    host_storage::OPERATIONS,
    host_network::OPERATIONS,
    virtual_nic_manager::OPERATIONS,
    host_service::OPERATIONS,
    host_firewall::OPERATIONS,
    host_datastore::OPERATIONS,
    option_manager::OPERATIONS,
    dvs::OPERATIONS,
    dv_portgroup::OPERATIONS,
    search_index::OPERATIONS,
    authorization::OPERATIONS,
    license::OPERATIONS,
    license_assignment::OPERATIONS,
    extension_manager::OPERATIONS,
    custom_fields::OPERATIONS,
    virtual_disk_manager::OPERATIONS,
    vstorage_object::OPERATIONS,
    ovf_manager::OPERATIONS,
    nfc_lease::OPERATIONS,
];

/// All operations of all groups.
#[must_use]
pub fn catalog() -> Vec<&'static OperationInfo> {
    GROUPS.iter().flat_map(|group| group.iter()).collect()
}

/// Finds an operation by its remote name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static OperationInfo> {
    GROUPS
        .iter()
        .flat_map(|group| group.iter())
        .find(|info| info.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;
    use vsan_core::messages::perf::{VsanPerfQueryPerf, VsanPerfQueryPerfResponse};
    use vsan_core::messages::session::Login;
    use vsan_core::types::{VsanPerfEntityMetricCsv, VsanPerfQuerySpec};
    use vsan_core::{well_known, DateTime, FaultKind, SoapFault};

    use super::*;
    use crate::transport::{RoundTripBody, ScriptedOutcome, ScriptedRoundTripper};

    fn perf_request() -> VsanPerfQueryPerf {
        VsanPerfQueryPerf {
            this: well_known::perf_manager(),
            query_specs: vec![VsanPerfQuerySpec::all_entities(
                "cluster-domclient",
                DateTime::from_millis(0),
                DateTime::from_millis(300_000),
            )],
            cluster: None,
        }
    }

    /// Records the address of the request it was handed and answers with a
    /// typed response.
    #[derive(Default)]
    struct AddressTransport {
        seen: AtomicUsize,
    }

    #[async_trait]
    impl RoundTripper for AddressTransport {
        async fn round_trip(&self, _ctx: &CallContext, body: &mut dyn RoundTripBody) -> Result<(), SoapError> {
            let req = body
                .request::<VsanPerfQueryPerf>()
                .ok_or_else(|| SoapError::Transport(anyhow::anyhow!("unexpected request type")))?;
            self.seen.store(std::ptr::from_ref(req) as usize, Ordering::SeqCst);
            let installed = body.respond(VsanPerfQueryPerfResponse {
                returnval: vec![VsanPerfEntityMetricCsv {
                    entity_ref_id: "cluster-domclient:5c8a".to_string(),
                    ..VsanPerfEntityMetricCsv::default()
                }],
            });
            assert!(installed);
            Ok(())
        }
    }

    /// Installs a response and then fails anyway.
    struct FailAfterResponse;

    #[async_trait]
    impl RoundTripper for FailAfterResponse {
        async fn round_trip(&self, _ctx: &CallContext, body: &mut dyn RoundTripBody) -> Result<(), SoapError> {
            body.set_response_json(json!({"returnval": []}))?;
            Err(SoapError::Cancelled)
        }
    }

    #[tokio::test]
    async fn transport_sees_the_callers_request() {
        let rt = AddressTransport::default();
        let req = perf_request();

        let resp = perf::vsan_perf_query_perf(&CallContext::new(), &rt, &req)
            .await
            .unwrap();

        assert_eq!(rt.seen.load(Ordering::SeqCst), std::ptr::from_ref(&req) as usize);
        assert_eq!(resp.returnval[0].entity_ref_id, "cluster-domclient:5c8a");
    }

    #[tokio::test]
    async fn transport_error_is_returned_unchanged() {
        let result = perf::vsan_perf_query_perf(&CallContext::new(), &FailAfterResponse, &perf_request()).await;
        assert!(matches!(result, Err(SoapError::Cancelled)));

        let rt = ScriptedRoundTripper::new();
        let fault = SoapFault::server("bad spec", FaultKind::InvalidArgument {
            invalid_property: Some("querySpecs".to_string()),
        });
        rt.push("VsanPerfQueryPerf", ScriptedOutcome::Fault(fault.clone()));
        let err = perf::vsan_perf_query_perf(&CallContext::new(), &rt, &perf_request())
            .await
            .unwrap_err();
        assert_eq!(err.soap_fault(), Some(&fault));
    }

    #[tokio::test]
    async fn response_is_returned_even_with_fault() {
        let rt = ScriptedRoundTripper::new();
        rt.push(
            "VsanPerfQueryPerf",
            ScriptedOutcome::ResponseWithFault(
                json!({"returnval": [{"entityRefId": "host-domclient:5c8b"}]}),
                SoapFault::server("partial", FaultKind::HostCommunication),
            ),
        );

        let resp = perf::vsan_perf_query_perf(&CallContext::new(), &rt, &perf_request())
            .await
            .unwrap();
        assert_eq!(resp.returnval[0].entity_ref_id, "host-domclient:5c8b");
    }

    #[tokio::test]
    async fn each_call_is_one_round_trip() {
        let rt = ScriptedRoundTripper::new();
        rt.set_fallback("VsanPerfQueryPerf", ScriptedOutcome::Response(json!({"returnval": []})));
        let ctx = CallContext::new();
        let req = perf_request();

        perf::vsan_perf_query_perf(&ctx, &rt, &req).await.unwrap();
        perf::vsan_perf_query_perf(&ctx, &rt, &req).await.unwrap();

        let calls = rt.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|call| call.call_id == ctx.call_id()));
        assert_eq!(calls[0].this, well_known::perf_manager());
        assert_eq!(calls[0].request["_this"]["value"], "vsan-performance-manager");
        assert_eq!(calls[0].request["querySpecs"][0]["entityRefId"], "cluster-domclient:*");
        assert!(calls[0].request.get("cluster").is_none());
    }

    #[tokio::test]
    async fn missing_response_is_an_error() {
        let rt = ScriptedRoundTripper::new();
        rt.push("VsanPerfQueryPerf", ScriptedOutcome::Empty);

        let err = perf::vsan_perf_query_perf(&CallContext::new(), &rt, &perf_request())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SoapError::EmptyResponse {
                operation: "VsanPerfQueryPerf"
            }
        ));
    }

    #[tokio::test]
    async fn login_returns_user_session() {
        let rt = ScriptedRoundTripper::new();
        rt.push(
            "Login",
            ScriptedOutcome::Response(json!({"returnval": {
                "key": "52b5-session",
                "userName": "administrator@vsphere.local",
                "fullName": "Administrator",
                "loginTime": "2019-05-10T08:30:00Z",
            }})),
        );
        let req = Login {
            this: well_known::session_manager(),
            user_name: "administrator@vsphere.local".to_string(),
            password: "secret".to_string(),
            locale: None,
        };

        let session = session::login(&CallContext::new(), &rt, &req)
            .await
            .unwrap()
            .returnval;

        assert_eq!(session.key, "52b5-session");
        assert_eq!(session.full_name, "Administrator");
        let sent = &rt.calls_to("Login")[0].request;
        assert_eq!(sent["userName"], "administrator@vsphere.local");
        assert!(sent.get("locale").is_none());
    }

    #[tokio::test]
    async fn login_returns_the_network_error() {
        let rt = ScriptedRoundTripper::new();
        rt.push(
            "Login",
            ScriptedOutcome::TransportError("connection refused".to_string()),
        );
        let req = Login {
            this: well_known::session_manager(),
            user_name: "root".to_string(),
            password: "secret".to_string(),
            locale: Some("en_US".to_string()),
        };

        let err = session::login(&CallContext::new(), &rt, &req)
            .await
            .unwrap_err();

        assert!(matches!(&err, SoapError::Transport(source) if source.to_string() == "connection refused"));
        assert_eq!(rt.calls_to("Login")[0].request["locale"], "en_US");
    }

    #[test]
    fn operation_names_are_unique() {
        let all = catalog();
        let names: HashSet<_> = all.iter().map(|info| info.name).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn function_names_are_unique_snake_case() {
        let all = catalog();
        let functions: HashSet<_> = all.iter().map(|info| info.function).collect();
        assert_eq!(functions.len(), all.len());
        for info in all {
            assert!(
                info.function
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'),
                "{} is not snake_case",
                info.function
            );
        }
    }

    #[test]
    fn lookup_finds_collector_operations() {
        let perf = lookup("VsanPerfQueryPerf").unwrap();
        assert_eq!(perf.function, "vsan_perf_query_perf");
        assert_eq!(perf.managed_object, "VsanPerformanceManager");

        let cmmds = lookup("QueryCmmds").unwrap();
        assert_eq!(cmmds.managed_object, "HostVsanInternalSystem");

        assert!(lookup("NoSuchOperation").is_none());
    }

    #[test]
    fn every_group_is_populated() {
        assert!(GROUPS.iter().all(|group| !group.is_empty()));
        assert_eq!(catalog().len(), 598);
    }

    #[test]
    fn lookup_covers_vsan_and_vsphere_objects() {
        for (name, managed_object) in [
            ("VsanQuerySyncingVsanObjects", "VsanObjectSystem"),
            ("VsanHostRunVmdkLoadTest", "HostVsanHealthSystem"),
            ("VsanQueryVcClusterVmdkLoadHistoryTest", "VsanVcClusterHealthSystem"),
            ("VsanGetAboutInfoEx", "VsanSystemEx"),
            ("VsanHostGetProactiveRebalanceInfo", "HostVsanHealthSystem"),
            ("VsanRetrieveProperties", "PropertyCollector"),
            ("RetrievePropertiesEx", "PropertyCollector"),
            ("EnterMaintenanceMode_Task", "HostSystem"),
            ("QueryDisksForVsan", "HostVsanSystem"),
        ] {
            let info = lookup(name).unwrap_or_else(|| panic!("{name} is not bound"));
            assert_eq!(info.managed_object, managed_object, "{name}");
        }
    }

    #[test]
    fn task_operations_keep_their_wire_suffix() {
        let delete = lookup("VsanDeleteObjects_Task").unwrap();
        assert_eq!(delete.function, "vsan_delete_objects_task");
        assert!(lookup("VsanDeleteObjects").is_none());
        assert_eq!(lookup("PowerOnVM_Task").unwrap().function, "power_on_vm_task");
    }
}
