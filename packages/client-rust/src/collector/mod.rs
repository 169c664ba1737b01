//! vSAN cluster metrics collector.
//!
//! For every cluster the collector reports capacity, overall health and the
//! performance samples of the configured entity types, tagging each point
//! with cluster identity and, through the CMMDS directory, host and device
//! names. Clusters are collected concurrently; a failing step is reported to
//! the accumulator and never stops the other steps or clusters.

use dashmap::DashMap;
use futures_util::future::join_all;
use vsan_core::{ApiVersion, DateTime, ManagedObjectReference};

use crate::config::CollectorConfig;
use crate::context::CallContext;
use crate::transport::RoundTripper;

pub mod accumulator;
pub mod cmmds;
pub mod error;
pub mod filter;
pub mod inventory;
mod queries;
pub mod tags;

pub use accumulator::{Accumulator, FieldValue, MemoryAccumulator, Point, Tags};
pub use cmmds::{CmmdsEntity, CmmdsMap};
pub use error::{CollectError, Step};
pub use filter::EntityFilter;
pub use inventory::{ClockSource, ClusterInventory, ClusterRef, HostRef, SystemClock};

/// Measurement of performance samples.
pub const PERFORMANCE_MEASUREMENT: &str = "vsphere_cluster_vsan_performance";
/// Measurement of the overall cluster health.
pub const HEALTH_MEASUREMENT: &str = "vsphere_cluster_vsan_health";
/// Measurement of cluster capacity.
pub const CAPACITY_MEASUREMENT: &str = "vsphere_cluster_vsan_capacity";

/// Whether an API version string is recent enough for vSAN (5.5 or later).
///
/// Unparseable versions are logged and treated as unsupported.
#[must_use]
pub fn version_supports_vsan(version: &str) -> bool {
    match version.parse::<ApiVersion>() {
        Ok(version) => version.supports_vsan(),
        Err(err) => {
            tracing::error!(version, error = %err, "failed to parse API version");
            false
        }
    }
}

/// Collects vSAN metrics from the clusters of one vCenter.
pub struct VsanCollector<R, I> {
    rt: R,
    inventory: I,
    config: CollectorConfig,
    filter: EntityFilter,
    clock: Box<dyn ClockSource>,
    /// Newest performance sample collected, per cluster.
    high_water_marks: DashMap<ManagedObjectReference, DateTime>,
}

impl<R, I> VsanCollector<R, I>
where
    R: RoundTripper,
    I: ClusterInventory,
{
    /// Creates a collector over a transport and an inventory.
    ///
    /// # Errors
    ///
    /// Returns the regex error if an include or exclude pattern does not
    /// compile.
    pub fn new(rt: R, inventory: I, config: CollectorConfig) -> Result<Self, regex::Error> {
        let filter = EntityFilter::new(&config.metric_include, &config.metric_exclude)?;
        Ok(Self {
            rt,
            inventory,
            config,
            filter,
            clock: Box::new(SystemClock),
            high_water_marks: DashMap::new(),
        })
    }

    /// Replaces the system clock.
    #[must_use]
    pub fn with_clock(mut self, clock: impl ClockSource + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &R {
        &self.rt
    }

    /// The newest performance sample time collected for `cluster`.
    #[must_use]
    pub fn high_water_mark(&self, cluster: &ClusterRef) -> Option<DateTime> {
        self.high_water_marks
            .get(&cluster.reference)
            .map(|mark| *mark)
    }

    /// Runs one collection over `clusters`.
    ///
    /// Does nothing if `api_version` predates vSAN. Otherwise discovers the
    /// performance entity types once and collects every cluster concurrently.
    pub async fn collect(
        &self,
        ctx: &CallContext,
        api_version: &str,
        clusters: &[ClusterRef],
        acc: &dyn Accumulator,
    ) {
        if !version_supports_vsan(api_version) {
            tracing::info!(
                api_version,
                vcenter = %self.config.vcenter,
                "minimum API version 5.5 required for vSAN, skipping"
            );
            return;
        }

        let entity_types = self.supported_entity_types(ctx).await;
        join_all(
            clusters
                .iter()
                .map(|cluster| self.collect_cluster(ctx, cluster, &entity_types, acc)),
        )
        .await;
    }

    /// Collects capacity, health and performance of one cluster.
    pub async fn collect_cluster(
        &self,
        ctx: &CallContext,
        cluster: &ClusterRef,
        entity_types: &[String],
        acc: &dyn Accumulator,
    ) {
        let cmmds = match self.cluster_cmmds(ctx, cluster).await {
            Ok(cmmds) => cmmds,
            Err(err) => {
                tracing::error!(cluster = %cluster.name, error = %err, "cmmds unavailable, skipping host tags");
                CmmdsMap::new()
            }
        };

        if let Err(err) = self.query_disk_usage(ctx, cluster, acc).await {
            acc.add_error(&err);
        }
        if let Err(err) = self.query_health_summary(ctx, cluster, acc).await {
            acc.add_error(&err);
        }
        if !entity_types.is_empty() {
            self.query_performance(ctx, cluster, entity_types, &cmmds, acc)
                .await;
        }
    }

    async fn cluster_cmmds(&self, ctx: &CallContext, cluster: &ClusterRef) -> Result<CmmdsMap, CollectError> {
        let hosts = self
            .inventory
            .hosts(cluster)
            .await
            .map_err(|source| CollectError::Inventory {
                cluster: cluster.name.clone(),
                source,
            })?;
        cmmds::cmmds_map(ctx, &self.rt, cluster, &hosts).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;
    use vsan_core::{FaultKind, SoapFault};

    use super::*;
    use crate::transport::{ScriptedOutcome, ScriptedRoundTripper};

    // 2019-05-10 09:00:00 UTC
    const NOW_MS: i64 = 1_557_478_800_000;

    struct FixedClock;

    impl ClockSource for FixedClock {
        fn now(&self) -> DateTime {
            DateTime::from_millis(NOW_MS)
        }
    }

    struct StaticInventory(Result<Vec<HostRef>, &'static str>);

    #[async_trait]
    impl ClusterInventory for StaticInventory {
        async fn hosts(&self, _cluster: &ClusterRef) -> anyhow::Result<Vec<HostRef>> {
            self.0.clone().map_err(|msg| anyhow::anyhow!(msg))
        }
    }

    fn one_host() -> StaticInventory {
        StaticInventory(Ok(vec![HostRef {
            name: "esx01.lab".to_string(),
            vsan_internal_system: Some(ManagedObjectReference::new(
                "HostVsanInternalSystem",
                "ha-vsan-internal-system-10",
            )),
        }]))
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn config() -> CollectorConfig {
        CollectorConfig {
            vcenter: "vc01.lab".to_string(),
            metric_exclude: vec!["cache-*".to_string()],
            ..CollectorConfig::default()
        }
    }

    fn cluster() -> ClusterRef {
        ClusterRef::new("cl01", "dc01", "domain-c7")
    }

    fn script_cluster_queries(rt: &ScriptedRoundTripper) {
        rt.set_fallback(
            "VsanPerfGetSupportedEntityTypes",
            ScriptedOutcome::Response(json!({"returnval": [
                {"name": "cluster-domclient"},
                {"name": "host-domclient"},
                {"name": "cache-disk"},
            ]})),
        );
        let cmmds = json!({"result": [
            {"uuid": "5c8a-host", "owner": "5c8a-host", "type": "HOSTNAME",
             "content": {"hostname": "esx01.lab"}},
        ]});
        rt.set_fallback(
            "QueryCmmds",
            ScriptedOutcome::Response(json!({"returnval": cmmds.to_string()})),
        );
        rt.set_fallback(
            "VsanQuerySpaceUsage",
            ScriptedOutcome::Response(json!({"returnval": {
                "totalCapacityB": 1000,
                "freeCapacityB": 400,
            }})),
        );
        rt.set_fallback(
            "VsanQueryVcClusterHealthSummary",
            ScriptedOutcome::Response(json!({"returnval": {"overallHealth": "yellow"}})),
        );
    }

    fn script_perf(rt: &ScriptedRoundTripper) {
        rt.push(
            "VsanPerfQueryPerf",
            ScriptedOutcome::Response(json!({"returnval": [{
                "entityRefId": "cluster-domclient:5c8a-cluster",
                "sampleInfo": "2019-05-10 08:50:00,2019-05-10 08:55:00",
                "value": [{"metricId": {"label": "iopsRead"}, "values": "10,20"}],
            }]})),
        );
        rt.push(
            "VsanPerfQueryPerf",
            ScriptedOutcome::Response(json!({"returnval": [
                {
                    "entityRefId": "host-domclient:5c8a-host",
                    "sampleInfo": "2019-05-10 08:55:00,2019-05-10 09:00:00",
                    "value": [{"metricId": {"label": "latencyAvgRead"}, "values": "1.5,n/a"}],
                },
                {
                    "entityRefId": "no-separator",
                    "sampleInfo": "2019-05-10 08:55:00",
                    "value": [{"metricId": {"label": "iopsRead"}, "values": "7"}],
                },
            ]})),
        );
    }

    #[test]
    fn version_gate() {
        assert!(!version_supports_vsan("4.1"));
        assert!(!version_supports_vsan("5.1"));
        assert!(version_supports_vsan("5.5"));
        assert!(version_supports_vsan("6.7.3"));
        assert!(version_supports_vsan("8.0.2.0"));
    }

    #[test]
    fn unparseable_version_is_unsupported() {
        assert!(!version_supports_vsan(""));
        assert!(!version_supports_vsan("seven"));
        assert!(!version_supports_vsan("7"));
    }

    #[tokio::test]
    async fn collects_capacity_health_and_performance() {
        init_tracing();
        let rt = ScriptedRoundTripper::new();
        script_cluster_queries(&rt);
        script_perf(&rt);
        let collector = VsanCollector::new(&rt, one_host(), config())
            .unwrap()
            .with_clock(FixedClock);
        let acc = MemoryAccumulator::new();

        collector
            .collect(&CallContext::new(), "7.0.3", &[cluster()], &acc)
            .await;

        assert!(acc.errors().is_empty(), "{:?}", acc.errors());

        let capacity = acc.measurement(CAPACITY_MEASUREMENT);
        assert_eq!(capacity.len(), 1);
        assert_eq!(capacity[0].fields["TotalCapacityB"], FieldValue::Int(1000));
        assert_eq!(capacity[0].fields["FreeCapacityB"], FieldValue::Int(400));
        assert_eq!(capacity[0].tags["clustername"], "cl01");
        assert_eq!(capacity[0].tags["dcname"], "dc01");
        assert_eq!(capacity[0].tags["moid"], "domain-c7");
        assert_eq!(capacity[0].tags["vcenter"], "vc01.lab");

        let health = acc.measurement(HEALTH_MEASUREMENT);
        assert_eq!(health.len(), 1);
        assert_eq!(health[0].fields["OverallHealth"], FieldValue::Int(1));

        let perf = acc.measurement(PERFORMANCE_MEASUREMENT);
        assert_eq!(perf.len(), 3);
        assert_eq!(perf[0].fields["cluster-domclient_iopsRead"], FieldValue::Float(10.0));
        assert_eq!(perf[0].tags["uuid"], "5c8a-cluster");
        assert_eq!(
            perf[1].timestamp,
            Some(DateTime::parse_sample_time("2019-05-10 08:55:00").unwrap())
        );
        assert_eq!(perf[2].fields["host-domclient_latencyAvgRead"], FieldValue::Float(1.5));
        assert_eq!(perf[2].tags["hostname"], "esx01.lab");

        assert_eq!(
            collector.high_water_mark(&cluster()),
            Some(DateTime::from_millis(NOW_MS))
        );
    }

    #[tokio::test]
    async fn performance_queries_cover_filtered_types_and_lookback() {
        let rt = ScriptedRoundTripper::new();
        script_cluster_queries(&rt);
        script_perf(&rt);
        let collector = VsanCollector::new(&rt, one_host(), config())
            .unwrap()
            .with_clock(FixedClock);
        let acc = MemoryAccumulator::new();

        collector
            .collect(&CallContext::new(), "6.7", &[cluster()], &acc)
            .await;

        let calls = rt.calls_to("VsanPerfQueryPerf");
        assert_eq!(calls.len(), 2);
        let specs: Vec<_> = calls
            .iter()
            .map(|call| call.request["querySpecs"][0]["entityRefId"].clone())
            .collect();
        assert_eq!(specs, [json!("cluster-domclient:*"), json!("host-domclient:*")]);
        assert_eq!(
            calls[0].request["querySpecs"][0]["startTime"],
            "2019-05-10T08:45:00.000Z"
        );
        assert_eq!(
            calls[0].request["querySpecs"][0]["endTime"],
            "2019-05-10T09:00:00.000Z"
        );
        assert_eq!(calls[0].request["cluster"]["value"], "domain-c7");
        assert_eq!(calls[0].this, vsan_core::well_known::perf_manager());

        let health = &rt.calls_to("VsanQueryVcClusterHealthSummary")[0].request;
        assert_eq!(health["fetchFromCache"], true);
        assert_eq!(health["fields"], json!(["overallHealth", "overallHealthDescription"]));

        let cmmds = &rt.calls_to("QueryCmmds")[0].request;
        assert_eq!(cmmds["queries"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn next_window_starts_at_high_water_mark() {
        let rt = ScriptedRoundTripper::new();
        script_cluster_queries(&rt);
        script_perf(&rt);
        rt.set_fallback("VsanPerfQueryPerf", ScriptedOutcome::Response(json!({"returnval": []})));
        let collector = VsanCollector::new(&rt, one_host(), config())
            .unwrap()
            .with_clock(FixedClock);
        let acc = MemoryAccumulator::new();
        let ctx = CallContext::new();

        collector.collect(&ctx, "7.0", &[cluster()], &acc).await;
        collector.collect(&ctx, "7.0", &[cluster()], &acc).await;

        let calls = rt.calls_to("VsanPerfQueryPerf");
        assert_eq!(calls.len(), 4);
        assert_eq!(
            calls[2].request["querySpecs"][0]["startTime"],
            "2019-05-10T09:00:00.000Z"
        );
        assert_eq!(
            collector.high_water_mark(&cluster()),
            Some(DateTime::from_millis(NOW_MS))
        );
    }

    #[tokio::test]
    async fn old_api_version_skips_collection() {
        let rt = ScriptedRoundTripper::new();
        script_cluster_queries(&rt);
        let collector = VsanCollector::new(&rt, one_host(), config()).unwrap();
        let acc = MemoryAccumulator::new();

        collector
            .collect(&CallContext::new(), "5.1", &[cluster()], &acc)
            .await;

        assert!(rt.calls().is_empty());
        assert!(acc.points().is_empty());
    }

    #[tokio::test]
    async fn failed_steps_are_reported_and_isolated() {
        init_tracing();
        let rt = ScriptedRoundTripper::new();
        script_cluster_queries(&rt);
        rt.set_fallback(
            "QueryCmmds",
            ScriptedOutcome::TransportError("connection reset".to_string()),
        );
        rt.set_fallback(
            "VsanQuerySpaceUsage",
            ScriptedOutcome::Fault(SoapFault::server("no permission", FaultKind::NoPermission {
                object: None,
                privilege_id: Some("System.Read".to_string()),
            })),
        );
        rt.set_fallback(
            "VsanQueryVcClusterHealthSummary",
            ScriptedOutcome::TransportError("timed out".to_string()),
        );
        rt.push(
            "VsanPerfQueryPerf",
            ScriptedOutcome::TransportError("performance service disabled".to_string()),
        );
        rt.push(
            "VsanPerfQueryPerf",
            ScriptedOutcome::Response(json!({"returnval": [{
                "entityRefId": "host-domclient:5c8a-host",
                "sampleInfo": "2019-05-10 08:55:00",
                "value": [{"metricId": {"label": "iopsRead"}, "values": "3"}],
            }]})),
        );
        let collector = VsanCollector::new(&rt, one_host(), config())
            .unwrap()
            .with_clock(FixedClock);
        let acc = MemoryAccumulator::new();

        collector
            .collect(&CallContext::new(), "7.0", &[cluster()], &acc)
            .await;

        let errors = acc.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("while querying vsan disk usage"), "{}", errors[0]);
        assert!(errors[1].starts_with("while querying vsan health summary"), "{}", errors[1]);

        let perf = acc.measurement(PERFORMANCE_MEASUREMENT);
        assert_eq!(perf.len(), 1);
        // Without CMMDS the host entity keeps only the cluster tags.
        assert!(!perf[0].tags.contains_key("hostname"));
        assert_eq!(
            collector.high_water_mark(&cluster()),
            Some(DateTime::parse_sample_time("2019-05-10 08:55:00").unwrap())
        );
    }

    #[tokio::test]
    async fn inventory_failure_still_collects_capacity() {
        init_tracing();
        let rt = ScriptedRoundTripper::new();
        script_cluster_queries(&rt);
        rt.set_fallback("VsanPerfQueryPerf", ScriptedOutcome::Response(json!({"returnval": []})));
        let collector = VsanCollector::new(&rt, StaticInventory(Err("inventory offline")), config())
            .unwrap()
            .with_clock(FixedClock);
        let acc = MemoryAccumulator::new();

        collector
            .collect(&CallContext::new(), "7.0", &[cluster()], &acc)
            .await;

        assert!(rt.calls_to("QueryCmmds").is_empty());
        assert_eq!(acc.measurement(CAPACITY_MEASUREMENT).len(), 1);
        assert_eq!(acc.measurement(HEALTH_MEASUREMENT).len(), 1);
    }

    #[tokio::test]
    async fn missing_entity_types_skip_performance() {
        let rt = ScriptedRoundTripper::new();
        script_cluster_queries(&rt);
        rt.set_fallback(
            "VsanPerfGetSupportedEntityTypes",
            ScriptedOutcome::TransportError("not found".to_string()),
        );
        let collector = VsanCollector::new(&rt, one_host(), config()).unwrap();
        let acc = MemoryAccumulator::new();

        collector
            .collect(&CallContext::new(), "7.0", &[cluster()], &acc)
            .await;

        assert!(rt.calls_to("VsanPerfQueryPerf").is_empty());
        assert_eq!(acc.measurement(CAPACITY_MEASUREMENT).len(), 1);
        assert!(collector.high_water_mark(&cluster()).is_none());
    }

    #[tokio::test]
    async fn clusters_are_tracked_independently() {
        let rt = ScriptedRoundTripper::new();
        script_cluster_queries(&rt);
        rt.set_fallback(
            "VsanPerfQueryPerf",
            ScriptedOutcome::Response(json!({"returnval": [{
                "entityRefId": "cluster-domclient:5c8a-cluster",
                "sampleInfo": "2019-05-10 08:55:00",
                "value": [{"metricId": {"label": "iopsRead"}, "values": "1"}],
            }]})),
        );
        let collector = VsanCollector::new(&rt, one_host(), config())
            .unwrap()
            .with_clock(FixedClock);
        let acc = MemoryAccumulator::new();
        let clusters = [cluster(), ClusterRef::new("cl02", "dc01", "domain-c8")];

        collector
            .collect(&CallContext::new(), "7.0", &clusters, &acc)
            .await;

        let mut names: Vec<_> = acc
            .measurement(CAPACITY_MEASUREMENT)
            .into_iter()
            .map(|p| p.tags["clustername"].clone())
            .collect();
        names.sort();
        assert_eq!(names, ["cl01", "cl02"]);
        assert!(collector.high_water_mark(&clusters[0]).is_some());
        assert!(collector.high_water_mark(&clusters[1]).is_some());
    }
}
