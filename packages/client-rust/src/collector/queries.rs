//! The individual collection queries.

use vsan_core::messages::health::VsanQueryVcClusterHealthSummary;
use vsan_core::messages::perf::{VsanPerfGetSupportedEntityTypes, VsanPerfQueryPerf};
use vsan_core::messages::space::VsanQuerySpaceUsage;
use vsan_core::types::VsanPerfQuerySpec;
use vsan_core::{well_known, DateTime};

use super::accumulator::{Accumulator, FieldValue, Point};
use super::cmmds::CmmdsMap;
use super::error::{CollectError, Step};
use super::inventory::{ClusterInventory, ClusterRef};
use super::tags::{cluster_tags, cmmds_tags};
use super::{VsanCollector, CAPACITY_MEASUREMENT, HEALTH_MEASUREMENT, PERFORMANCE_MEASUREMENT};
use crate::context::CallContext;
use crate::methods::health::vsan_query_vc_cluster_health_summary;
use crate::methods::perf::{vsan_perf_get_supported_entity_types, vsan_perf_query_perf};
use crate::methods::space::vsan_query_space_usage;
use crate::transport::RoundTripper;

impl<R, I> VsanCollector<R, I>
where
    R: RoundTripper,
    I: ClusterInventory,
{
    /// Performance entity types the service supports and the filter admits.
    ///
    /// A failed query is logged and yields no types, which skips performance
    /// collection.
    pub async fn supported_entity_types(&self, ctx: &CallContext) -> Vec<String> {
        let req = VsanPerfGetSupportedEntityTypes {
            this: well_known::perf_manager(),
        };
        match vsan_perf_get_supported_entity_types(&ctx.child(), &self.rt, &req).await {
            Ok(resp) => {
                let types: Vec<String> = resp
                    .returnval
                    .into_iter()
                    .map(|entity_type| entity_type.name)
                    .filter(|name| self.filter.matches(name))
                    .collect();
                tracing::debug!(?types, "vsan performance entity types");
                types
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to get supported entity types, skipping vsan performance data");
                Vec::new()
            }
        }
    }

    /// Reports total and free capacity of `cluster`.
    ///
    /// # Errors
    ///
    /// Returns `CollectError::Soap` if the space query fails.
    pub async fn query_disk_usage(
        &self,
        ctx: &CallContext,
        cluster: &ClusterRef,
        acc: &dyn Accumulator,
    ) -> Result<(), CollectError> {
        let req = VsanQuerySpaceUsage {
            this: well_known::space_report_system(),
            cluster: cluster.reference.clone(),
            ..VsanQuerySpaceUsage::default()
        };
        let usage = vsan_query_space_usage(&ctx.child(), &self.rt, &req)
            .await
            .map_err(CollectError::soap(Step::DiskUsage))?
            .returnval;

        let mut point = Point::new(CAPACITY_MEASUREMENT, cluster_tags(cluster, &self.config.vcenter))
            .field("TotalCapacityB", FieldValue::Int(usage.total_capacity_b));
        if let Some(free) = usage.free_capacity_b {
            point = point.field("FreeCapacityB", FieldValue::Int(free));
        }
        acc.add_point(point);
        Ok(())
    }

    /// Reports the overall health of `cluster` as a severity code
    /// (red 2, yellow 1, green 0, anything else -1).
    ///
    /// # Errors
    ///
    /// Returns `CollectError::Soap` if the health query fails.
    pub async fn query_health_summary(
        &self,
        ctx: &CallContext,
        cluster: &ClusterRef,
        acc: &dyn Accumulator,
    ) -> Result<(), CollectError> {
        let req = VsanQueryVcClusterHealthSummary {
            this: well_known::cluster_health_system(),
            cluster: Some(cluster.reference.clone()),
            fields: Some(self.config.health_fields.clone()),
            fetch_from_cache: Some(self.config.fetch_from_cache),
            ..VsanQueryVcClusterHealthSummary::default()
        };
        let summary = vsan_query_vc_cluster_health_summary(&ctx.child(), &self.rt, &req)
            .await
            .map_err(CollectError::soap(Step::HealthSummary))?
            .returnval;

        acc.add_point(
            Point::new(HEALTH_MEASUREMENT, cluster_tags(cluster, &self.config.vcenter))
                .field("OverallHealth", FieldValue::Int(summary.status().severity())),
        );
        Ok(())
    }

    /// Reports performance samples of `cluster` for each entity type and
    /// returns the number of points added.
    ///
    /// The window starts at the cluster's high-water mark, or one lookback
    /// before now on the first run, and ends now. A failed entity query is
    /// logged and skipped. The high-water mark then moves to the newest
    /// sample seen.
    pub async fn query_performance(
        &self,
        ctx: &CallContext,
        cluster: &ClusterRef,
        entity_types: &[String],
        cmmds: &CmmdsMap,
        acc: &dyn Accumulator,
    ) -> usize {
        let end = self.clock.now();
        let start = self
            .high_water_mark(cluster)
            .unwrap_or_else(|| end.minus_seconds(self.config.lookback_secs()));
        tracing::debug!(cluster = %cluster.name, %start, %end, "querying vsan performance");

        let base_tags = cluster_tags(cluster, &self.config.vcenter);
        let mut latest = start;
        let mut points = 0;

        for entity_type in entity_types {
            let req = VsanPerfQueryPerf {
                this: well_known::perf_manager(),
                query_specs: vec![VsanPerfQuerySpec::all_entities(entity_type, start, end)],
                cluster: Some(cluster.reference.clone()),
            };
            let metrics = match vsan_perf_query_perf(&ctx.child(), &self.rt, &req).await {
                Ok(resp) => resp.returnval,
                Err(err) => {
                    tracing::error!(
                        cluster = %cluster.name,
                        entity_type = %entity_type,
                        error = %err,
                        "failed to query performance data, is the performance service enabled?"
                    );
                    continue;
                }
            };

            let mut series_count = 0;
            for metric in &metrics {
                let Some((entity, uuid)) = metric.entity() else {
                    tracing::warn!(entity_ref_id = %metric.entity_ref_id, "malformed entity id, skipping");
                    continue;
                };
                let tags = cmmds_tags(&base_tags, entity, uuid, cmmds);
                let timestamps: Vec<Option<DateTime>> = metric
                    .sample_info
                    .split(',')
                    .map(|sample| DateTime::parse_sample_time(sample).ok())
                    .collect();

                for series in &metric.value {
                    series_count += 1;
                    let field = format!("{entity}_{}", series.metric_id.label);
                    for (i, raw) in series.samples().enumerate() {
                        let Some(Some(timestamp)) = timestamps.get(i) else {
                            tracing::debug!(entity_ref_id = %metric.entity_ref_id, index = i, "sample without timestamp, skipping");
                            continue;
                        };
                        let Ok(value) = raw.trim().parse::<f64>() else {
                            continue;
                        };
                        acc.add_point(
                            Point::new(PERFORMANCE_MEASUREMENT, tags.clone())
                                .field(field.clone(), FieldValue::Float(value))
                                .at(*timestamp),
                        );
                        points += 1;
                    }
                }

                if let Some(newest) = timestamps.iter().flatten().max() {
                    latest = latest.max(*newest);
                }
            }
            tracing::info!(
                cluster = %cluster.name,
                entity_type = %entity_type,
                series = series_count,
                "fetched vsan performance data"
            );
        }

        self.high_water_marks
            .insert(cluster.reference.clone(), latest);
        points
    }
}
