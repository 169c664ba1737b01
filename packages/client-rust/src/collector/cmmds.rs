//! CMMDS directory lookups.
//!
//! The cluster directory maps node and disk UUIDs to their descriptions. One
//! host's answer covers the whole cluster, so hosts are tried in order until
//! one responds.

use std::collections::HashMap;

use serde::Deserialize;
use vsan_core::messages::internal::QueryCmmds;
use vsan_core::types::HostVsanInternalSystemCmmdsQuery;

use super::error::CollectError;
use super::inventory::{ClusterRef, HostRef};
use crate::context::CallContext;
use crate::methods::internal::query_cmmds;
use crate::transport::RoundTripper;

/// One CMMDS directory entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CmmdsEntity {
    pub uuid: String,
    /// UUID of the owning node.
    pub owner: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Type-specific content; an object for `HOSTNAME` and `DISK` entries.
    pub content: serde_json::Value,
}

impl CmmdsEntity {
    /// A string property of the content object.
    #[must_use]
    pub fn content_str(&self, key: &str) -> Option<&str> {
        self.content.get(key)?.as_str()
    }

    /// An integral property of the content object; JSON floats are truncated.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn content_i64(&self, key: &str) -> Option<i64> {
        let value = self.content.get(key)?;
        value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
    }
}

/// Directory entries keyed by UUID.
pub type CmmdsMap = HashMap<String, CmmdsEntity>;

#[derive(Deserialize)]
struct CmmdsDump {
    #[serde(default)]
    result: Vec<CmmdsEntity>,
}

/// The queries sent to each host: node names and disks.
#[must_use]
pub fn cmmds_queries() -> Vec<HostVsanInternalSystemCmmdsQuery> {
    vec![
        HostVsanInternalSystemCmmdsQuery::of_type("HOSTNAME"),
        HostVsanInternalSystemCmmdsQuery::of_type("DISK"),
    ]
}

/// Parses a CMMDS dump (`{"result": [...]}`). Later duplicates win.
///
/// # Errors
///
/// Returns `CollectError::InvalidCmmds` if `json` is not a CMMDS dump.
pub fn parse_cmmds(json: &str) -> Result<CmmdsMap, CollectError> {
    let dump: CmmdsDump = serde_json::from_str(json).map_err(CollectError::InvalidCmmds)?;
    Ok(dump
        .result
        .into_iter()
        .map(|entity| (entity.uuid.clone(), entity))
        .collect())
}

/// Fetches the CMMDS map of `cluster`, asking each host in turn.
///
/// A cluster without hosts yields an empty map.
///
/// # Errors
///
/// Returns `CollectError::NoHostResponded` if every host failed, or
/// `CollectError::InvalidCmmds` if the answer does not parse.
pub async fn cmmds_map<R>(
    ctx: &CallContext,
    rt: &R,
    cluster: &ClusterRef,
    hosts: &[HostRef],
) -> Result<CmmdsMap, CollectError>
where
    R: RoundTripper + ?Sized,
{
    if hosts.is_empty() {
        tracing::info!(cluster = %cluster.name, "no host in cluster");
        return Ok(CmmdsMap::new());
    }

    let queries = cmmds_queries();
    for host in hosts {
        let Some(internal_system) = &host.vsan_internal_system else {
            tracing::info!(host = %host.name, "host exposes no vSAN internal system");
            continue;
        };
        let req = QueryCmmds {
            this: internal_system.clone(),
            queries: queries.clone(),
        };
        match query_cmmds(&ctx.child(), rt, &req).await {
            Ok(resp) => {
                tracing::info!(host = %host.name, "fetched cmmds");
                return parse_cmmds(&resp.returnval);
            }
            Err(err) => {
                tracing::info!(host = %host.name, error = %err, "cmmds query failed");
            }
        }
    }

    Err(CollectError::NoHostResponded {
        cluster: cluster.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vsan_core::ManagedObjectReference;

    use super::*;
    use crate::transport::{ScriptedOutcome, ScriptedRoundTripper};

    fn cluster() -> ClusterRef {
        ClusterRef::new("cl01", "dc01", "domain-c7")
    }

    fn host(name: &str, internal_system: Option<&str>) -> HostRef {
        HostRef {
            name: name.to_string(),
            vsan_internal_system: internal_system
                .map(|moid| ManagedObjectReference::new("HostVsanInternalSystem", moid)),
        }
    }

    fn dump() -> ScriptedOutcome {
        ScriptedOutcome::Response(json!({
            "returnval": r#"{"result": [{"uuid": "5c8a-host", "owner": "5c8a-host",
                "type": "HOSTNAME", "content": {"hostname": "esx02.lab"}}]}"#,
        }))
    }

    fn targets(rt: &ScriptedRoundTripper) -> Vec<String> {
        rt.calls_to("QueryCmmds")
            .into_iter()
            .map(|call| call.this.value)
            .collect()
    }

    #[tokio::test]
    async fn falls_back_to_the_next_host_and_stops_at_the_first_answer() {
        let rt = ScriptedRoundTripper::new();
        rt.push("QueryCmmds", ScriptedOutcome::TransportError("connection refused".to_string()));
        rt.push("QueryCmmds", dump());
        rt.push("QueryCmmds", ScriptedOutcome::TransportError("not expected".to_string()));
        let hosts = [
            host("esx01.lab", Some("ha-vsan-internal-system-10")),
            host("esx02.lab", Some("ha-vsan-internal-system-11")),
            host("esx03.lab", Some("ha-vsan-internal-system-12")),
        ];

        let map = cmmds_map(&CallContext::new(), &rt, &cluster(), &hosts).await.unwrap();

        assert_eq!(map["5c8a-host"].content_str("hostname"), Some("esx02.lab"));
        assert_eq!(
            targets(&rt),
            ["ha-vsan-internal-system-10", "ha-vsan-internal-system-11"]
        );
        let request = &rt.calls_to("QueryCmmds")[1].request;
        assert_eq!(request["queries"][0]["type"], "HOSTNAME");
        assert_eq!(request["queries"][1]["type"], "DISK");
    }

    #[tokio::test]
    async fn hosts_without_an_internal_system_are_skipped() {
        let rt = ScriptedRoundTripper::new();
        rt.push("QueryCmmds", dump());
        let hosts = [
            host("witness.lab", None),
            host("esx02.lab", Some("ha-vsan-internal-system-11")),
        ];

        let map = cmmds_map(&CallContext::new(), &rt, &cluster(), &hosts).await.unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(targets(&rt), ["ha-vsan-internal-system-11"]);
    }

    #[tokio::test]
    async fn no_hosts_means_an_empty_map_and_no_query() {
        let rt = ScriptedRoundTripper::new();

        let map = cmmds_map(&CallContext::new(), &rt, &cluster(), &[]).await.unwrap();

        assert!(map.is_empty());
        assert!(rt.calls().is_empty());
    }

    #[tokio::test]
    async fn every_host_failing_is_an_error() {
        let rt = ScriptedRoundTripper::new();
        rt.set_fallback("QueryCmmds", ScriptedOutcome::TransportError("timed out".to_string()));
        let hosts = [
            host("esx01.lab", Some("ha-vsan-internal-system-10")),
            host("witness.lab", None),
            host("esx02.lab", Some("ha-vsan-internal-system-11")),
        ];

        let err = cmmds_map(&CallContext::new(), &rt, &cluster(), &hosts)
            .await
            .unwrap_err();

        assert!(matches!(err, CollectError::NoHostResponded { ref cluster } if cluster == "cl01"));
        assert_eq!(rt.calls_to("QueryCmmds").len(), 2);
    }

    #[tokio::test]
    async fn unparseable_answer_is_not_retried_on_other_hosts() {
        let rt = ScriptedRoundTripper::new();
        rt.set_fallback("QueryCmmds", ScriptedOutcome::Response(json!({"returnval": "garbage"})));
        let hosts = [
            host("esx01.lab", Some("ha-vsan-internal-system-10")),
            host("esx02.lab", Some("ha-vsan-internal-system-11")),
        ];

        let err = cmmds_map(&CallContext::new(), &rt, &cluster(), &hosts)
            .await
            .unwrap_err();

        assert!(matches!(err, CollectError::InvalidCmmds(_)));
        assert_eq!(targets(&rt), ["ha-vsan-internal-system-10"]);
    }

    #[test]
    fn parses_dump_by_uuid() {
        let map = parse_cmmds(
            r#"{"result": [
                {"uuid": "5c8a-host", "owner": "5c8a-host", "type": "HOSTNAME",
                 "content": {"hostname": "esx01.lab"}},
                {"uuid": "52e5-disk", "owner": "5c8a-host", "type": "DISK",
                 "content": {"devName": "naa.500a07", "isSsd": 1.0}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["5c8a-host"].content_str("hostname"), Some("esx01.lab"));
        assert_eq!(map["52e5-disk"].entry_type, "DISK");
        assert_eq!(map["52e5-disk"].content_i64("isSsd"), Some(1));
    }

    #[test]
    fn missing_result_is_empty() {
        assert!(parse_cmmds("{}").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(matches!(parse_cmmds("not json"), Err(CollectError::InvalidCmmds(_))));
        assert!(matches!(
            parse_cmmds(r#"{"result": 5}"#),
            Err(CollectError::InvalidCmmds(_))
        ));
    }

    #[test]
    fn content_accessors_tolerate_non_objects() {
        let entity = CmmdsEntity {
            content: serde_json::Value::String("opaque".to_string()),
            ..CmmdsEntity::default()
        };
        assert_eq!(entity.content_str("hostname"), None);
        assert_eq!(entity.content_i64("isSsd"), None);
    }

    #[test]
    fn queries_cover_hostnames_and_disks() {
        let types: Vec<_> = cmmds_queries()
            .into_iter()
            .filter_map(|q| q.entry_type)
            .collect();
        assert_eq!(types, ["HOSTNAME", "DISK"]);
    }
}
