//! Tag derivation for collected points.

use super::accumulator::Tags;
use super::cmmds::CmmdsMap;
use super::inventory::ClusterRef;

/// Tags identifying the cluster a point belongs to.
#[must_use]
pub fn cluster_tags(cluster: &ClusterRef, vcenter: &str) -> Tags {
    let mut tags = Tags::new();
    tags.insert("vcenter".to_string(), vcenter.to_string());
    tags.insert("dcname".to_string(), cluster.datacenter.clone());
    tags.insert("clustername".to_string(), cluster.name.clone());
    tags.insert("moid".to_string(), cluster.reference.value.clone());
    tags.insert("source".to_string(), cluster.name.clone());
    tags
}

/// Extends `base` with tags describing one performance entity.
///
/// Disk, host, NIC and world entities are resolved through the CMMDS map to
/// host names and device details; any other entity is tagged with its UUID.
/// Compound ids (`<node>|<name>|...`) with missing parts contribute only the
/// parts that are present and non-empty.
#[must_use]
pub fn cmmds_tags(base: &Tags, entity_type: &str, uuid: &str, cmmds: &CmmdsMap) -> Tags {
    let mut tags = base.clone();
    let mut set = |key: &str, value: Option<&str>| {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            tags.insert(key.to_string(), value.to_string());
        }
    };
    let hostname_of = |node: &str| cmmds.get(node).and_then(|e| e.content_str("hostname"));

    if entity_type.contains("-disk") || entity_type.contains("disk-") {
        if let Some(disk) = cmmds.get(uuid) {
            set("hostname", hostname_of(&disk.owner));
            set("deviceName", disk.content_str("devName"));
            if disk.content_i64("isSsd") == Some(0) {
                set("ssdUuid", disk.content_str("ssdUuid"));
            }
        }
    } else if entity_type.contains("host-") {
        set("hostname", hostname_of(uuid));
    } else if entity_type.contains("vnic-net") {
        let mut parts = uuid.split('|');
        let node = parts.next();
        set("stackName", parts.next());
        set("vnic", parts.next());
        set("hostname", node.and_then(hostname_of));
    } else if entity_type.contains("pnic-net") {
        let mut parts = uuid.split('|');
        let node = parts.next();
        set("pnic", parts.next());
        set("hostname", node.and_then(hostname_of));
    } else if entity_type.contains("world-cpu") {
        let mut parts = uuid.split('|');
        let node = parts.next();
        set("worldName", parts.next());
        set("hostname", node.and_then(hostname_of));
    } else {
        set("uuid", Some(uuid));
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::cmmds::parse_cmmds;

    fn cmmds() -> CmmdsMap {
        parse_cmmds(
            r#"{"result": [
                {"uuid": "node-1", "owner": "node-1", "type": "HOSTNAME",
                 "content": {"hostname": "esx01.lab"}},
                {"uuid": "cache-1", "owner": "node-1", "type": "DISK",
                 "content": {"devName": "naa.cache", "isSsd": 1}},
                {"uuid": "cap-1", "owner": "node-1", "type": "DISK",
                 "content": {"devName": "naa.cap", "isSsd": 0, "ssdUuid": "cache-1"}}
            ]}"#,
        )
        .unwrap()
    }

    fn cluster() -> ClusterRef {
        ClusterRef::new("prod", "dc-east", "domain-c8")
    }

    #[test]
    fn cluster_tags_identify_cluster() {
        let tags = cluster_tags(&cluster(), "vc01.lab");
        assert_eq!(tags["vcenter"], "vc01.lab");
        assert_eq!(tags["dcname"], "dc-east");
        assert_eq!(tags["clustername"], "prod");
        assert_eq!(tags["moid"], "domain-c8");
        assert_eq!(tags["source"], "prod");
    }

    #[test]
    fn capacity_disk_gets_host_device_and_cache() {
        let tags = cmmds_tags(&Tags::new(), "capacity-disk", "cap-1", &cmmds());
        assert_eq!(tags["hostname"], "esx01.lab");
        assert_eq!(tags["deviceName"], "naa.cap");
        assert_eq!(tags["ssdUuid"], "cache-1");
        assert!(!tags.contains_key("uuid"));
    }

    #[test]
    fn cache_disk_has_no_ssd_uuid() {
        let tags = cmmds_tags(&Tags::new(), "cache-disk", "cache-1", &cmmds());
        assert_eq!(tags["deviceName"], "naa.cache");
        assert!(!tags.contains_key("ssdUuid"));
    }

    #[test]
    fn unknown_disk_adds_nothing() {
        let tags = cmmds_tags(&Tags::new(), "disk-group", "missing", &cmmds());
        assert!(tags.is_empty());
    }

    #[test]
    fn host_entity_gets_hostname() {
        let tags = cmmds_tags(&Tags::new(), "host-domclient", "node-1", &cmmds());
        assert_eq!(tags["hostname"], "esx01.lab");
    }

    #[test]
    fn nic_and_world_ids_are_split() {
        let vnic = cmmds_tags(&Tags::new(), "vsan-vnic-net", "node-1|defaultTcpipStack|vmk1", &cmmds());
        assert_eq!(vnic["stackName"], "defaultTcpipStack");
        assert_eq!(vnic["vnic"], "vmk1");
        assert_eq!(vnic["hostname"], "esx01.lab");

        let pnic = cmmds_tags(&Tags::new(), "vsan-pnic-net", "node-1|vmnic0", &cmmds());
        assert_eq!(pnic["pnic"], "vmnic0");

        let cpu = cmmds_tags(&Tags::new(), "world-cpu", "node-1|vsanTraceReader|1000", &cmmds());
        assert_eq!(cpu["worldName"], "vsanTraceReader");
        assert_eq!(cpu["hostname"], "esx01.lab");
    }

    #[test]
    fn malformed_compound_ids_do_not_panic() {
        let tags = cmmds_tags(&Tags::new(), "vsan-vnic-net", "node-1", &cmmds());
        assert_eq!(tags["hostname"], "esx01.lab");
        assert!(!tags.contains_key("vnic"));

        let tags = cmmds_tags(&Tags::new(), "world-cpu", "", &cmmds());
        assert!(tags.is_empty());
    }

    #[test]
    fn other_entities_keep_uuid_and_base_tags() {
        let base = cluster_tags(&cluster(), "vc01.lab");
        let tags = cmmds_tags(&base, "cluster-domclient", "52a1", &cmmds());
        assert_eq!(tags["uuid"], "52a1");
        assert_eq!(tags["clustername"], "prod");
    }
}
