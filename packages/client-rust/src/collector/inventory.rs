//! What the collector needs to know about the vCenter inventory.

use async_trait::async_trait;
use vsan_core::{DateTime, ManagedObjectReference};

/// A cluster to collect from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClusterRef {
    /// Display name of the cluster.
    pub name: String,
    /// Name of the datacenter holding the cluster.
    pub datacenter: String,
    /// The `ClusterComputeResource` reference.
    pub reference: ManagedObjectReference,
}

impl ClusterRef {
    #[must_use]
    pub fn new(name: impl Into<String>, datacenter: impl Into<String>, moid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            datacenter: datacenter.into(),
            reference: ManagedObjectReference::cluster(moid),
        }
    }
}

/// A member host of a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRef {
    pub name: String,
    /// The host's `HostVsanInternalSystem`, if its config manager exposes one.
    pub vsan_internal_system: Option<ManagedObjectReference>,
}

/// Inventory lookups the collector depends on.
#[async_trait]
pub trait ClusterInventory: Send + Sync {
    /// Member hosts of `cluster`, in inventory order.
    async fn hosts(&self, cluster: &ClusterRef) -> anyhow::Result<Vec<HostRef>>;
}

/// Wall-clock source, injectable for deterministic collection windows.
pub trait ClockSource: Send + Sync {
    fn now(&self) -> DateTime;
}

/// Clock that reads the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime {
        DateTime::now()
    }
}
