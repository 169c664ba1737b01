use std::fmt;

use crate::error::SoapError;

/// A collection step, used to label errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Cmmds,
    DiskUsage,
    HealthSummary,
    Performance,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cmmds => "querying cmmds",
            Self::DiskUsage => "querying vsan disk usage",
            Self::HealthSummary => "querying vsan health summary",
            Self::Performance => "querying vsan perf data",
        })
    }
}

/// Errors from collecting one cluster.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("no host of cluster {cluster} answered the CMMDS query")]
    NoHostResponded { cluster: String },
    #[error("invalid CMMDS payload: {0}")]
    InvalidCmmds(#[source] serde_json::Error),
    #[error("listing hosts of cluster {cluster}: {source}")]
    Inventory {
        cluster: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("while {step}: {source}")]
    Soap {
        step: Step,
        #[source]
        source: SoapError,
    },
}

impl CollectError {
    pub(crate) fn soap(step: Step) -> impl FnOnce(SoapError) -> Self {
        move |source| Self::Soap { step, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soap_errors_are_prefixed_with_step() {
        let err = CollectError::soap(Step::DiskUsage)(SoapError::Cancelled);
        assert_eq!(err.to_string(), "while querying vsan disk usage: call cancelled");
    }
}
