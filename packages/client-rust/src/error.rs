use vsan_core::{MethodFault, SoapFault};

/// Errors returned by operation stubs and transports.
///
/// Stubs never produce these themselves except [`SoapError::EmptyResponse`];
/// everything else comes from the transport and is forwarded unchanged.
#[derive(Debug, thiserror::Error)]
pub enum SoapError {
    #[error("transport error: {0}")]
    Transport(#[from] anyhow::Error),
    #[error("remote fault: {0}")]
    Fault(#[from] SoapFault),
    #[error("call cancelled")]
    Cancelled,
    #[error("call timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    #[error("failed to encode {operation} request: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{operation}: transport completed without a response")]
    EmptyResponse { operation: &'static str },
}

impl SoapError {
    /// The SOAP fault, if the transport surfaced one.
    #[must_use]
    pub fn soap_fault(&self) -> Option<&SoapFault> {
        match self {
            Self::Fault(fault) => Some(fault),
            _ => None,
        }
    }

    /// The typed fault kind, if the transport surfaced a known one.
    #[must_use]
    pub fn fault(&self) -> Option<&MethodFault> {
        self.soap_fault().and_then(SoapFault::method_fault)
    }
}

#[cfg(test)]
mod tests {
    use vsan_core::{FaultKind, ManagedObjectReference};

    use super::*;

    #[test]
    fn fault_accessor_exposes_method_fault() {
        let err = SoapError::from(SoapFault::server(
            "Permission to perform this operation was denied.",
            FaultKind::NoPermission {
                object: Some(ManagedObjectReference::cluster("domain-c7")),
                privilege_id: Some("Host.Inventory.EditCluster".to_string()),
            },
        ));
        assert!(matches!(
            err.fault().map(|f| &f.kind),
            Some(FaultKind::NoPermission { .. })
        ));
        assert_eq!(err.soap_fault().map(|f| f.code.as_str()), Some("ServerFaultCode"));
    }

    #[test]
    fn non_fault_errors_have_no_fault() {
        let err = SoapError::Transport(anyhow::anyhow!("connection reset by peer"));
        assert!(err.fault().is_none());
        assert_eq!(err.to_string(), "transport error: connection reset by peer");
    }

    #[test]
    fn timeout_display() {
        let err = SoapError::Timeout { timeout_ms: 250 };
        assert_eq!(err.to_string(), "call timed out after 250ms");
    }
}
