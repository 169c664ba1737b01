//! Application-level faults carried inside SOAP responses.
//!
//! A fault arrives as a SOAP `Fault` element whose `detail` holds one typed
//! fault object. Known fault kinds decode into [`MethodFault`]; anything else
//! is preserved as [`DynamicData`] so no information is lost.

use serde::{Deserialize, Serialize};

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, LocalizableMessage};

/// A known fault: its kind plus the properties every fault inherits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodFault {
    #[serde(flatten)]
    pub kind: FaultKind,
    /// Localized explanations attached by the server.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fault_message: Vec<LocalizableMessage>,
    /// The fault that caused this one, if the server chained them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_cause: Option<Box<FaultDetail>>,
}

impl From<FaultKind> for MethodFault {
    fn from(kind: FaultKind) -> Self {
        Self {
            kind,
            fault_message: Vec::new(),
            fault_cause: None,
        }
    }
}

/// Known fault kinds, discriminated by `_typeName`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_typeName")]
pub enum FaultKind {
    /// The session is not authenticated.
    #[serde(rename_all = "camelCase")]
    NotAuthenticated {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        object: Option<ManagedObjectReference>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        privilege_id: Option<String>,
    },
    /// The authenticated user lacks a privilege on an object.
    #[serde(rename_all = "camelCase")]
    NoPermission {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        object: Option<ManagedObjectReference>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        privilege_id: Option<String>,
    },
    /// Credentials were rejected.
    InvalidLogin,
    /// An argument was out of range or malformed.
    #[serde(rename_all = "camelCase")]
    InvalidArgument {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        invalid_property: Option<String>,
    },
    /// The target object is in a state that does not allow the operation.
    InvalidState,
    /// The request itself was malformed.
    InvalidRequest,
    /// The referenced managed object no longer exists.
    ManagedObjectNotFound {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        obj: Option<ManagedObjectReference>,
    },
    /// A referenced entity was not found.
    NotFound,
    /// The operation is not supported by the target.
    NotSupported,
    /// The operation is not implemented by the target.
    NotImplemented,
    /// The request was cancelled on the server.
    RequestCanceled,
    /// The server gave up waiting on a dependency.
    Timedout,
    /// Unspecified server-side runtime failure.
    RuntimeFault,
    /// Internal server error with a reason string.
    SystemError {
        #[serde(default)]
        reason: String,
    },
    /// A security check failed.
    SecurityError,
    /// The server could not reach a host.
    HostCommunication,
    /// Generic vSAN fault.
    VsanFault,
    /// Generic vSphere fault.
    VimFault,
}

impl FaultKind {
    /// The wire `_typeName` of this kind.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::NotAuthenticated { .. } => "NotAuthenticated",
            Self::NoPermission { .. } => "NoPermission",
            Self::InvalidLogin => "InvalidLogin",
            Self::InvalidArgument { .. } => "InvalidArgument",
            Self::InvalidState => "InvalidState",
            Self::InvalidRequest => "InvalidRequest",
            Self::ManagedObjectNotFound { .. } => "ManagedObjectNotFound",
            Self::NotFound => "NotFound",
            Self::NotSupported => "NotSupported",
            Self::NotImplemented => "NotImplemented",
            Self::RequestCanceled => "RequestCanceled",
            Self::Timedout => "Timedout",
            Self::RuntimeFault => "RuntimeFault",
            Self::SystemError { .. } => "SystemError",
            Self::SecurityError => "SecurityError",
            Self::HostCommunication => "HostCommunication",
            Self::VsanFault => "VsanFault",
            Self::VimFault => "VimFault",
        }
    }

    /// Whether the fault means the session must be re-established.
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::NotAuthenticated { .. } | Self::InvalidLogin)
    }
}

impl MethodFault {
    /// The wire `_typeName` of this fault.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Whether the fault means the session must be re-established.
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        self.kind.is_authentication()
    }

    /// Attaches a localized message.
    #[must_use]
    pub fn with_message(mut self, message: LocalizableMessage) -> Self {
        self.fault_message.push(message);
        self
    }
}

/// Typed fault detail: a known [`MethodFault`] or an opaque data object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FaultDetail {
    Known(MethodFault),
    Unknown(DynamicData),
}

impl FaultDetail {
    /// The `_typeName` of the carried fault object.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Known(fault) => fault.type_name(),
            Self::Unknown(data) => &data.type_name,
        }
    }
}

/// A SOAP fault: fault code, human-readable reason and optional typed detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {reason}")]
#[serde(rename_all = "camelCase")]
pub struct SoapFault {
    /// SOAP fault code (e.g. `ServerFaultCode`).
    pub code: String,
    /// Human-readable fault string.
    pub reason: String,
    /// Localized messages attached by the server.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<LocalizableMessage>,
    /// Typed fault object from the SOAP `detail` element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<FaultDetail>,
}

impl SoapFault {
    /// Builds a server fault carrying a known fault.
    #[must_use]
    pub fn server(reason: impl Into<String>, fault: impl Into<MethodFault>) -> Self {
        Self {
            code: "ServerFaultCode".to_string(),
            reason: reason.into(),
            messages: Vec::new(),
            detail: Some(FaultDetail::Known(fault.into())),
        }
    }

    /// The known fault kind, if the detail decoded into one.
    #[must_use]
    pub fn method_fault(&self) -> Option<&MethodFault> {
        match &self.detail {
            Some(FaultDetail::Known(fault)) => Some(fault),
            _ => None,
        }
    }

    /// The `_typeName` of the detail, if any.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        self.detail.as_ref().map(FaultDetail::type_name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn known_fault_decodes_by_type_name() {
        let detail: FaultDetail = serde_json::from_value(json!({
            "_typeName": "InvalidArgument",
            "invalidProperty": "cluster",
            "faultMessage": [],
        }))
        .unwrap();
        assert_eq!(
            detail,
            FaultDetail::Known(MethodFault::from(FaultKind::InvalidArgument {
                invalid_property: Some("cluster".to_string()),
            }))
        );
    }

    #[test]
    fn unit_fault_keeps_its_messages() {
        let detail: FaultDetail = serde_json::from_value(json!({
            "_typeName": "InvalidLogin",
            "faultMessage": [{"key": "login", "message": "bad password"}],
        }))
        .unwrap();
        let FaultDetail::Known(fault) = &detail else {
            panic!("InvalidLogin should be a known fault: {detail:?}");
        };
        assert_eq!(fault.kind, FaultKind::InvalidLogin);
        assert!(fault.is_authentication());
        assert_eq!(fault.fault_message[0].message.as_deref(), Some("bad password"));
    }

    #[test]
    fn fault_message_survives_a_round_trip() {
        let wire = json!({
            "_typeName": "VsanFault",
            "faultMessage": [{
                "key": "com.vmware.vsan.perf",
                "message": "Performance service is disabled",
            }],
        });
        let detail: FaultDetail = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(detail.type_name(), "VsanFault");
        assert!(matches!(detail, FaultDetail::Known(_)));
        assert_eq!(serde_json::to_value(&detail).unwrap(), wire);
    }

    #[test]
    fn fault_cause_is_kept_whether_known_or_not() {
        let wire = json!({
            "_typeName": "SystemError",
            "reason": "clomd unreachable",
            "faultCause": {
                "_typeName": "VsanClomdFault",
                "host": {"type": "HostSystem", "value": "host-10"},
            },
        });
        let fault: MethodFault = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(
            fault.kind,
            FaultKind::SystemError {
                reason: "clomd unreachable".to_string(),
            }
        );
        let cause = fault.fault_cause.as_deref().unwrap();
        assert_eq!(cause.type_name(), "VsanClomdFault");
        assert_eq!(serde_json::to_value(&fault).unwrap(), wire);

        let chained: MethodFault = serde_json::from_value(json!({
            "_typeName": "VsanFault",
            "faultCause": {"_typeName": "HostCommunication"},
        }))
        .unwrap();
        assert!(matches!(
            chained.fault_cause.as_deref(),
            Some(FaultDetail::Known(MethodFault { kind: FaultKind::HostCommunication, .. }))
        ));
    }

    #[test]
    fn unknown_fault_is_preserved() {
        let detail: FaultDetail = serde_json::from_value(json!({
            "_typeName": "VsanDiskFormatConversionFault",
            "reason": "mixed formats",
        }))
        .unwrap();
        assert_eq!(detail.type_name(), "VsanDiskFormatConversionFault");
        match detail {
            FaultDetail::Unknown(data) => assert_eq!(data.properties["reason"], "mixed formats"),
            FaultDetail::Known(other) => panic!("unexpected known fault {other:?}"),
        }
    }

    #[test]
    fn type_name_matches_wire_discriminator() {
        let fault = MethodFault::from(FaultKind::SystemError {
            reason: "disk full".to_string(),
        });
        let value = serde_json::to_value(&fault).unwrap();
        assert_eq!(value["_typeName"], fault.type_name());
        assert_eq!(value["reason"], "disk full");
    }

    #[test]
    fn soap_fault_display_and_accessors() {
        let fault = SoapFault::server(
            "The object has already been deleted",
            FaultKind::ManagedObjectNotFound {
                obj: Some(ManagedObjectReference::cluster("domain-c9")),
            },
        );
        assert_eq!(
            fault.to_string(),
            "ServerFaultCode: The object has already been deleted"
        );
        assert_eq!(fault.type_name(), Some("ManagedObjectNotFound"));
        assert!(fault.method_fault().is_some());
    }

    #[test]
    fn soap_fault_without_detail() {
        let fault: SoapFault =
            serde_json::from_value(json!({"code": "ClientFaultCode", "reason": "bad xml"}))
                .unwrap();
        assert!(fault.detail.is_none());
        assert!(fault.method_fault().is_none());
        assert_eq!(fault.type_name(), None);
    }
}
