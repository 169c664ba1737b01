/// Errors from parsing the textual forms used by the vSAN API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid managed object reference: {0:?} (expected Type:value)")]
    ManagedObjectReference(String),
    #[error("invalid API version: {0:?}")]
    Version(String),
    #[error("invalid timestamp: {0:?}")]
    Timestamp(String),
}
