//! Data objects shared across the whole API surface.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::time::DateTime;

/// An arbitrary data object: its `_typeName` plus untyped properties.
///
/// Used for results whose structure this crate does not model, and for fault
/// details of kinds that have no [`MethodFault`](crate::MethodFault) variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicData {
    #[serde(rename = "_typeName", default)]
    pub type_name: String,
    #[serde(flatten)]
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl DynamicData {
    /// Looks up a property and deserializes it into `T`.
    ///
    /// Returns `None` when the property is absent or has a different shape.
    #[must_use]
    pub fn get<T: serde::de::DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.properties
            .get(name)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

/// A string key/value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// A key with an arbitrary value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyAnyValue {
    pub key: String,
    pub value: serde_json::Value,
}

/// An advanced configuration option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionValue {
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// A message with a stable key for localization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizableMessage {
    pub key: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arg: Vec<KeyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// An authenticated API session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSession {
    /// Session identifier.
    pub key: String,
    pub user_name: String,
    pub full_name: String,
    pub login_time: Option<DateTime>,
    pub last_active_time: Option<DateTime>,
    pub locale: String,
    pub message_locale: String,
    pub extension_session: Option<bool>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
