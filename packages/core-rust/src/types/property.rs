//! Property collector data objects of the vSphere API.
//!
//! A retrieval names, per [`ObjectSpec`], the objects to visit and, per
//! [`PropertySpec`], which properties to read from each object type. Results
//! come back as one [`ObjectContent`] per object.

use serde::{Deserialize, Serialize};

use crate::mor::ManagedObjectReference;
use crate::types::DynamicData;

/// Properties to read from objects of one type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertySpec {
    #[serde(rename = "type")]
    pub type_name: String,
    /// Read every property; `path_set` is ignored when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path_set: Vec<String>,
}

/// A starting object and the traversal from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectSpec {
    pub obj: ManagedObjectReference,
    /// Only follow `select_set` from `obj`; do not report `obj` itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub select_set: Vec<DynamicData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyFilterSpec {
    pub prop_set: Vec<PropertySpec>,
    pub obj_set: Vec<ObjectSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_missing_objects_in_results: Option<bool>,
}

impl PropertyFilterSpec {
    /// Reads `paths` of a single object.
    #[must_use]
    pub fn for_object(obj: ManagedObjectReference, paths: &[&str]) -> Self {
        Self {
            prop_set: vec![PropertySpec {
                type_name: obj.type_name.clone(),
                all: None,
                path_set: paths.iter().map(|p| (*p).to_string()).collect(),
            }],
            obj_set: vec![ObjectSpec {
                obj,
                ..ObjectSpec::default()
            }],
            report_missing_objects_in_results: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicProperty {
    pub name: String,
    pub val: serde_json::Value,
}

/// A property that could not be read, with the fault that prevented it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissingProperty {
    pub path: String,
    pub fault: DynamicData,
}

/// The properties read from one object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectContent {
    pub obj: ManagedObjectReference,
    pub prop_set: Vec<DynamicProperty>,
    pub missing_set: Vec<MissingProperty>,
}

impl ObjectContent {
    /// Value of the property at `path`, if it was returned.
    #[must_use]
    pub fn property(&self, path: &str) -> Option<&serde_json::Value> {
        self.prop_set.iter().find(|p| p.name == path).map(|p| &p.val)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetrieveOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_objects: Option<i32>,
}

/// One page of a paged retrieval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrieveResult {
    /// Continuation token; `None` on the last page.
    pub token: Option<String>,
    pub objects: Vec<ObjectContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaitOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wait_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_object_updates: Option<i32>,
}

/// Product identification of the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutInfo {
    pub name: String,
    pub full_name: String,
    pub vendor: String,
    pub version: String,
    pub build: String,
    pub os_type: String,
    pub product_line_id: String,
    /// `VirtualCenter` or `HostAgent`.
    pub api_type: String,
    pub api_version: String,
    pub instance_uuid: Option<String>,
}

/// The singletons of a vSphere endpoint, returned by `RetrieveServiceContent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceContent {
    pub root_folder: ManagedObjectReference,
    pub property_collector: ManagedObjectReference,
    pub view_manager: Option<ManagedObjectReference>,
    pub about: AboutInfo,
    pub setting: Option<ManagedObjectReference>,
    pub user_directory: Option<ManagedObjectReference>,
    pub session_manager: Option<ManagedObjectReference>,
    pub authorization_manager: Option<ManagedObjectReference>,
    pub perf_manager: Option<ManagedObjectReference>,
    pub event_manager: Option<ManagedObjectReference>,
    pub task_manager: Option<ManagedObjectReference>,
    pub alarm_manager: Option<ManagedObjectReference>,
    pub search_index: Option<ManagedObjectReference>,
    pub file_manager: Option<ManagedObjectReference>,
    pub datastore_namespace_manager: Option<ManagedObjectReference>,
    pub license_manager: Option<ManagedObjectReference>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn filter_for_one_object_reads_its_type() {
        let spec = PropertyFilterSpec::for_object(
            ManagedObjectReference::cluster("domain-c8"),
            &["name", "configurationEx"],
        );
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({
                "propSet": [{"type": "ClusterComputeResource", "pathSet": ["name", "configurationEx"]}],
                "objSet": [{"obj": {"type": "ClusterComputeResource", "value": "domain-c8"}}],
            })
        );
    }

    #[test]
    fn object_content_finds_properties_by_path() {
        let content: ObjectContent = serde_json::from_value(json!({
            "obj": {"type": "HostSystem", "value": "host-10"},
            "propSet": [
                {"name": "name", "val": "esx-01.example.com"},
                {"name": "runtime.inMaintenanceMode", "val": false},
            ],
            "missingSet": [{"path": "config.vsanHostConfig", "fault": {"_typeName": "NoPermission"}}],
        }))
        .unwrap();
        assert_eq!(content.property("name"), Some(&json!("esx-01.example.com")));
        assert_eq!(content.property("runtime.inMaintenanceMode"), Some(&json!(false)));
        assert_eq!(content.property("summary"), None);
        assert_eq!(content.missing_set[0].fault.type_name, "NoPermission");
    }

    #[test]
    fn last_page_has_no_token() {
        let page: RetrieveResult = serde_json::from_value(json!({"objects": []})).unwrap();
        assert!(page.token.is_none());
    }
}
