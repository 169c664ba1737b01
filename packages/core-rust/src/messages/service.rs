//! Operations of the vSphere root objects: `ServiceInstance`, the property
//! collectors and the view manager with its views.

use crate::mor::ManagedObjectReference;
use crate::time::DateTime;
use crate::types::{
    DynamicData, ObjectContent, PropertyFilterSpec, RetrieveOptions, RetrieveResult,
    ServiceContent, WaitOptions,
};

crate::soap_messages! {
    /// The endpoint's singletons; the first call of every vSphere session.
    RetrieveServiceContent => RetrieveServiceContentResponse {} -> ServiceContent;

    CurrentTime => CurrentTimeResponse {} -> DateTime;

    RetrieveProductComponents => RetrieveProductComponentsResponse {} -> Vec<DynamicData>;

    RetrieveProperties => RetrievePropertiesResponse {
        spec_set: Vec<PropertyFilterSpec>,
    } -> Vec<ObjectContent>;

    /// First page of a retrieval; `None` when nothing matched.
    RetrievePropertiesEx => RetrievePropertiesExResponse {
        spec_set: Vec<PropertyFilterSpec>,
        options: RetrieveOptions,
    } -> Option<RetrieveResult>;

    ContinueRetrievePropertiesEx => ContinueRetrievePropertiesExResponse {
        token: String,
    } -> RetrieveResult;

    CancelRetrievePropertiesEx => CancelRetrievePropertiesExResponse {
        token: String,
    };

    CreateFilter => CreateFilterResponse {
        spec: PropertyFilterSpec,
        partial_updates: bool,
    } -> ManagedObjectReference;

    /// Waits for changes after `version`; `None` when `max_wait_seconds` passed.
    WaitForUpdatesEx => WaitForUpdatesExResponse {
        version?: String,
        options?: WaitOptions,
    } -> Option<DynamicData>;

    WaitForUpdates => WaitForUpdatesResponse {
        version?: String,
    } -> DynamicData;

    CheckForUpdates => CheckForUpdatesResponse {
        version?: String,
    } -> Option<DynamicData>;

    CancelWaitForUpdates => CancelWaitForUpdatesResponse {};

    CreatePropertyCollector => CreatePropertyCollectorResponse {} -> ManagedObjectReference;

    DestroyPropertyCollector => DestroyPropertyCollectorResponse {};

    DestroyPropertyFilter => DestroyPropertyFilterResponse {};

    /// Reads vSAN-only properties through the vSAN endpoint's collector.
    VsanRetrieveProperties => VsanRetrievePropertiesResponse {
        spec_set: Vec<PropertyFilterSpec>,
    } -> Vec<ObjectContent>;

    CreateContainerView => CreateContainerViewResponse {
        container: ManagedObjectReference,
        r#type: Vec<String>,
        recursive: bool,
    } -> ManagedObjectReference;

    CreateListView => CreateListViewResponse {
        obj?: Vec<ManagedObjectReference>,
    } -> ManagedObjectReference;

    CreateListViewFromView => CreateListViewFromViewResponse {
        view: ManagedObjectReference,
    } -> ManagedObjectReference;

    CreateInventoryView => CreateInventoryViewResponse {} -> ManagedObjectReference;

    DestroyView => DestroyViewResponse {};

    /// Returns the references that could not be added.
    ModifyListView => ModifyListViewResponse {
        add?: Vec<ManagedObjectReference>,
        remove?: Vec<ManagedObjectReference>,
    } -> Vec<ManagedObjectReference>;

    ResetListView => ResetListViewResponse {
        obj?: Vec<ManagedObjectReference>,
    } -> Vec<ManagedObjectReference>;

    ResetListViewFromView => ResetListViewFromViewResponse {
        view: ManagedObjectReference,
    };
}
