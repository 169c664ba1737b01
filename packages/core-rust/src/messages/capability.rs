//! Operations of `VsanCapabilitySystem`.

use crate::mor::ManagedObjectReference;
use crate::types::VsanCapability;

crate::soap_messages! {
    /// Feature capabilities of vCenter, clusters or hosts.
    VsanGetCapabilities => VsanGetCapabilitiesResponse {
        targets?: Vec<ManagedObjectReference>,
    } -> Vec<VsanCapability>;

    VsanGetCapabilityStatus => VsanGetCapabilityStatusResponse {
        targets?: Vec<ManagedObjectReference>,
    } -> Vec<VsanCapability>;
}
