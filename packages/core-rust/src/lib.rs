//! vSAN Core: managed object references, faults, data objects and the
//! request/response messages of every remote operation.

pub mod error;
pub mod fault;
pub mod messages;
pub mod mor;
pub mod time;
pub mod types;
pub mod version;

pub use error::ParseError;
pub use fault::{FaultDetail, FaultKind, MethodFault, SoapFault};
pub use messages::Method;
pub use mor::{well_known, ManagedObjectReference};
pub use time::DateTime;
pub use types::DynamicData;
pub use version::ApiVersion;

#[cfg(test)]
mod tests {
    #[test]
    fn crate_loads() {
        // Empty body: if this test runs, the crate compiles and loads.
    }
}
