//! Request and response messages of every remote operation.
//!
//! Each operation `Op` has a request struct named exactly `Op` (its `_this`
//! target plus the operation parameters, camelCase on the wire) and an
//! `OpResponse` struct holding the `returnval`, if the operation returns one.
//! Both are generated by [`soap_messages!`] from a one-entry-per-operation
//! table in the submodules, grouped by the managed object that serves them.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::mor::ManagedObjectReference;

pub mod admin;
pub mod alarm;
pub mod capability;
pub mod cluster_config;
pub mod datastore;
pub mod disk;
pub mod file_service;
pub mod health;
pub mod host_config;
pub mod host_health;
pub mod host_system;
pub mod internal;
pub mod inventory;
pub mod iscsi;
pub mod network;
pub mod object;
pub mod ovf;
pub mod perf;
pub mod platform;
pub mod service;
pub mod session;
pub mod space;
pub mod storage;
pub mod stretched;
pub mod system_ex;
pub mod task;
pub mod upgrade;
pub mod vim_perf;
pub mod vim_vsan;
pub mod vm;

/// A remote operation, implemented by its request type.
pub trait Method: Serialize + Send + Sync + 'static {
    /// The response wrapper carrying the operation's `returnval`.
    type Response: Serialize + DeserializeOwned + Default + Send + 'static;

    /// Remote operation name, as it appears on the wire.
    const OPERATION: &'static str;

    /// The managed object the operation is invoked on.
    fn this(&self) -> &ManagedObjectReference;
}

/// Declares request/response pairs and their [`Method`] impls.
///
/// ```text
/// soap_messages! {
///     /// Doc comment of the request.
///     OpName => OpNameResponse {
///         required_param: Type,
///         optional_param?: Type,
///     } -> ReturnType;
///
///     VoidOp => VoidOpResponse {};
/// }
/// ```
///
/// Optional parameters become `Option<Type>` and are omitted on the wire when
/// unset. Operations without `-> ReturnType` get an empty response struct.
/// Type names are the wire names verbatim, `_Task` suffix included.
#[macro_export]
macro_rules! soap_messages {
    // Optional parameter.
    (@fields $head:tt [$($out:tt)*]
        $(#[$fmeta:meta])* $field:ident ?: $fty:ty $(, $($more:tt)*)?
    ) => {
        $crate::soap_messages!(@fields $head [
            $($out)*
            $(#[$fmeta])*
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub $field: Option<$fty>,
        ] $($($more)*)?);
    };

    // Required parameter.
    (@fields $head:tt [$($out:tt)*]
        $(#[$fmeta:meta])* $field:ident : $fty:ty $(, $($more:tt)*)?
    ) => {
        $crate::soap_messages!(@fields $head [
            $($out)*
            $(#[$fmeta])*
            pub $field: $fty,
        ] $($($more)*)?);
    };

    // All parameters collected: emit the pair.
    (@fields [[$(#[$meta:meta])*] $op:ident $resp:ident [$($ret:ty)?]] [$($out:tt)*]) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $op {
            /// Target managed object.
            #[serde(rename = "_this")]
            pub this: $crate::ManagedObjectReference,
            $($out)*
        }

        #[doc = concat!("Response of [`", stringify!($op), "`].")]
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $resp {
            $(pub returnval: $ret,)?
        }

        impl $crate::messages::Method for $op {
            type Response = $resp;
            const OPERATION: &'static str = stringify!($op);

            fn this(&self) -> &$crate::ManagedObjectReference {
                &self.this
            }
        }
    };

    (
        $(
            $(#[$meta:meta])*
            $op:ident => $resp:ident { $($fields:tt)* } $(-> $ret:ty)?;
        )*
    ) => {
        $(
            $crate::soap_messages!(@fields [[$(#[$meta])*] $op $resp [$($ret)?]] [] $($fields)*);
        )*
    };
}
