//! The round-trip transport seam and the layers that wrap it.
//!
//! A [`RoundTripper`] performs the network exchange and wire marshaling for
//! one call; stubs only hand it an envelope through the object-safe
//! [`RoundTripBody`] view. No network transport lives in this crate.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use vsan_core::{ManagedObjectReference, SoapFault};

use crate::context::CallContext;
use crate::error::SoapError;

pub mod deadline;
pub mod instrument;
pub mod scripted;

pub use deadline::{Deadline, DeadlineLayer};
pub use instrument::{InstrumentLayer, Instrumented};
pub use scripted::{RecordedCall, ScriptedOutcome, ScriptedRoundTripper};

// ---------------------------------------------------------------------------
// RoundTripBody
// ---------------------------------------------------------------------------

/// Type-erased view of an operation envelope, as seen by a transport.
pub trait RoundTripBody: Send {
    /// Remote operation name.
    fn operation(&self) -> &'static str;

    /// The managed object the request targets.
    fn this(&self) -> &ManagedObjectReference;

    /// The request encoded as a JSON object (`_this` plus camelCase parameters).
    ///
    /// # Errors
    ///
    /// Returns `SoapError::Encode` if the request cannot be serialized.
    fn request_json(&self) -> Result<serde_json::Value, SoapError>;

    /// The borrowed request value itself.
    fn request_any(&self) -> &dyn Any;

    /// Decodes and installs the response from its JSON form
    /// (an object with an optional `returnval`).
    ///
    /// # Errors
    ///
    /// Returns `SoapError::Decode` if `value` does not match the response type.
    fn set_response_json(&mut self, value: serde_json::Value) -> Result<(), SoapError>;

    /// Installs an already typed response.
    ///
    /// # Errors
    ///
    /// Hands `response` back if it is not this operation's response type.
    fn set_response_any(&mut self, response: Box<dyn Any + Send>) -> Result<(), Box<dyn Any + Send>>;

    fn has_response(&self) -> bool;

    fn fault(&self) -> Option<&SoapFault>;

    fn set_fault(&mut self, fault: SoapFault);
}

impl<'a> dyn RoundTripBody + 'a {
    /// The request as its concrete type, if it is a `T`.
    #[must_use]
    pub fn request<T: 'static>(&self) -> Option<&T> {
        self.request_any().downcast_ref()
    }

    /// Installs a typed response; returns `false` on a type mismatch.
    pub fn respond<T: Send + 'static>(&mut self, response: T) -> bool {
        self.set_response_any(Box::new(response)).is_ok()
    }
}

// ---------------------------------------------------------------------------
// RoundTripper
// ---------------------------------------------------------------------------

/// Performs one SOAP round trip for an envelope.
///
/// On success the transport has installed the response (and possibly a
/// fault) into `body`. Honoring the context's deadline and cancellation is
/// the transport's responsibility.
#[async_trait]
pub trait RoundTripper: Send + Sync {
    /// # Errors
    ///
    /// Returns whatever the transport failed with: network or framing errors,
    /// a surfaced SOAP fault, cancellation or timeout.
    async fn round_trip(&self, ctx: &CallContext, body: &mut dyn RoundTripBody) -> Result<(), SoapError>;
}

#[async_trait]
impl<T: RoundTripper + ?Sized> RoundTripper for &T {
    async fn round_trip(&self, ctx: &CallContext, body: &mut dyn RoundTripBody) -> Result<(), SoapError> {
        (**self).round_trip(ctx, body).await
    }
}

#[async_trait]
impl<T: RoundTripper + ?Sized> RoundTripper for Box<T> {
    async fn round_trip(&self, ctx: &CallContext, body: &mut dyn RoundTripBody) -> Result<(), SoapError> {
        (**self).round_trip(ctx, body).await
    }
}

#[async_trait]
impl<T: RoundTripper + ?Sized> RoundTripper for Arc<T> {
    async fn round_trip(&self, ctx: &CallContext, body: &mut dyn RoundTripBody) -> Result<(), SoapError> {
        (**self).round_trip(ctx, body).await
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
pub(crate) fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tower::ServiceBuilder;
    use vsan_core::messages::session::AcquireCloneTicket;
    use vsan_core::well_known;

    use super::*;
    use crate::methods::session::acquire_clone_ticket;

    #[tokio::test]
    async fn layers_compose_around_a_transport() {
        let rt = ServiceBuilder::new()
            .layer(InstrumentLayer)
            .layer(DeadlineLayer::with_default_timeout(Duration::from_secs(5)))
            .service(ScriptedRoundTripper::new());
        let scripted = rt.get_ref().get_ref();
        scripted.push(
            "AcquireCloneTicket",
            ScriptedOutcome::Response(json!({"returnval": "cst-VCT-52a1"})),
        );
        let req = AcquireCloneTicket {
            this: well_known::session_manager(),
        };

        let ticket = acquire_clone_ticket(&CallContext::new(), &rt, &req)
            .await
            .unwrap()
            .returnval;

        assert_eq!(ticket, "cst-VCT-52a1");
        assert_eq!(scripted.calls_to("AcquireCloneTicket").len(), 1);
    }

    #[tokio::test]
    async fn shared_transport_is_usable_behind_arc() {
        let scripted = Arc::new(ScriptedRoundTripper::new());
        scripted.set_fallback(
            "AcquireCloneTicket",
            ScriptedOutcome::Response(json!({"returnval": "cst-1"})),
        );
        let rt: Arc<dyn RoundTripper> = scripted.clone();
        let req = AcquireCloneTicket {
            this: well_known::session_manager(),
        };

        acquire_clone_ticket(&CallContext::new(), &rt, &req).await.unwrap();
        acquire_clone_ticket(&CallContext::new(), rt.as_ref(), &req).await.unwrap();

        assert_eq!(scripted.calls().len(), 2);
    }

    #[test]
    fn duration_ms_saturates_instead_of_wrapping() {
        assert_eq!(duration_ms(Duration::from_micros(2_999)), 2);
        assert_eq!(duration_ms(Duration::from_secs(90)), 90_000);
        assert_eq!(duration_ms(Duration::MAX), u64::MAX);
    }
}
