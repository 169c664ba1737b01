//! Tracing and metrics for round trips.
//!
//! Every call runs inside a `soap_round_trip` span and records
//! `vsan_soap_round_trips_total`, `vsan_soap_round_trip_errors_total` and
//! `vsan_soap_round_trip_duration_seconds`, labelled by operation.

use std::time::Instant;

use async_trait::async_trait;
use tower::Layer;
use tracing::{info_span, Instrument};

use crate::context::CallContext;
use crate::error::SoapError;
use crate::transport::{duration_ms, RoundTripBody, RoundTripper};

// ---------------------------------------------------------------------------
// InstrumentLayer
// ---------------------------------------------------------------------------

/// Tower layer that instruments transports with spans, counters and timings.
#[derive(Debug, Clone, Default)]
pub struct InstrumentLayer;

impl<T> Layer<T> for InstrumentLayer {
    type Service = Instrumented<T>;

    fn layer(&self, inner: T) -> Self::Service {
        Instrumented { inner }
    }
}

// ---------------------------------------------------------------------------
// Instrumented
// ---------------------------------------------------------------------------

/// Transport wrapper that records duration and outcome of each round trip.
#[derive(Debug, Clone)]
pub struct Instrumented<T> {
    inner: T,
}

impl<T> Instrumented<T> {
    #[must_use]
    pub fn get_ref(&self) -> &T {
        &self.inner
    }
}

/// Classifies a finished round trip for the `outcome` label.
fn outcome(result: &Result<(), SoapError>, faulted: bool) -> &'static str {
    match result {
        Ok(()) if faulted => "fault",
        Ok(()) => "ok",
        Err(SoapError::Fault(_)) => "fault",
        Err(SoapError::Cancelled) => "cancelled",
        Err(SoapError::Timeout { .. }) => "timeout",
        Err(_) => "error",
    }
}

#[async_trait]
impl<T: RoundTripper> RoundTripper for Instrumented<T> {
    async fn round_trip(&self, ctx: &CallContext, body: &mut dyn RoundTripBody) -> Result<(), SoapError> {
        let operation = body.operation();
        let call_id = ctx.call_id();

        let span = info_span!(
            "soap_round_trip",
            operation = operation,
            call_id = call_id,
            this = %body.this(),
            duration_ms = tracing::field::Empty,
            outcome = tracing::field::Empty,
        );

        async move {
            let start = Instant::now();
            let result = self.inner.round_trip(ctx, &mut *body).await;
            let elapsed = start.elapsed();
            let outcome = outcome(&result, body.fault().is_some());

            let duration_ms = duration_ms(elapsed);
            tracing::Span::current().record("duration_ms", duration_ms);
            tracing::Span::current().record("outcome", outcome);

            metrics::counter!("vsan_soap_round_trips_total", "operation" => operation).increment(1);
            metrics::histogram!("vsan_soap_round_trip_duration_seconds", "operation" => operation)
                .record(elapsed.as_secs_f64());

            match &result {
                Ok(()) => tracing::debug!(operation, call_id, duration_ms, outcome, "round trip complete"),
                Err(err) => {
                    metrics::counter!(
                        "vsan_soap_round_trip_errors_total",
                        "operation" => operation,
                        "outcome" => outcome
                    )
                    .increment(1);
                    tracing::warn!(operation, call_id, duration_ms, outcome, error = %err, "round trip failed");
                }
            }

            result
        }
        .instrument(span)
        .await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vsan_core::messages::session::SessionIsActive;
    use vsan_core::well_known;

    use super::*;
    use crate::envelope::Envelope;
    use crate::transport::{ScriptedOutcome, ScriptedRoundTripper};

    fn request() -> SessionIsActive {
        SessionIsActive {
            this: well_known::session_manager(),
            session_id: "52a1".to_string(),
            user_name: "root".to_string(),
        }
    }

    #[tokio::test]
    async fn passes_response_through() {
        let scripted = ScriptedRoundTripper::new();
        scripted.push("SessionIsActive", ScriptedOutcome::Response(json!({"returnval": true})));
        let rt = InstrumentLayer.layer(scripted);

        let req = request();
        let mut envelope = Envelope::new(&req);
        rt.round_trip(&CallContext::new(), &mut envelope).await.unwrap();
        assert!(envelope.into_response().unwrap().returnval);
        assert_eq!(rt.get_ref().calls().len(), 1);
    }

    #[tokio::test]
    async fn passes_error_through() {
        let scripted = ScriptedRoundTripper::new();
        scripted.push("SessionIsActive", ScriptedOutcome::TransportError("connection refused".into()));
        let rt = InstrumentLayer.layer(scripted);

        let req = request();
        let mut envelope = Envelope::new(&req);
        let err = rt.round_trip(&CallContext::new(), &mut envelope).await.unwrap_err();
        assert_eq!(err.to_string(), "transport error: connection refused");
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(outcome(&Ok(()), false), "ok");
        assert_eq!(outcome(&Ok(()), true), "fault");
        assert_eq!(outcome(&Err(SoapError::Cancelled), false), "cancelled");
        assert_eq!(outcome(&Err(SoapError::Timeout { timeout_ms: 1 }), false), "timeout");
        assert_eq!(
            outcome(&Err(SoapError::EmptyResponse { operation: "Logout" }), false),
            "error"
        );
    }
}
