//! In-memory transport that replays scripted outcomes.
//!
//! Outcomes are queued per operation name and consumed in order; an
//! operation can also carry a fallback outcome used once its queue is empty.
//! Every round trip is recorded with its JSON-encoded request.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use vsan_core::{ManagedObjectReference, SoapFault};

use crate::context::CallContext;
use crate::error::SoapError;
use crate::transport::{RoundTripBody, RoundTripper};

/// What the scripted transport does for one round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedOutcome {
    /// Installs the JSON response (`{"returnval": ...}`) and succeeds.
    Response(serde_json::Value),
    /// Installs the fault and fails with `SoapError::Fault`.
    Fault(SoapFault),
    /// Installs both a response and a fault, then succeeds.
    ResponseWithFault(serde_json::Value, SoapFault),
    /// Succeeds without installing anything.
    Empty,
    /// Fails with `SoapError::Transport` carrying this message.
    TransportError(String),
}

/// One round trip observed by the scripted transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub call_id: u64,
    pub operation: &'static str,
    pub this: ManagedObjectReference,
    pub request: serde_json::Value,
}

#[derive(Debug, Default)]
struct Script {
    queued: HashMap<String, VecDeque<ScriptedOutcome>>,
    fallback: HashMap<String, ScriptedOutcome>,
}

impl Script {
    fn next(&mut self, operation: &str) -> Option<ScriptedOutcome> {
        self.queued
            .get_mut(operation)
            .and_then(VecDeque::pop_front)
            .or_else(|| self.fallback.get(operation).cloned())
    }
}

/// Transport that answers from a script instead of the network.
#[derive(Debug, Default)]
pub struct ScriptedRoundTripper {
    script: Mutex<Script>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedRoundTripper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an outcome for the next unanswered call of `operation`.
    pub fn push(&self, operation: &str, outcome: ScriptedOutcome) {
        self.script
            .lock()
            .queued
            .entry(operation.to_string())
            .or_default()
            .push_back(outcome);
    }

    /// Answers every call of `operation` with `outcome` once its queue is empty.
    pub fn set_fallback(&self, operation: &str, outcome: ScriptedOutcome) {
        self.script
            .lock()
            .fallback
            .insert(operation.to_string(), outcome);
    }

    /// Every round trip so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Round trips of one operation, in call order.
    #[must_use]
    pub fn calls_to(&self, operation: &str) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.operation == operation)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl RoundTripper for ScriptedRoundTripper {
    async fn round_trip(&self, ctx: &CallContext, body: &mut dyn RoundTripBody) -> Result<(), SoapError> {
        let operation = body.operation();
        let request = body.request_json()?;
        self.calls.lock().push(RecordedCall {
            call_id: ctx.call_id(),
            operation,
            this: body.this().clone(),
            request,
        });

        let outcome = self.script.lock().next(operation);
        match outcome {
            Some(ScriptedOutcome::Response(value)) => body.set_response_json(value),
            Some(ScriptedOutcome::Fault(fault)) => {
                body.set_fault(fault.clone());
                Err(SoapError::Fault(fault))
            }
            Some(ScriptedOutcome::ResponseWithFault(value, fault)) => {
                body.set_response_json(value)?;
                body.set_fault(fault);
                Ok(())
            }
            Some(ScriptedOutcome::Empty) => Ok(()),
            Some(ScriptedOutcome::TransportError(message)) => {
                Err(SoapError::Transport(anyhow::anyhow!(message)))
            }
            None => Err(SoapError::Transport(anyhow::anyhow!(
                "no scripted outcome for {operation}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vsan_core::messages::capability::VsanGetCapabilities;
    use vsan_core::well_known;

    use super::*;
    use crate::envelope::Envelope;

    fn request() -> VsanGetCapabilities {
        VsanGetCapabilities {
            this: well_known::capability_system(),
            targets: Some(vec![ManagedObjectReference::cluster("domain-c8")]),
        }
    }

    #[tokio::test]
    async fn queued_outcomes_are_consumed_before_fallback() {
        let rt = ScriptedRoundTripper::new();
        rt.push("VsanGetCapabilities", ScriptedOutcome::TransportError("first".into()));
        rt.set_fallback(
            "VsanGetCapabilities",
            ScriptedOutcome::Response(json!({"returnval": [{"capabilities": ["perfsvc"]}]})),
        );

        let req = request();
        let ctx = CallContext::new();
        let mut first = Envelope::new(&req);
        assert!(rt.round_trip(&ctx, &mut first).await.is_err());
        for _ in 0..2 {
            let mut next = Envelope::new(&req);
            rt.round_trip(&ctx, &mut next).await.unwrap();
            assert_eq!(next.into_response().unwrap().returnval[0].capabilities, ["perfsvc"]);
        }
        assert_eq!(rt.calls_to("VsanGetCapabilities").len(), 3);
    }

    #[tokio::test]
    async fn records_json_request() {
        let rt = ScriptedRoundTripper::new();
        rt.push("VsanGetCapabilities", ScriptedOutcome::Empty);
        let req = request();
        let mut envelope = Envelope::new(&req);
        rt.round_trip(&CallContext::new(), &mut envelope).await.unwrap();

        let calls = rt.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].this, well_known::capability_system());
        assert_eq!(calls[0].request["_this"]["type"], "VsanCapabilitySystem");
        assert_eq!(calls[0].request["targets"][0]["value"], "domain-c8");
    }

    #[tokio::test]
    async fn fault_outcome_sets_fault_and_fails() {
        let rt = ScriptedRoundTripper::new();
        let fault = SoapFault::server("not supported", vsan_core::FaultKind::NotSupported);
        rt.push("VsanGetCapabilities", ScriptedOutcome::Fault(fault.clone()));
        let req = request();
        let mut envelope = Envelope::new(&req);
        let err = rt.round_trip(&CallContext::new(), &mut envelope).await.unwrap_err();
        assert_eq!(err.soap_fault(), Some(&fault));
        assert_eq!(envelope.fault(), Some(&fault));
    }

    #[tokio::test]
    async fn unscripted_operation_is_a_transport_error() {
        let rt = ScriptedRoundTripper::new();
        let req = request();
        let mut envelope = Envelope::new(&req);
        let err = rt.round_trip(&CallContext::new(), &mut envelope).await.unwrap_err();
        assert!(matches!(err, SoapError::Transport(_)));
        assert_eq!(rt.calls().len(), 1);
    }
}
