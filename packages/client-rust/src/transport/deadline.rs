//! Deadline and cancellation enforcement for round trips.
//!
//! Races the inner transport against the context's cancellation token and
//! deadline, returning `SoapError::Cancelled` or `SoapError::Timeout`.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tower::Layer;

use crate::context::CallContext;
use crate::error::SoapError;
use crate::transport::{duration_ms, RoundTripBody, RoundTripper};

// ---------------------------------------------------------------------------
// DeadlineLayer
// ---------------------------------------------------------------------------

/// Tower layer that wraps transports with deadline and cancellation handling.
///
/// The deadline is read from each call's [`CallContext`]; calls without one
/// fall back to the layer's default timeout, if configured.
#[derive(Debug, Clone, Default)]
pub struct DeadlineLayer {
    default_timeout: Option<Duration>,
}

impl DeadlineLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `timeout` to calls whose context has no deadline.
    #[must_use]
    pub fn with_default_timeout(timeout: Duration) -> Self {
        Self {
            default_timeout: Some(timeout),
        }
    }
}

impl<T> Layer<T> for DeadlineLayer {
    type Service = Deadline<T>;

    fn layer(&self, inner: T) -> Self::Service {
        Deadline {
            inner,
            default_timeout: self.default_timeout,
        }
    }
}

// ---------------------------------------------------------------------------
// Deadline
// ---------------------------------------------------------------------------

/// Transport wrapper that enforces per-call deadlines and cancellation.
#[derive(Debug, Clone)]
pub struct Deadline<T> {
    inner: T,
    default_timeout: Option<Duration>,
}

impl<T> Deadline<T> {
    #[must_use]
    pub fn get_ref(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: RoundTripper> RoundTripper for Deadline<T> {
    async fn round_trip(&self, ctx: &CallContext, body: &mut dyn RoundTripBody) -> Result<(), SoapError> {
        if ctx.is_cancelled() {
            return Err(SoapError::Cancelled);
        }

        let started = Instant::now();
        let deadline = ctx
            .deadline()
            .or_else(|| self.default_timeout.map(|timeout| started + timeout));
        let call = self.inner.round_trip(ctx, body);

        match deadline {
            None => tokio::select! {
                biased;
                () = ctx.cancellation().cancelled() => Err(SoapError::Cancelled),
                result = call => result,
            },
            Some(at) => {
                let timeout_ms = duration_ms(at.saturating_duration_since(started));
                tokio::select! {
                    biased;
                    () = ctx.cancellation().cancelled() => Err(SoapError::Cancelled),
                    () = tokio::time::sleep_until(at) => Err(SoapError::Timeout { timeout_ms }),
                    result = call => result,
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use vsan_core::messages::session::{AcquireCloneTicket, AcquireCloneTicketResponse};
    use vsan_core::well_known;

    use super::*;
    use crate::envelope::Envelope;

    /// Transport that sleeps before answering.
    struct SlowTransport {
        delay: Duration,
        calls: AtomicUsize,
    }

    impl SlowTransport {
        fn new(delay_ms: u64) -> Self {
            Self {
                delay: Duration::from_millis(delay_ms),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RoundTripper for SlowTransport {
        async fn round_trip(&self, _ctx: &CallContext, body: &mut dyn RoundTripBody) -> Result<(), SoapError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            body.respond(AcquireCloneTicketResponse {
                returnval: "cst-VCT-52".to_string(),
            });
            Ok(())
        }
    }

    fn request() -> AcquireCloneTicket {
        AcquireCloneTicket {
            this: well_known::session_manager(),
        }
    }

    async fn call<T: RoundTripper>(rt: &T, ctx: &CallContext) -> Result<Option<String>, SoapError> {
        let req = request();
        let mut envelope = Envelope::new(&req);
        rt.round_trip(ctx, &mut envelope).await?;
        Ok(envelope.into_response().map(|r| r.returnval))
    }

    #[tokio::test(start_paused = true)]
    async fn completes_within_deadline() {
        let rt = DeadlineLayer::new().layer(SlowTransport::new(10));
        let ctx = CallContext::new().with_timeout(Duration::from_secs(1));
        let ticket = call(&rt, &ctx).await.unwrap();
        assert_eq!(ticket.as_deref(), Some("cst-VCT-52"));
    }

    #[tokio::test(start_paused = true)]
    async fn exceeding_deadline_returns_timeout() {
        let rt = DeadlineLayer::new().layer(SlowTransport::new(200));
        let ctx = CallContext::new().with_timeout(Duration::from_millis(50));
        let err = call(&rt, &ctx).await.unwrap_err();
        assert!(matches!(err, SoapError::Timeout { timeout_ms: 50 }));
    }

    #[tokio::test(start_paused = true)]
    async fn default_timeout_applies_without_context_deadline() {
        let rt = DeadlineLayer::with_default_timeout(Duration::from_millis(30))
            .layer(SlowTransport::new(100));
        let err = call(&rt, &CallContext::new()).await.unwrap_err();
        assert!(matches!(err, SoapError::Timeout { timeout_ms: 30 }));
    }

    #[tokio::test(start_paused = true)]
    async fn no_deadline_waits_for_transport() {
        let rt = DeadlineLayer::new().layer(SlowTransport::new(60_000));
        let ticket = call(&rt, &CallContext::new()).await.unwrap();
        assert!(ticket.is_some());
    }

    #[tokio::test]
    async fn already_cancelled_context_skips_transport() {
        let rt = DeadlineLayer::new().layer(SlowTransport::new(0));
        let ctx = CallContext::new();
        ctx.cancel();
        let err = call(&rt, &ctx).await.unwrap_err();
        assert!(matches!(err, SoapError::Cancelled));
        assert_eq!(rt.get_ref().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_interrupts_in_flight_call() {
        let rt = DeadlineLayer::new().layer(SlowTransport::new(10_000));
        let ctx = CallContext::new();
        let canceller = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            canceller.cancel();
        });
        let err = call(&rt, &ctx).await.unwrap_err();
        assert!(matches!(err, SoapError::Cancelled));
    }
}
