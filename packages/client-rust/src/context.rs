//! Per-call context: identity, deadline and cancellation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

static NEXT_CALL_ID: AtomicU64 = AtomicU64::new(1);

/// Cancellable context threaded through a stub to its transport.
///
/// Stubs never inspect the context; enforcing the deadline and cancellation
/// is the transport's job (see [`crate::transport::Deadline`]).
#[derive(Debug, Clone)]
pub struct CallContext {
    call_id: u64,
    deadline: Option<Instant>,
    cancel: CancellationToken,
}

impl CallContext {
    /// Creates a context with a fresh call id, no deadline and its own
    /// cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cancellation(CancellationToken::new())
    }

    /// Creates a context cancelled together with `token`.
    #[must_use]
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            call_id: NEXT_CALL_ID.fetch_add(1, Ordering::Relaxed),
            deadline: None,
            cancel: token,
        }
    }

    /// Derives a context for a nested call.
    ///
    /// The child gets a new call id, inherits the deadline, and is cancelled
    /// when the parent is. Cancelling the child leaves the parent untouched.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            call_id: NEXT_CALL_ID.fetch_add(1, Ordering::Relaxed),
            deadline: self.deadline,
            cancel: self.cancel.child_token(),
        }
    }

    /// Sets the deadline to `timeout` from now, keeping an earlier one.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Sets the deadline, keeping an earlier one.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    #[must_use]
    pub fn call_id(&self) -> u64 {
        self.call_id
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline; zero once it has passed.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    #[must_use]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Cancels this context and every context derived from it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Default for CallContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_ids_are_distinct() {
        let a = CallContext::new();
        let b = CallContext::new();
        let c = a.child();
        assert_ne!(a.call_id(), b.call_id());
        assert_ne!(a.call_id(), c.call_id());
    }

    #[test]
    fn cancelling_parent_cancels_child_only_downwards() {
        let parent = CallContext::new();
        let child = parent.child();
        child.cancel();
        assert!(!parent.is_cancelled());

        let child = parent.child();
        parent.cancel();
        assert!(child.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn earlier_deadline_wins() {
        let ctx = CallContext::new()
            .with_timeout(Duration::from_secs(5))
            .with_timeout(Duration::from_secs(30));
        assert_eq!(ctx.remaining(), Some(Duration::from_secs(5)));

        let child = ctx.child().with_timeout(Duration::from_secs(1));
        assert_eq!(child.remaining(), Some(Duration::from_secs(1)));
    }

    #[tokio::test(start_paused = true)]
    async fn remaining_saturates_at_zero() {
        let ctx = CallContext::new().with_timeout(Duration::from_millis(10));
        tokio::time::advance(Duration::from_millis(50)).await;
        assert_eq!(ctx.remaining(), Some(Duration::ZERO));
    }

    #[test]
    fn default_has_no_deadline() {
        assert!(CallContext::default().deadline().is_none());
    }
}
