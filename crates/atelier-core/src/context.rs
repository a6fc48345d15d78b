//! Caller-imposed limits for one fallback chain invocation.
//!
//! Each provider call already has its own timeout, but a chain of three
//! providers can still take the sum of all of them. A [`CallContext`] adds an
//! overall deadline and an optional cancellation signal; the chain checks it
//! before every step and races it against the in-flight provider call.
//!
//! ```rust
//! use std::time::Duration;
//! use atelier_core::CallContext;
//!
//! let (ctx, handle) = CallContext::with_timeout(Duration::from_secs(20)).cancellable();
//! handle.cancel();
//! assert!(ctx.is_cancelled());
//! ```

use std::{future::Future, time::Duration};

use tokio::{sync::watch, time::Instant};

use crate::error::Interruption;

#[derive(Debug, Clone, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

impl CallContext {
    /// No deadline, not cancellable.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            cancel: None,
        }
    }

    /// Deadline `timeout` from now. A timeout too large to represent as an
    /// instant means no deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
            cancel: None,
        }
    }

    /// Attach a cancellation signal and return the handle that fires it.
    pub fn cancellable(mut self) -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        self.cancel = Some(rx);
        (self, CancelHandle(tx))
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Returns the reason this context no longer allows work, if any.
    pub fn check(&self) -> Result<(), Interruption> {
        if self.is_cancelled() {
            return Err(Interruption::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(Interruption::DeadlineExceeded);
        }
        Ok(())
    }

    /// Drive `fut` to completion unless the deadline passes or the context is
    /// cancelled first. The future is dropped on interruption.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, Interruption> {
        tokio::select! {
            biased;
            _ = self.cancelled() => Err(Interruption::Cancelled),
            _ = self.expired() => Err(Interruption::DeadlineExceeded),
            out = fut => Ok(out),
        }
    }

    async fn cancelled(&self) {
        let Some(rx) = &self.cancel else {
            return std::future::pending().await;
        };

        let mut rx = rx.clone();
        let fired = rx.wait_for(|cancelled| *cancelled).await.is_ok();
        if !fired {
            // Handle dropped without cancelling.
            std::future::pending::<()>().await;
        }
    }

    async fn expired(&self) {
        match self.deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}

/// Fires the cancellation signal of the [`CallContext`] it was created with.
#[derive(Debug)]
pub struct CancelHandle(watch::Sender<bool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.send_replace(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unbounded_runs_to_completion() {
        let ctx = CallContext::unbounded();
        assert_eq!(ctx.check(), Ok(()));
        assert_eq!(ctx.run(async { 7 }).await, Ok(7));
    }

    #[tokio::test]
    async fn past_deadline_fails_check() {
        let ctx = CallContext::with_deadline(Instant::now());
        assert_eq!(ctx.check(), Err(Interruption::DeadlineExceeded));
    }

    #[tokio::test]
    async fn deadline_interrupts_pending_work() {
        let ctx = CallContext::with_timeout(Duration::from_millis(20));
        let out = ctx.run(std::future::pending::<()>()).await;
        assert_eq!(out, Err(Interruption::DeadlineExceeded));
    }

    #[tokio::test]
    async fn unrepresentable_timeout_is_unbounded() {
        let ctx = CallContext::with_timeout(Duration::from_secs(u64::MAX));
        assert_eq!(ctx.deadline(), None);
        assert_eq!(ctx.check(), Ok(()));
        assert_eq!(ctx.run(async { 1 }).await, Ok(1));
    }

    #[tokio::test]
    async fn cancel_interrupts_pending_work() {
        let (ctx, handle) = CallContext::unbounded().cancellable();
        let task = tokio::spawn(async move { ctx.run(std::future::pending::<()>()).await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.cancel();
        assert_eq!(task.await.unwrap(), Err(Interruption::Cancelled));
    }

    #[tokio::test]
    async fn dropped_handle_does_not_cancel() {
        let (ctx, handle) = CallContext::unbounded().cancellable();
        drop(handle);
        assert!(!ctx.is_cancelled());
        assert_eq!(ctx.run(async { "done" }).await, Ok("done"));
    }
}
