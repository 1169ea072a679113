//! Request cancellation
//!
//! A cancellation pair binds a transport client to the lifetime of the
//! logical operation that created it. Firing the handle makes every
//! in-flight request on clients holding the matching signal resolve to
//! [`HttpError::Cancelled`](crate::HttpError::Cancelled), which the client
//! logs and returns without touching the middleware error hooks.

use tokio::sync::watch;

/// Create a linked cancellation handle/signal pair
#[must_use]
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx })
}

/// Caller-side handle that triggers cancellation
///
/// Firing is idempotent; the signal latches once cancelled.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Cancel every request bound to the paired signal
    pub fn cancel(&self) {
        // Receivers may already be gone; nothing to do then.
        let _ = self.tx.send(true);
    }

    /// Whether cancellation has been triggered
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Client-side signal awaited by in-flight requests
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Resolve once cancellation is triggered
    ///
    /// If the handle is dropped without cancelling, this future never
    /// resolves and the request runs to its normal completion.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        if *rx.borrow() {
            return;
        }
        while rx.changed().await.is_ok() {
            if *rx.borrow() {
                return;
            }
        }
        // Handle dropped without firing: stay pending forever.
        std::future::pending::<()>().await;
    }

    /// Whether cancellation has already been triggered
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn cancel_resolves_waiters() {
        let (handle, signal) = cancel_pair();

        let waiter = tokio::spawn(async move { signal.cancelled().await });
        handle.cancel();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .ok()
            .map(|r| r.ok());
        assert!(handle.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_resolves_immediately_when_already_fired() {
        let (handle, signal) = cancel_pair();
        handle.cancel();

        tokio::time::timeout(Duration::from_millis(50), signal.cancelled())
            .await
            .ok();
        assert!(signal.is_cancelled());
    }

    #[tokio::test]
    async fn dropped_handle_never_resolves() {
        let (handle, signal) = cancel_pair();
        drop(handle);

        let result =
            tokio::time::timeout(Duration::from_millis(50), signal.cancelled()).await;
        assert!(result.is_err());
    }
}
