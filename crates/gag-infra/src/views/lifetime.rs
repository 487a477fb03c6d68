//! Cancellation signal tied to a mounted view.

use std::sync::Arc;

use tokio::sync::watch;

/// Closed once the owning view is unmounted or expires. Clones share the
/// same signal.
#[derive(Debug, Clone)]
pub struct ViewLifetime {
    closed: Arc<watch::Sender<bool>>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            closed: Arc::new(tx),
        }
    }

    /// Close the lifetime. Idempotent.
    pub fn close(&self) {
        self.closed.send_replace(true);
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    /// Resolve once the lifetime is closed.
    pub async fn closed(&self) {
        let mut rx = self.closed.subscribe();
        // The sender lives as long as `self`, so this only returns on close.
        let _ = rx.wait_for(|closed| *closed).await;
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_close_wakes_waiters() {
        let lifetime = ViewLifetime::new();
        let waiter = {
            let lifetime = lifetime.clone();
            tokio::spawn(async move { lifetime.closed().await })
        };

        assert!(!lifetime.is_closed());
        lifetime.close();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter woke")
            .unwrap();
        assert!(lifetime.is_closed());
    }

    #[tokio::test]
    async fn test_closed_returns_immediately_after_close() {
        let lifetime = ViewLifetime::new();
        lifetime.close();
        lifetime.close();
        tokio::time::timeout(Duration::from_millis(50), lifetime.closed())
            .await
            .expect("already closed");
    }
}
