//! Explicit cancellation of in-flight requests.
//!
//! A screen that goes away calls [`CancelHandle::cancel`]; every request
//! wrapped with [`with_cancel`] on a matching token is dropped and resolves to
//! [`ApiError::Cancelled`].

use std::future::Future;

use log::debug;
use tokio::sync::watch;

use crate::error::{ApiError, Result};

/// Creates a connected handle/token pair.
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

/// Owner side: signals cancellation.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.tx.subscribe(),
        }
    }
}

/// Observer side, cheap to clone into each request.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancelled. Never resolves if the handle is dropped
    /// without cancelling.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        let closed = rx.wait_for(|cancelled| *cancelled).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }
}

/// Runs `request` unless `token` is cancelled first.
pub async fn with_cancel<T, F>(token: &CancelToken, request: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if token.is_cancelled() {
        return Err(ApiError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!("Request cancelled before completion");
            Err(ApiError::Cancelled)
        }
        result = request => result,
    }
}
