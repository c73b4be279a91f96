//! Caller-side tracking of in-flight breach checks.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::{BreachChecker, BreachResult, RangeSource};
use crate::error::BreachError;

/// Identifies one submitted check. Later submissions get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

struct Outcome {
    token: RequestToken,
    result: Result<BreachResult, BreachError>,
}

/// Runs breach checks in the background and keeps only the newest one.
///
/// Submitting a new password cancels the previous request; completions
/// that arrive for superseded tokens are discarded.
pub struct BreachMonitor<S = super::HttpRangeSource> {
    checker: Arc<BreachChecker<S>>,
    next: u64,
    current: Option<(RequestToken, CancellationToken)>,
    tx: mpsc::UnboundedSender<Outcome>,
    rx: mpsc::UnboundedReceiver<Outcome>,
}

impl<S: RangeSource + 'static> BreachMonitor<S> {
    pub fn new(checker: BreachChecker<S>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            checker: Arc::new(checker),
            next: 0,
            current: None,
            tx,
            rx,
        }
    }

    /// Starts a check for `password`, superseding any in-flight one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, password: &SecretString) -> RequestToken {
        self.cancel();

        self.next += 1;
        let token = RequestToken(self.next);
        let cancel = CancellationToken::new();

        let checker = Arc::clone(&self.checker);
        let password = SecretString::new(password.expose_secret().into());
        let tx = self.tx.clone();
        let child = cancel.clone();

        tokio::spawn(async move {
            let result = checker.check(&password, Some(child.clone())).await;
            drop(password);
            // superseded requests have nobody waiting on them
            if child.is_cancelled() {
                return;
            }
            if let Err(_e) = tx.send(Outcome { token, result }) {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send breach check result: {}", _e);
            }
        });

        self.current = Some((token, cancel));
        token
    }

    /// Token of the request whose result is still wanted.
    pub fn current(&self) -> Option<RequestToken> {
        self.current.as_ref().map(|(token, _)| *token)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current() == Some(token)
    }

    /// Abandons the in-flight request, if any.
    pub fn cancel(&mut self) {
        if let Some((_token, cancel)) = self.current.take() {
            #[cfg(feature = "tracing")]
            tracing::debug!(token = _token.value(), "superseding breach check");
            cancel.cancel();
        }
    }

    /// Waits for the result of the current request.
    ///
    /// Returns `None` when nothing is in flight. Stale completions are
    /// dropped while waiting.
    pub async fn next_current(&mut self) -> Option<Result<BreachResult, BreachError>> {
        loop {
            let current = self.current()?;
            let outcome = self.rx.recv().await?;
            if outcome.token == current {
                self.current = None;
                return Some(outcome.result);
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(
                token = outcome.token.value(),
                "discarding stale breach check result"
            );
        }
    }
}
