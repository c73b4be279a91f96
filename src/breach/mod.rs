//! Breach check - k-anonymity lookup against the Pwned Passwords corpus.
//!
//! Only the first five hex characters of the password's SHA-1 leave the
//! process. The returned candidate set is scanned locally for the rest of
//! the hash.

mod config;
mod hash;
mod monitor;
mod response;
mod source;

pub use config::{BreachConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, ENDPOINT_VAR, TIMEOUT_VAR};
pub use hash::{HashRange, PREFIX_LEN, SUFFIX_LEN};
pub use monitor::{BreachMonitor, RequestToken};
pub use source::{HttpRangeSource, RangeSource};

use secrecy::SecretString;
use tokio_util::sync::CancellationToken;

use crate::error::BreachError;
use response::find_suffix;

/// Outcome of a completed breach check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreachResult {
    pub breached: bool,
    pub occurrence_count: u64,
}

impl BreachResult {
    fn not_breached() -> Self {
        Self {
            breached: false,
            occurrence_count: 0,
        }
    }
}

/// Checks passwords against a breach corpus through a [`RangeSource`].
#[derive(Debug, Clone)]
pub struct BreachChecker<S = HttpRangeSource> {
    source: S,
}

impl BreachChecker<HttpRangeSource> {
    /// Checker for the public service with default settings.
    pub fn new() -> Result<Self, BreachError> {
        Self::with_config(BreachConfig::default())
    }

    pub fn with_config(config: BreachConfig) -> Result<Self, BreachError> {
        Ok(Self::with_source(HttpRangeSource::new(config)?))
    }

    /// Checker configured from `PWD_BREACH_*` environment variables.
    pub fn from_env() -> Result<Self, BreachError> {
        Self::with_config(BreachConfig::from_env())
    }
}

impl<S: RangeSource> BreachChecker<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Looks up `password` in the breach corpus.
    ///
    /// # Arguments
    /// * `password` - The password to check
    /// * `token` - Optional cancellation token; cancelling abandons the
    ///   request and yields `BreachError::Cancelled`
    ///
    /// # Errors
    /// Transport failures, non-success statuses and malformed bodies are
    /// all errors. A failed check is never reported as "not breached".
    pub async fn check(
        &self,
        password: &SecretString,
        token: Option<CancellationToken>,
    ) -> Result<BreachResult, BreachError> {
        let range = HashRange::of(password);
        let fetch = self.source.fetch_range(range.prefix());

        let body = match token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!("breach check cancelled");
                        return Err(BreachError::Cancelled);
                    }
                    body = fetch => body?,
                }
            }
            None => fetch.await?,
        };

        // padded responses carry zero-count decoys
        match find_suffix(&body, range.suffix())? {
            Some(count) if count > 0 => Ok(BreachResult {
                breached: true,
                occurrence_count: count,
            }),
            _ => Ok(BreachResult::not_breached()),
        }
    }
}
