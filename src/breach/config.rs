//! Breach service configuration.

use std::time::Duration;

/// Public range endpoint of the Pwned Passwords service.
pub const DEFAULT_ENDPOINT: &str = "https://api.pwnedpasswords.com/range";

/// Environment variable overriding the range endpoint.
pub const ENDPOINT_VAR: &str = "PWD_BREACH_ENDPOINT";

/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_VAR: &str = "PWD_BREACH_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for [`HttpRangeSource`](super::HttpRangeSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachConfig {
    /// Base URL; the hash prefix is appended as the last path segment.
    pub endpoint: String,
    pub timeout: Duration,
    /// Ask the service to pad responses with zero-count records.
    pub padding: bool,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            padding: false,
        }
    }
}

impl BreachConfig {
    /// Reads `PWD_BREACH_ENDPOINT` and `PWD_BREACH_TIMEOUT_SECS`, falling
    /// back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let endpoint = std::env::var(ENDPOINT_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout = std::env::var(TIMEOUT_VAR)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            endpoint,
            timeout,
            padding: false,
        }
    }

    pub(crate) fn range_url(&self, prefix: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), prefix)
    }
}
