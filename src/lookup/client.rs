//! Upstream IP provider client wrapper.

use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::LookupError;

/// Client for the upstream IP provider.
#[derive(Debug, Clone)]
pub struct LookupClient {
    /// HTTP client for the outbound request.
    http: reqwest::Client,
    /// Upstream provider URL.
    lookup_url: String,
}

impl LookupClient {
    /// Create a new lookup client from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            // Total request timeout (default 5s)
            .timeout(std::time::Duration::from_millis(config.lookup_timeout_ms))
            // Keep connections alive for reuse
            .tcp_keepalive(std::time::Duration::from_secs(30))
            // Keep idle connections for 90 seconds
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            lookup_url: config.lookup_url.clone(),
        }
    }

    /// Get the upstream provider URL.
    pub fn lookup_url(&self) -> &str {
        &self.lookup_url
    }

    /// Fetch the public IP from the upstream provider.
    ///
    /// Issues exactly one GET and returns the raw response body verbatim.
    /// No format validation, no retries. A non-2xx upstream status is not
    /// treated as a failure; only transport-level errors are.
    #[instrument(skip(self))]
    pub async fn public_ip(&self) -> Result<String, LookupError> {
        debug!(url = %self.lookup_url, "Fetching public IP");

        let body = self
            .http
            .get(&self.lookup_url)
            .send()
            .await?
            .text()
            .await?;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(url: &str) -> Config {
        Config {
            port: 0,
            lookup_url: url.to_string(),
            lookup_timeout_ms: 1_000,
        }
    }

    #[test]
    fn client_records_configured_url() {
        let client = LookupClient::new(&test_config("http://127.0.0.1:9"));
        assert_eq!(client.lookup_url(), "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn connection_refused_maps_to_upstream_error() {
        // Nothing listens on the discard port.
        let client = LookupClient::new(&test_config("http://127.0.0.1:9"));

        let result = client.public_ip().await;
        assert!(matches!(result, Err(LookupError::Upstream(_))));
    }
}
