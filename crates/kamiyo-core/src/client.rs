//! Native HTTP client for the first-party API routes
//!
//! Used by the CLI. No retries and no request timeout: a failure is reported
//! once and the caller degrades.

use crate::api::{AccountApi, Endpoint, ProtocolApi};
use crate::error::{CoreError, Result};
use crate::models::{
    ApiKeySummary, ApiKeysResponse, HealthSummary, LossStats, ProtocolStats, SubscriptionStatus,
    UsageSnapshot,
};
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base: String,
}

impl HttpClient {
    /// `base` is the origin serving `/api/*`, e.g. `http://127.0.0.1:3000`
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base)
    }

    pub fn with_client(client: reqwest::Client, base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { client, base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T> {
        let path = endpoint.path();
        let url = format!("{}{}", self.base, path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .query(&endpoint.query())
            .send()
            .await
            .map_err(|e| CoreError::network(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::HttpStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CoreError::decode(path, e))
    }
}

impl AccountApi for HttpClient {
    async fn subscription_status(&self, email: &str) -> Result<Option<SubscriptionStatus>> {
        self.get_json(Endpoint::SubscriptionStatus { email }).await
    }

    async fn api_keys(&self, email: &str) -> Result<Vec<ApiKeySummary>> {
        let response: ApiKeysResponse = self.get_json(Endpoint::ApiKeys { email }).await?;
        Ok(response.api_keys)
    }

    async fn usage(&self, email: &str) -> Result<UsageSnapshot> {
        self.get_json(Endpoint::Usage { email }).await
    }
}

impl ProtocolApi for HttpClient {
    async fn protocol_stats(&self) -> Result<ProtocolStats> {
        self.get_json(Endpoint::ProtocolStats).await
    }

    async fn health(&self) -> Result<HealthSummary> {
        self.get_json(Endpoint::Health).await
    }

    async fn loss_stats(&self, days: u32) -> Result<LossStats> {
        self.get_json(Endpoint::LossStats { days }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_trailing_slash_is_trimmed() {
        let client = HttpClient::new("http://127.0.0.1:3000/");
        assert_eq!(client.base(), "http://127.0.0.1:3000");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) is not expected to accept HTTP on loopback
        let client = HttpClient::new("http://127.0.0.1:9");
        let err = client.health().await.unwrap_err();
        assert_eq!(err.class(), crate::error::ErrorClass::Transport);
    }
}
