//! Browser API client for the same-origin `/api/*` routes

use gloo_net::http::Request;
use kamiyo_core::api::{AccountApi, Endpoint, ProtocolApi};
use kamiyo_core::error::Result;
use kamiyo_core::models::{
    ApiKeySummary, ApiKeysResponse, HealthSummary, LossStats, ProtocolStats, Session,
    SubscriptionStatus, UsageSnapshot,
};
use kamiyo_core::CoreError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Session endpoint of the external auth provider
pub const SESSION_ENDPOINT: &str = "/api/auth/session";

/// gloo-net backed client; an empty base means same-origin
#[derive(Debug, Clone, Default)]
pub struct BrowserClient {
    base: String,
}

impl BrowserClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn same_origin() -> Self {
        Self::default()
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T> {
        let path = endpoint.path();
        let query = endpoint.query();
        get_json(
            &format!("{}{}", self.base, path),
            path,
            query.iter().map(|(k, v)| (*k, v.as_str())),
        )
        .await
    }

    /// Current auth session; `None` when signed out
    pub async fn session(&self) -> Result<Option<Session>> {
        let url = format!("{}{}", self.base, SESSION_ENDPOINT);
        let response: SessionResponse =
            get_json(&url, SESSION_ENDPOINT, std::iter::empty::<(&str, &str)>()).await?;
        Ok(response.into_session())
    }
}

async fn get_json<'a, T, Q>(url: &str, path: &str, query: Q) -> Result<T>
where
    T: DeserializeOwned,
    Q: IntoIterator<Item = (&'a str, &'a str)>,
{
    let response = Request::get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| CoreError::network(path, e))?;

    if !response.ok() {
        return Err(CoreError::HttpStatus {
            endpoint: path.to_string(),
            status: response.status(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| CoreError::decode(path, e))
}

/// Auth provider session payload: `{ "user": { "email": ... } }` or `{}`
#[derive(Debug, Default, Deserialize)]
struct SessionResponse {
    #[serde(default)]
    user: Option<SessionUser>,
}

#[derive(Debug, Deserialize)]
struct SessionUser {
    #[serde(default)]
    email: Option<String>,
}

impl SessionResponse {
    fn into_session(self) -> Option<Session> {
        let email = self.user?.email.filter(|e| !e.is_empty())?;
        Some(Session {
            user_email: email,
            authenticated: true,
        })
    }
}

impl AccountApi for BrowserClient {
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

impl ProtocolApi for BrowserClient {
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
    fn test_session_payload_parsing() {
        let signed_in: SessionResponse =
            serde_json::from_str(r#"{"user":{"email":"dev@kamiyo.ai","name":"Dev"}}"#).unwrap();
        assert_eq!(
            signed_in.into_session().map(|s| s.user_email),
            Some("dev@kamiyo.ai".to_string())
        );

        let signed_out: SessionResponse = serde_json::from_str("{}").unwrap();
        assert!(signed_out.into_session().is_none());

        let no_email: SessionResponse = serde_json::from_str(r#"{"user":{}}"#).unwrap();
        assert!(no_email.into_session().is_none());
    }
}
