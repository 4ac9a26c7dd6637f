//! Account-scoped models: session, subscription, API keys, usage
//!
//! Field names follow the JSON served by the `/api/subscription`, `/api/user`
//! and `/api/usage` routes (camelCase).

use crate::tier::Tier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signed-in session as exposed by the session provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_email: String,
    pub authenticated: bool,
}

/// Authentication signal observed by pages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthStatus {
    /// Session lookup still in flight
    #[default]
    Pending,
    Authenticated {
        email: String,
    },
    Unauthenticated,
}

impl AuthStatus {
    pub fn email(&self) -> Option<&str> {
        match self {
            AuthStatus::Authenticated { email } => Some(email),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated { .. })
    }
}

impl From<Option<Session>> for AuthStatus {
    fn from(session: Option<Session>) -> Self {
        match session {
            Some(s) if s.authenticated && !s.user_email.is_empty() => AuthStatus::Authenticated {
                email: s.user_email,
            },
            _ => AuthStatus::Unauthenticated,
        }
    }
}

/// Billing snapshot for one account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    #[serde(default)]
    pub tier: Tier,
    #[serde(default)]
    pub is_subscribed: bool,
}

impl SubscriptionStatus {
    /// One-line summary shown under the tier name
    pub fn summary(&self) -> String {
        match (self.is_subscribed, self.tier) {
            (true, tier) => format!("Active {} subscription", tier.display_name()),
            (false, Tier::Free) => "Free plan".to_string(),
            (false, tier) => format!("{} plan (inactive)", tier.display_name()),
        }
    }
}

/// Display-only API key summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeySummary {
    pub id: String,
    #[serde(default, alias = "name")]
    pub label: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// API key list payload
///
/// Older deployments answer with `keys` instead of `apiKeys`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeysResponse {
    #[serde(default, alias = "keys")]
    pub api_keys: Vec<ApiKeySummary>,
}

/// One recent API call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub endpoint: String,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate API call/payment counts over a trailing window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    #[serde(default)]
    pub total_requests: u64,
    #[serde(default)]
    pub total_payments: u64,
    #[serde(default, rename = "totalUSDC")]
    pub total_usdc: f64,
    #[serde(default)]
    pub daily_average: f64,
    #[serde(default)]
    pub recent_activity: Vec<ActivityEntry>,
}

impl UsageSnapshot {
    /// At most `limit` most recent entries, in payload order
    pub fn recent(&self, limit: usize) -> &[ActivityEntry] {
        let end = self.recent_activity.len().min(limit);
        &self.recent_activity[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_keys_accepts_both_field_names() {
        let new: ApiKeysResponse =
            serde_json::from_str(r#"{"apiKeys":[{"id":"k1","label":"ci"}]}"#).unwrap();
        let old: ApiKeysResponse =
            serde_json::from_str(r#"{"keys":[{"id":"k1","name":"ci"}]}"#).unwrap();
        assert_eq!(new.api_keys, old.api_keys);
        assert_eq!(new.api_keys[0].label, "ci");
    }

    #[test]
    fn test_usage_snapshot_wire_names() {
        let json = r#"{
            "totalRequests": 120,
            "totalPayments": 4,
            "totalUSDC": 12.5,
            "dailyAverage": 17.1,
            "recentActivity": [
                {"endpoint": "/v1/verify", "timestamp": "2026-10-01T12:00:00Z"}
            ]
        }"#;
        let usage: UsageSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(usage.total_requests, 120);
        assert_eq!(usage.total_usdc, 12.5);
        assert_eq!(usage.recent_activity.len(), 1);
        assert_eq!(usage.recent(5).len(), 1);
    }

    #[test]
    fn test_subscription_summary() {
        let sub = SubscriptionStatus {
            tier: Tier::Team,
            is_subscribed: true,
        };
        assert_eq!(sub.summary(), "Active Team subscription");
        let free = SubscriptionStatus {
            tier: Tier::Free,
            is_subscribed: false,
        };
        assert_eq!(free.summary(), "Free plan");
    }

    #[test]
    fn test_auth_status_from_session() {
        let session = Session {
            user_email: "dev@kamiyo.ai".into(),
            authenticated: true,
        };
        assert_eq!(
            AuthStatus::from(Some(session)).email(),
            Some("dev@kamiyo.ai")
        );
        assert_eq!(AuthStatus::from(None), AuthStatus::Unauthenticated);
    }
}
