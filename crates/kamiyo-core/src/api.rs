//! First-party API surface shared by the browser client, the native client
//! and the Axum routes

use crate::error::Result;
use crate::models::{
    ApiKeySummary, HealthSummary, LossStats, ProtocolStats, SubscriptionStatus, UsageSnapshot,
};

/// Default trailing window for `/api/stats`
pub const DEFAULT_LOSS_WINDOW_DAYS: u32 = 7;

/// A same-origin JSON endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    ProtocolStats,
    SubscriptionStatus { email: &'a str },
    ApiKeys { email: &'a str },
    Usage { email: &'a str },
    Health,
    LossStats { days: u32 },
}

impl Endpoint<'_> {
    pub const PROTOCOL_STATS: &'static str = "/api/protocol-stats";
    pub const SUBSCRIPTION_STATUS: &'static str = "/api/subscription/status";
    pub const API_KEYS: &'static str = "/api/user/api-keys";
    pub const USAGE: &'static str = "/api/usage";
    pub const HEALTH: &'static str = "/api/health";
    pub const LOSS_STATS: &'static str = "/api/stats";

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::ProtocolStats => Self::PROTOCOL_STATS,
            Endpoint::SubscriptionStatus { .. } => Self::SUBSCRIPTION_STATUS,
            Endpoint::ApiKeys { .. } => Self::API_KEYS,
            Endpoint::Usage { .. } => Self::USAGE,
            Endpoint::Health => Self::HEALTH,
            Endpoint::LossStats { .. } => Self::LOSS_STATS,
        }
    }

    /// Query parameters, unencoded; the HTTP client encodes them
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::SubscriptionStatus { email }
            | Endpoint::ApiKeys { email }
            | Endpoint::Usage { email } => vec![("email", (*email).to_string())],
            Endpoint::LossStats { days } => vec![("days", days.to_string())],
            Endpoint::ProtocolStats | Endpoint::Health => Vec::new(),
        }
    }
}

/// Account-scoped reads consumed by the dashboard
///
/// Futures are not required to be `Send`: the browser client runs on the
/// single-threaded WASM executor.
#[allow(async_fn_in_trait)]
pub trait AccountApi {
    /// `Ok(None)` when the billing service has no record for the account
    async fn subscription_status(&self, email: &str) -> Result<Option<SubscriptionStatus>>;

    async fn api_keys(&self, email: &str) -> Result<Vec<ApiKeySummary>>;

    async fn usage(&self, email: &str) -> Result<UsageSnapshot>;
}

/// Protocol-wide reads consumed by the marketing pages
#[allow(async_fn_in_trait)]
pub trait ProtocolApi {
    async fn protocol_stats(&self) -> Result<ProtocolStats>;

    async fn health(&self) -> Result<HealthSummary>;

    async fn loss_stats(&self, days: u32) -> Result<LossStats>;
}

/// Figures for the home page hero
#[derive(Debug, Clone, PartialEq)]
pub struct LandingStats {
    pub health: HealthSummary,
    pub losses: LossStats,
    pub window_days: u32,
}

/// Health and trailing-window losses, fetched together
///
/// Best-effort: either failure fails the whole load and the page shows its
/// fallback.
pub async fn load_landing_stats<P: ProtocolApi>(api: &P, days: u32) -> Result<LandingStats> {
    let (health, losses) = futures::join!(api.health(), api.loss_stats(days));
    Ok(LandingStats {
        health: health?,
        losses: losses?,
        window_days: days,
    })
}
