//! In-memory account directory backing the first-party API routes
//!
//! Seeded from a JSON file at startup. Handlers read concurrently through
//! `parking_lot::RwLock`; writes only happen on (re)seeding.

use crate::api::{AccountApi, ProtocolApi};
use crate::email::normalize_email;
use crate::error::{CoreError, Result};
use crate::models::{
    ApiKeySummary, HealthSummary, LossStats, ProtocolStats, SubscriptionStatus, UsageSnapshot,
};
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Everything known about one account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub email: String,
    pub subscription: SubscriptionStatus,
    #[serde(default)]
    pub api_keys: Vec<ApiKeySummary>,
    #[serde(default)]
    pub usage: UsageSnapshot,
}

/// A recorded exploit loss, summed by `/api/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LossEvent {
    pub timestamp: DateTime<Utc>,
    pub amount_usd: f64,
}

/// On-disk seed format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorySeed {
    pub accounts: Vec<AccountRecord>,
    pub protocol: ProtocolStats,
    pub health: HealthSummary,
    pub losses: Vec<LossEvent>,
}

#[derive(Default)]
pub struct AccountDirectory {
    accounts: RwLock<HashMap<String, AccountRecord>>,
    protocol: RwLock<ProtocolStats>,
    health: RwLock<HealthSummary>,
    losses: RwLock<Vec<LossEvent>>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: DirectorySeed) -> Self {
        let directory = Self::new();
        directory.reseed(seed);
        directory
    }

    /// Read a JSON seed file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let seed: DirectorySeed =
            serde_json::from_str(&content).map_err(|e| CoreError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let directory = Self::from_seed(seed);
        info!(
            path = %path.display(),
            accounts = directory.account_count(),
            "Loaded account directory"
        );
        Ok(directory)
    }

    /// Replace all contents with `seed`
    ///
    /// Accounts with malformed emails are skipped.
    pub fn reseed(&self, seed: DirectorySeed) {
        let mut accounts = HashMap::with_capacity(seed.accounts.len());
        for mut record in seed.accounts {
            match normalize_email(&record.email) {
                Ok(email) => {
                    // Newest first, so the first N rows are the N most recent
                    record
                        .usage
                        .recent_activity
                        .sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                    record.email = email.clone();
                    accounts.insert(email, record);
                }
                Err(e) => tracing::warn!(error = %e, "Skipping seeded account"),
            }
        }

        *self.accounts.write() = accounts;
        *self.protocol.write() = seed.protocol;
        *self.health.write() = seed.health;
        *self.losses.write() = seed.losses;
    }

    pub fn upsert(&self, mut record: AccountRecord) -> Result<()> {
        let email = normalize_email(&record.email)?;
        record.email = email.clone();
        self.accounts.write().insert(email, record);
        Ok(())
    }

    pub fn account_count(&self) -> usize {
        self.accounts.read().len()
    }

    /// `Ok(None)` for unknown accounts
    pub fn subscription(&self, email: &str) -> Result<Option<SubscriptionStatus>> {
        let email = normalize_email(email)?;
        Ok(self.accounts.read().get(&email).map(|r| r.subscription))
    }

    /// Empty for unknown accounts
    pub fn api_keys(&self, email: &str) -> Result<Vec<ApiKeySummary>> {
        let email = normalize_email(email)?;
        Ok(self
            .accounts
            .read()
            .get(&email)
            .map(|r| r.api_keys.clone())
            .unwrap_or_default())
    }

    /// Zeroed for unknown accounts
    pub fn usage(&self, email: &str) -> Result<UsageSnapshot> {
        let email = normalize_email(email)?;
        Ok(self
            .accounts
            .read()
            .get(&email)
            .map(|r| r.usage.clone())
            .unwrap_or_default())
    }

    pub fn protocol_stats(&self) -> ProtocolStats {
        self.protocol.read().clone()
    }

    pub fn health(&self) -> HealthSummary {
        self.health.read().clone()
    }

    pub fn loss_stats(&self, days: u32) -> LossStats {
        self.loss_stats_at(days, Utc::now())
    }

    /// Losses recorded in the `days` before `now`
    ///
    /// A window reaching past the representable range covers all history.
    pub fn loss_stats_at(&self, days: u32, now: DateTime<Utc>) -> LossStats {
        let cutoff = Duration::try_days(i64::from(days))
            .and_then(|window| now.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let total_loss_usd = self
            .losses
            .read()
            .iter()
            .filter(|l| l.timestamp > cutoff && l.timestamp <= now)
            .map(|l| l.amount_usd)
            .sum();
        LossStats { total_loss_usd }
    }
}

impl AccountApi for AccountDirectory {
    async fn subscription_status(&self, email: &str) -> Result<Option<SubscriptionStatus>> {
        self.subscription(email)
    }

    async fn api_keys(&self, email: &str) -> Result<Vec<ApiKeySummary>> {
        AccountDirectory::api_keys(self, email)
    }

    async fn usage(&self, email: &str) -> Result<UsageSnapshot> {
        AccountDirectory::usage(self, email)
    }
}

impl ProtocolApi for AccountDirectory {
    async fn protocol_stats(&self) -> Result<ProtocolStats> {
        Ok(AccountDirectory::protocol_stats(self))
    }

    async fn health(&self) -> Result<HealthSummary> {
        Ok(AccountDirectory::health(self))
    }

    async fn loss_stats(&self, days: u32) -> Result<LossStats> {
        Ok(AccountDirectory::loss_stats(self, days))
    }
}
