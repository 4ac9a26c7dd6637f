//! Data models for the KAMIYO dashboard

pub mod account;
pub mod protocol;

pub use account::{
    ActivityEntry, ApiKeySummary, ApiKeysResponse, AuthStatus, Session, SubscriptionStatus,
    UsageSnapshot,
};
pub use protocol::{HealthSummary, LossStats, ProtocolStats, QualityDistribution, BUCKET_LABELS};
