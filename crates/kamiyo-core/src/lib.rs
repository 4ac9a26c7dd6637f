//! kamiyo-core - Core library for the KAMIYO dashboard
//!
//! Provides tiers, models, the dashboard fetch lifecycle, the chart instance
//! lifecycle, static content and the account directory behind the API routes.

pub mod api;
pub mod chart;
#[cfg(feature = "native")]
pub mod client;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod directory;
pub mod email;
pub mod error;
pub mod format;
pub mod models;
pub mod tier;

pub use api::{load_landing_stats, AccountApi, Endpoint, LandingStats, ProtocolApi};
pub use chart::{ChartBackend, ChartSlot};
#[cfg(feature = "native")]
pub use client::HttpClient;
pub use config::KamiyoConfig;
pub use dashboard::{
    load_dashboard, run_dashboard, DashboardData, DashboardOptions, DashboardStep, DashboardView,
    Navigator,
};
pub use directory::{AccountDirectory, AccountRecord, DirectorySeed};
pub use error::{CoreError, ErrorClass};
pub use tier::{meets_minimum, Tier};
