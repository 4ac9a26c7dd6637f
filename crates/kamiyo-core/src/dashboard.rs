//! Dashboard data-fetch lifecycle
//!
//! The dashboard reacts to the session signal:
//!
//! - `Pending`: loading placeholder, no requests
//! - `Unauthenticated`: redirect to sign-in, no requests
//! - `Authenticated`: subscription status and API keys are requested
//!   concurrently; usage statistics are requested only after the
//!   subscription resolves with a tier at or above the usage threshold
//!
//! Failures are logged and degrade locally. Only a failed or empty
//! subscription lookup replaces the dashboard body with a placeholder.

use crate::api::AccountApi;
use crate::models::{ActivityEntry, ApiKeySummary, AuthStatus, SubscriptionStatus, UsageSnapshot};
use crate::tier::{meets_minimum, Tier};
use tracing::{debug, warn};

/// Maximum recent-activity rows in the usage panel
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Placeholder shown when the subscription lookup fails
pub const UNAVAILABLE_MESSAGE: &str = "Unable to load subscription data";

/// Default sign-in location for unauthenticated visitors
pub const DEFAULT_SIGN_IN_URL: &str = "/api/auth/signin";

/// Page navigation, the only side effect besides network reads
pub trait Navigator {
    fn redirect(&self, location: &str);
}

/// Tunables for the dashboard lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Lowest tier that gets the usage-analytics panel
    pub usage_min_tier: Tier,
    pub recent_activity_limit: usize,
    pub sign_in_url: String,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            usage_min_tier: Tier::Team,
            recent_activity_limit: RECENT_ACTIVITY_LIMIT,
            sign_in_url: DEFAULT_SIGN_IN_URL.to_string(),
        }
    }
}

/// What to do for a given auth status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardStep {
    Wait,
    Redirect(String),
    Load(String),
}

impl DashboardStep {
    pub fn from_status(status: &AuthStatus, sign_in_url: &str) -> Self {
        match status {
            AuthStatus::Pending => DashboardStep::Wait,
            AuthStatus::Unauthenticated => DashboardStep::Redirect(sign_in_url.to_string()),
            AuthStatus::Authenticated { email } => DashboardStep::Load(email.clone()),
        }
    }
}

/// Everything the dashboard body renders
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub subscription: SubscriptionStatus,
    pub api_keys: Vec<ApiKeySummary>,
    /// `None` when the tier does not qualify or the usage fetch failed
    pub usage: Option<UsageSnapshot>,
    recent_limit: usize,
}

impl DashboardData {
    pub fn new(
        subscription: SubscriptionStatus,
        api_keys: Vec<ApiKeySummary>,
        usage: Option<UsageSnapshot>,
        recent_limit: usize,
    ) -> Self {
        Self {
            subscription,
            api_keys,
            usage,
            recent_limit: recent_limit.min(RECENT_ACTIVITY_LIMIT),
        }
    }

    pub fn tier(&self) -> Tier {
        self.subscription.tier
    }

    pub fn tier_label(&self) -> &'static str {
        self.subscription.tier.display_name()
    }

    pub fn subscription_summary(&self) -> String {
        self.subscription.summary()
    }

    /// e.g. "3 Active"
    pub fn key_count_label(&self) -> String {
        format!("{} Active", self.api_keys.len())
    }

    /// Recent activity rows, capped at the configured limit and never more than five
    pub fn recent_activity(&self) -> &[ActivityEntry] {
        self.usage
            .as_ref()
            .map(|u| u.recent(self.recent_limit))
            .unwrap_or(&[])
    }
}

/// Render state of the dashboard page
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Loading,
    Redirecting(String),
    Unavailable,
    Ready(DashboardData),
}

impl DashboardView {
    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            DashboardView::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Drive one dashboard mount from the current auth status
///
/// Redirects through `navigator` for unauthenticated visitors. Every call
/// re-issues all requests; nothing is cached between mounts.
pub async fn run_dashboard<A, N>(
    status: &AuthStatus,
    api: &A,
    navigator: &N,
    options: &DashboardOptions,
) -> DashboardView
where
    A: AccountApi,
    N: Navigator + ?Sized,
{
    match DashboardStep::from_status(status, &options.sign_in_url) {
        DashboardStep::Wait => DashboardView::Loading,
        DashboardStep::Redirect(location) => {
            debug!(%location, "Unauthenticated, redirecting to sign-in");
            navigator.redirect(&location);
            DashboardView::Redirecting(location)
        }
        DashboardStep::Load(email) => load_dashboard(api, &email, options).await,
    }
}

/// Fetch everything the dashboard needs for `email`
pub async fn load_dashboard<A: AccountApi>(
    api: &A,
    email: &str,
    options: &DashboardOptions,
) -> DashboardView {
    let subscription_then_usage = async {
        let subscription = match api.subscription_status(email).await {
            Ok(Some(subscription)) => subscription,
            Ok(None) => {
                warn!(email, "Subscription lookup returned no data");
                return None;
            }
            Err(e) => {
                warn!(email, error = %e, "Failed to fetch subscription status");
                return None;
            }
        };

        if !meets_minimum(subscription.tier, options.usage_min_tier) {
            debug!(tier = %subscription.tier, "Tier below usage threshold, skipping usage");
            return Some((subscription, None));
        }

        let usage = match api.usage(email).await {
            Ok(usage) => Some(usage),
            Err(e) => {
                warn!(email, error = %e, "Failed to fetch usage statistics");
                None
            }
        };
        Some((subscription, usage))
    };

    let api_keys = async {
        api.api_keys(email).await.unwrap_or_else(|e| {
            warn!(email, error = %e, "Failed to fetch API keys");
            Vec::new()
        })
    };

    let (subscription, api_keys) = futures::join!(subscription_then_usage, api_keys);

    match subscription {
        Some((subscription, usage)) => DashboardView::Ready(DashboardData::new(
            subscription,
            api_keys,
            usage,
            options.recent_activity_limit,
        )),
        None => DashboardView::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_from_status() {
        assert_eq!(
            DashboardStep::from_status(&AuthStatus::Pending, "/signin"),
            DashboardStep::Wait
        );
        assert_eq!(
            DashboardStep::from_status(&AuthStatus::Unauthenticated, "/signin"),
            DashboardStep::Redirect("/signin".into())
        );
        assert_eq!(
            DashboardStep::from_status(
                &AuthStatus::Authenticated {
                    email: "dev@kamiyo.ai".into()
                },
                "/signin"
            ),
            DashboardStep::Load("dev@kamiyo.ai".into())
        );
    }

    #[test]
    fn test_recent_activity_without_usage_is_empty() {
        let data = DashboardData::new(
            SubscriptionStatus {
                tier: Tier::Pro,
                is_subscribed: true,
            },
            Vec::new(),
            None,
            RECENT_ACTIVITY_LIMIT,
        );
        assert!(data.recent_activity().is_empty());
        assert_eq!(data.key_count_label(), "0 Active");
        assert_eq!(data.tier_label(), "Pro");
    }

    #[test]
    fn test_recent_activity_never_exceeds_five() {
        let usage = UsageSnapshot {
            recent_activity: (0..7)
                .map(|i| ActivityEntry {
                    endpoint: format!("/v1/call/{i}"),
                    timestamp: chrono::Utc::now(),
                })
                .collect(),
            ..UsageSnapshot::default()
        };
        let data = DashboardData::new(
            SubscriptionStatus {
                tier: Tier::Team,
                is_subscribed: true,
            },
            Vec::new(),
            Some(usage),
            50,
        );
        assert_eq!(data.recent_activity().len(), RECENT_ACTIVITY_LIMIT);
        assert_eq!(data.recent_activity()[0].endpoint, "/v1/call/0");
    }
}
