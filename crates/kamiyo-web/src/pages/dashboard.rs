//! Dashboard page - subscription, API keys and usage analytics

use crate::api::BrowserClient;
use crate::components::{CardColor, Placeholder, PlaceholderKind, Seo, StatsCard};
use crate::context::{use_session, BrowserNavigator};
use kamiyo_core::content::DASHBOARD_META;
use kamiyo_core::dashboard::UNAVAILABLE_MESSAGE;
use kamiyo_core::format::{format_number, format_usdc};
use kamiyo_core::models::UsageSnapshot;
use kamiyo_core::{
    meets_minimum, run_dashboard, DashboardData, DashboardView, KamiyoConfig, Tier,
};
use leptos::prelude::*;

/// Dashboard page
///
/// Re-runs the whole fetch lifecycle whenever the auth status changes. A
/// result that arrives after the status moved on is dropped by the resource.
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();
    let options = use_context::<KamiyoConfig>()
        .unwrap_or_default()
        .dashboard_options();
    let usage_min_tier = options.usage_min_tier;

    let dashboard_resource = LocalResource::new(move || {
        let status = session.status();
        let options = options.clone();
        async move {
            run_dashboard(
                &status,
                &BrowserClient::same_origin(),
                &BrowserNavigator,
                &options,
            )
            .await
        }
    });

    view! {
        <Seo meta=DASHBOARD_META />
        <div class="page dashboard-page">
            <div class="page-header">
                <h1 class="page-title">"Dashboard"</h1>
            </div>

            <Suspense fallback=|| view! { <Placeholder kind=PlaceholderKind::Loading message="Loading dashboard..." /> }>
                {move || dashboard_resource.get().map(|view| dashboard_body(&view, usage_min_tier))}
            </Suspense>
        </div>
    }
}

fn dashboard_body(view: &DashboardView, usage_min_tier: Tier) -> AnyView {
    match view {
        DashboardView::Loading => view! {
            <Placeholder kind=PlaceholderKind::Loading message="Loading dashboard..." />
        }
        .into_any(),
        DashboardView::Redirecting(_) => view! {
            <Placeholder kind=PlaceholderKind::Loading message="Redirecting to sign in..." />
        }
        .into_any(),
        DashboardView::Unavailable => view! {
            <Placeholder kind=PlaceholderKind::Error message=UNAVAILABLE_MESSAGE />
        }
        .into_any(),
        DashboardView::Ready(data) => {
            view! { <DashboardReady data=data.clone() usage_min_tier=usage_min_tier /> }.into_any()
        }
    }
}

#[component]
fn DashboardReady(data: DashboardData, usage_min_tier: Tier) -> impl IntoView {
    let tier_color = if data.subscription.is_subscribed {
        CardColor::Accent
    } else {
        CardColor::Default
    };
    let recent = data.recent_activity().to_vec();

    view! {
        <div class="stats-grid">
            <StatsCard
                label="Plan"
                value=data.tier_label()
                hint=data.subscription_summary()
                color=tier_color
            />
            <StatsCard label="API Keys" value=data.key_count_label() />
        </div>

        {match data.usage.clone() {
            Some(usage) => view! { <UsagePanel usage=usage recent=recent /> }.into_any(),
            None if meets_minimum(data.tier(), usage_min_tier) => view! {
                <Placeholder kind=PlaceholderKind::Empty message="Usage analytics are unavailable right now" />
            }
            .into_any(),
            None => view! {
                <div class="card upgrade-card">
                    <p>
                        {format!(
                            "Usage analytics are available on the {} plan and above.",
                            usage_min_tier.display_name(),
                        )}
                    </p>
                    <a class="button" href="/pricing">"Compare plans"</a>
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn UsagePanel(
    usage: UsageSnapshot,
    recent: Vec<kamiyo_core::models::ActivityEntry>,
) -> impl IntoView {
    view! {
        <section class="usage-panel">
            <h2 class="section-title">"Usage analytics"</h2>
            <div class="stats-grid">
                <StatsCard label="Total Requests" value=format_number(usage.total_requests) />
                <StatsCard label="Payments Verified" value=format_number(usage.total_payments) />
                <StatsCard label="Volume" value=format_usdc(usage.total_usdc) color=CardColor::Green />
                <StatsCard label="Daily Average" value=format!("{:.1}", usage.daily_average) />
            </div>

            <div class="card">
                <div class="card-header">
                    <h3 class="card-title">"Recent activity"</h3>
                </div>
                {if recent.is_empty() {
                    view! { <Placeholder kind=PlaceholderKind::Empty message="No recent activity" /> }
                        .into_any()
                } else {
                    view! {
                        <table class="activity-table">
                            <thead>
                                <tr>
                                    <th>"Endpoint"</th>
                                    <th>"Time"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {recent
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <tr>
                                                <td class="activity-endpoint">{entry.endpoint}</td>
                                                <td>{entry.timestamp.format("%Y-%m-%d %H:%M UTC").to_string()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}
            </div>
        </section>
    }
}
