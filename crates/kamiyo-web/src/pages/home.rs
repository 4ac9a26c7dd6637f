//! Home page - hero, live protocol figures, feature overview

use crate::api::BrowserClient;
use crate::components::{Placeholder, PlaceholderKind, Seo, StatsCard};
use kamiyo_core::content::HOME_META;
use kamiyo_core::format::{format_number, format_usd};
use kamiyo_core::{load_landing_stats, KamiyoConfig, LandingStats};
use leptos::logging;
use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: [(&str, &str); 3] = [
    (
        "Verify every payment",
        "USDC transfers behind HTTP 402 responses are checked on-chain before your API serves the request.",
    ),
    (
        "Escrow by default",
        "Funds sit in escrow until the response is delivered, so buyers never pay for an outage.",
    ),
    (
        "Refunds on bad quality",
        "Independent oracles score each response. Low scores refund the buyer automatically.",
    ),
];

#[component]
pub fn Home() -> impl IntoView {
    let days = use_context::<KamiyoConfig>()
        .unwrap_or_default()
        .loss_window_days;

    let stats_resource = LocalResource::new(move || async move {
        let result = load_landing_stats(&BrowserClient::same_origin(), days).await;
        if let Err(e) = &result {
            logging::warn!("Failed to load landing stats: {}", e);
        }
        result
    });

    view! {
        <Seo meta=HOME_META />
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero-title">"Payment verification for x402 APIs"</h1>
                <p class="hero-subtitle">
                    "KAMIYO verifies crypto payments, holds them in escrow and refunds buyers when API quality falls short."
                </p>
                <div class="hero-actions">
                    <A href="/pricing" attr:class="button">"View pricing"</A>
                    <A href="/docs" attr:class="button button-secondary">"Read the docs"</A>
                </div>
            </section>

            <Suspense fallback=|| view! { <Placeholder kind=PlaceholderKind::Loading message="Loading live stats..." /> }>
                {move || {
                    stats_resource.with(|value| {
                        value.as_ref().map(|result| match result.as_ref() {
                            Ok(stats) => view! { <LandingFigures stats=stats.clone() /> }.into_any(),
                            Err(_) => view! {
                                <Placeholder kind=PlaceholderKind::Error message="Live stats are unavailable right now" />
                            }
                            .into_any(),
                        })
                    })
                }}
            </Suspense>

            <section class="features">
                {FEATURES
                    .into_iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="card feature-card">
                                <h3 class="card-title">{title}</h3>
                                <p>{body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}

#[component]
fn LandingFigures(stats: LandingStats) -> impl IntoView {
    let health = stats.health;
    view! {
        <div class="stats-grid">
            <StatsCard label="Exploits Tracked" value=format_number(health.database_exploits) />
            <StatsCard label="Chains Monitored" value=health.tracked_chains.to_string() />
            <StatsCard
                label="Active Sources"
                value=format!("{}/{}", health.active_sources, health.total_sources)
            />
            <StatsCard
                label=format!("Losses ({}d)", stats.window_days)
                value=format_usd(stats.losses.total_loss_usd)
            />
        </div>
    }
}
