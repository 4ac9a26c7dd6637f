//! Docs page - integration overview, refund schedule, endpoint reference

use crate::components::Seo;
use kamiyo_core::api::DEFAULT_LOSS_WINDOW_DAYS;
use kamiyo_core::content::{DOCS_META, REFUND_SCHEDULE};
use kamiyo_core::Endpoint;
use leptos::prelude::*;

#[component]
pub fn Docs() -> impl IntoView {
    let endpoints = [
        (Endpoint::PROTOCOL_STATS, "", "Protocol-wide assessment totals and quality distribution"),
        (Endpoint::SUBSCRIPTION_STATUS, "?email=", "Tier and subscription state for an account"),
        (Endpoint::API_KEYS, "?email=", "API keys issued to an account"),
        (Endpoint::USAGE, "?email=", "Request, payment and USDC totals with recent activity"),
        (Endpoint::HEALTH, "", "Data source health"),
        (Endpoint::LOSS_STATS, "?days=", "Total losses over a trailing window"),
    ];

    view! {
        <Seo meta=DOCS_META />
        <div class="page docs-page">
            <div class="page-header">
                <h1 class="page-title">"Documentation"</h1>
            </div>

            <section class="prose">
                <h2>"How it works"</h2>
                <ol>
                    <li>"Your API answers unpaid requests with HTTP 402 and a payment request."</li>
                    <li>"The buyer pays in USDC. KAMIYO verifies the transfer and holds it in escrow."</li>
                    <li>"Your API serves the response. Oracles score it from 0 to 100."</li>
                    <li>"Escrow settles: the provider is paid and the buyer refunded per the schedule below."</li>
                </ol>
            </section>

            <section class="card">
                <h2 class="card-title">"Refund schedule"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Quality score"</th>
                            <th>"Buyer refund"</th>
                            <th>"Provider receives"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {REFUND_SCHEDULE
                            .into_iter()
                            .map(|(range, refund)| {
                                view! {
                                    <tr>
                                        <td>{range}</td>
                                        <td>{format!("{}%", refund)}</td>
                                        <td>{format!("{}%", 100 - refund)}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </section>

            <section class="card">
                <h2 class="card-title">"API reference"</h2>
                <p class="card-hint">
                    {format!(
                        "All endpoints are GET and return JSON. /api/stats defaults to a {}-day window.",
                        DEFAULT_LOSS_WINDOW_DAYS,
                    )}
                </p>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Endpoint"</th>
                            <th>"Description"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {endpoints
                            .into_iter()
                            .map(|(path, query, description)| {
                                view! {
                                    <tr>
                                        <td><code>{format!("{}{}", path, query)}</code></td>
                                        <td>{description}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
