//! Pricing tiers grid

use kamiyo_core::content::{pricing_plans, PricingPlan};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PricingTable() -> impl IntoView {
    view! {
        <div class="pricing-grid">
            {pricing_plans()
                .into_iter()
                .map(|plan| view! { <PricingTierCard plan=plan /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn PricingTierCard(plan: PricingPlan) -> impl IntoView {
    let class = if plan.highlighted {
        "card pricing-card pricing-card--highlighted"
    } else {
        "card pricing-card"
    };
    let cta = if plan.price_monthly_usd == 0 {
        "Get started"
    } else {
        "Subscribe"
    };
    let features = plan.features();

    view! {
        <div class=class>
            {plan.highlighted.then(|| view! { <span class="pricing-badge">"Most popular"</span> })}
            <h3 class="pricing-card__name">{plan.tier.display_name()}</h3>
            <div class="pricing-card__price">{plan.price_label()}</div>
            <ul class="pricing-card__features">
                {features
                    .into_iter()
                    .map(|feature| view! { <li>{feature}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <A href="/dashboard" attr:class="button pricing-card__cta">{cta}</A>
        </div>
    }
}
