//! Pricing page

use crate::components::{Faq, PricingTable, Seo};
use kamiyo_core::content::PRICING_META;
use leptos::prelude::*;

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <Seo meta=PRICING_META />
        <div class="page pricing-page">
            <div class="page-header">
                <h1 class="page-title">"Pricing"</h1>
                <p class="page-subtitle">"Start free. Upgrade when your API traffic grows."</p>
            </div>
            <PricingTable />
            <Faq />
        </div>
    }
}
