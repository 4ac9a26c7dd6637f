//! Privacy policy

use crate::components::Seo;
use kamiyo_core::content::PRIVACY_META;
use leptos::prelude::*;

const SECTIONS: [(&str, &str); 5] = [
    (
        "What we collect",
        "Your email address when you sign in, the API keys you create, and request metadata (endpoint and timestamp) for calls made with those keys.",
    ),
    (
        "Payments",
        "Payment verification reads public blockchain data. We never hold private keys and never see card details.",
    ),
    (
        "How we use it",
        "To authenticate you, enforce plan limits, show usage on your dashboard and settle escrowed payments.",
    ),
    (
        "Retention",
        "Usage history is kept for the history window of your plan. Account data is deleted within 30 days of closing your account.",
    ),
    (
        "Contact",
        "Questions about this policy can be sent to privacy@kamiyo.ai.",
    ),
];

#[component]
pub fn Privacy() -> impl IntoView {
    view! {
        <Seo meta=PRIVACY_META />
        <div class="page privacy-page">
            <div class="page-header">
                <h1 class="page-title">"Privacy Policy"</h1>
            </div>
            <section class="prose">
                {SECTIONS
                    .into_iter()
                    .map(|(heading, body)| {
                        view! {
                            <h2>{heading}</h2>
                            <p>{body}</p>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
