//! Site footer

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-links">
                <A href="/docs" attr:class="footer-link">"Docs"</A>
                <A href="/pricing" attr:class="footer-link">"Pricing"</A>
                <A href="/privacy" attr:class="footer-link">"Privacy"</A>
            </div>
            <p class="footer-note">"KAMIYO - payment verification for x402 APIs"</p>
        </footer>
    }
}
