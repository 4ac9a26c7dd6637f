//! Header with navigation, mobile menu toggle and session badge

use crate::context::{use_menu, use_session};
use kamiyo_core::models::AuthStatus;
use kamiyo_core::KamiyoConfig;
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/about", "About"),
    ("/pricing", "Pricing"),
    ("/docs", "Docs"),
    ("/dashboard", "Dashboard"),
    ("/privacy", "Privacy"),
];

#[component]
pub fn Header() -> impl IntoView {
    let menu = use_menu();
    let session = use_session();
    let sign_in_url = use_context::<KamiyoConfig>()
        .unwrap_or_default()
        .sign_in_url;

    view! {
        <header class="header">
            <A href="/" attr:class="logo">"KAMIYO"</A>

            <button
                class="hamburger"
                on:click=move |_| menu.toggle()
                aria-label="Toggle menu"
                aria-expanded=move || menu.is_open().to_string()
            >
                <span class="hamburger-icon">"☰"</span>
            </button>

            <nav class="nav" class:nav-open=move || menu.is_open()>
                <ul class="nav-list">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li class="nav-item">
                                    <A href=href attr:class="nav-link" on:click=move |_| menu.close()>
                                        {label}
                                    </A>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>

            <div class="header-session">
                {move || match session.status() {
                    AuthStatus::Authenticated { email } => {
                        view! { <span class="session-email">{email}</span> }.into_any()
                    }
                    AuthStatus::Unauthenticated => {
                        view! { <a class="button button-small" href=sign_in_url.clone()>"Sign in"</a> }
                            .into_any()
                    }
                    AuthStatus::Pending => view! { <span class="session-pending"></span> }.into_any(),
                }}
            </div>
        </header>
    }
}
