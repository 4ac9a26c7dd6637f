//! Main Leptos App component with SPA router

use kamiyo_core::KamiyoConfig;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{Footer, Header, Placeholder, PlaceholderKind};
use crate::context::{MenuProvider, SessionProvider};
use crate::pages::{About, Dashboard, Docs, Home, Pricing, Privacy};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    // The browser build has no config file; defaults match the server routes
    provide_context(KamiyoConfig::default());

    view! {
        <SessionProvider>
            <Router>
                <MenuProvider>
                    <div class="app">
                        <Header />
                        <main class="content">
                            <Routes fallback=NotFound>
                                <Route path=path!("/") view=Home />
                                <Route path=path!("/about") view=About />
                                <Route path=path!("/pricing") view=Pricing />
                                <Route path=path!("/docs") view=Docs />
                                <Route path=path!("/privacy") view=Privacy />
                                <Route path=path!("/dashboard") view=Dashboard />
                            </Routes>
                        </main>
                        <Footer />
                    </div>
                </MenuProvider>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <Placeholder kind=PlaceholderKind::Empty message="Page not found" />
            <A href="/" attr:class="button">"Back to home"</A>
        </div>
    }
}
