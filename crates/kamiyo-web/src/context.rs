//! Session and menu context providers
//!
//! Both are created when their provider mounts and torn down with the owner
//! that provided them. Pages reach them through `use_session` / `use_menu`.

use crate::api::BrowserClient;
use kamiyo_core::models::AuthStatus;
use kamiyo_core::Navigator;
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

/// Auth status shared with every page
#[derive(Clone, Copy)]
pub struct SessionContext {
    status: RwSignal<AuthStatus>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(AuthStatus::Pending),
        }
    }

    /// Tracked read of the current auth status
    pub fn status(&self) -> AuthStatus {
        self.status.get()
    }

    pub fn set(&self, status: AuthStatus) {
        self.status.set(status);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Looks up the session once at mount and publishes it
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new();
    provide_context(session);

    spawn_local(async move {
        let status = match BrowserClient::same_origin().session().await {
            Ok(s) => AuthStatus::from(s),
            Err(e) => {
                logging::warn!("Session lookup failed: {}", e);
                AuthStatus::Unauthenticated
            }
        };
        session.set(status);
    });

    children()
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Mobile navigation menu state
#[derive(Clone, Copy)]
pub struct MenuContext {
    open: RwSignal<bool>,
}

impl MenuContext {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|v| *v = !*v);
    }

    pub fn close(&self) {
        self.open.set(false);
    }
}

impl Default for MenuContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Menu provider; must sit inside the `Router` so it can close on navigation
#[component]
pub fn MenuProvider(children: Children) -> impl IntoView {
    let menu = MenuContext::new();
    provide_context(menu);

    let location = use_location();
    Effect::new(move |_| {
        let _ = location.pathname.get();
        menu.close();
    });

    children()
}

pub fn use_menu() -> MenuContext {
    expect_context::<MenuContext>()
}

/// Full-page navigation through `window.location`
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, location: &str) {
        if let Err(e) = window().location().set_href(location) {
            logging::error!("Redirect to {} failed: {:?}", location, e);
        }
    }
}
