//! kamiyo-web - Web frontend for KAMIYO using Leptos + Axum

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod chart;
pub mod components;
pub mod context;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::{create_app, create_router};

#[cfg(feature = "ssr")]
use kamiyo_core::AccountDirectory;
#[cfg(feature = "ssr")]
use std::{net::SocketAddr, path::PathBuf, sync::Arc};

/// Run the web server
#[cfg(feature = "ssr")]
pub async fn run(
    directory: Arc<AccountDirectory>,
    port: u16,
    dist: Option<PathBuf>,
) -> anyhow::Result<()> {
    let router = create_app(directory, dist);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Web server listening on http://{}", addr);
    println!("Web server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
