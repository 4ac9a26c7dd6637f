//! kamiyo - KAMIYO dashboard server and account CLI

mod cli;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use kamiyo_core::dashboard::UNAVAILABLE_MESSAGE;
use kamiyo_core::email::normalize_email;
use kamiyo_core::{
    load_dashboard, load_landing_stats, AccountDirectory, DashboardView, HttpClient, KamiyoConfig,
    ProtocolApi,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_API_BASE: &str = "http://127.0.0.1:3000";

#[derive(Parser)]
#[command(
    name = "kamiyo",
    version,
    about = "KAMIYO dashboard server and account CLI",
    long_about = "Serves the KAMIYO API routes (and the compiled web frontend), and reads\n\
                  account and protocol data from a running server.\n\
                  \n\
                  Examples:\n\
                    kamiyo serve --seed accounts.json            # API only\n\
                    kamiyo serve --dist crates/kamiyo-web/dist   # API + frontend\n\
                    kamiyo dashboard --email dev@kamiyo.ai       # Account summary\n\
                    kamiyo stats --json                          # Protocol figures as JSON\n\
                    kamiyo tiers                                 # Plan comparison\n\
                  \n\
                  Environment Variables:\n\
                    KAMIYO_API_BASE                 # Server origin for client commands\n\
                    KAMIYO_CONFIG                   # Config file path\n\
                    RUST_LOG                        # Log filter (default: kamiyo=info)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Origin serving /api/* (default: config api_base, then http://127.0.0.1:3000)
    #[arg(long, global = true, env = "KAMIYO_API_BASE")]
    api_base: Option<String>,

    /// Config file (default: <config dir>/kamiyo/config.toml)
    #[arg(long, global = true, env = "KAMIYO_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Port for the web server
        #[arg(long, default_value = "3000")]
        port: u16,
        /// JSON file with accounts, protocol stats, health and losses
        #[arg(long)]
        seed: Option<PathBuf>,
        /// Trunk dist/ directory to serve the frontend from
        #[arg(long)]
        dist: Option<PathBuf>,
    },
    /// Show subscription, API keys and usage for an account
    Dashboard {
        /// Account email
        #[arg(long)]
        email: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show protocol statistics and health
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List subscription tiers and plans
    Tiers,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kamiyo=info,kamiyo_core=info,kamiyo_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = KamiyoConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let api_base = cli
        .api_base
        .or_else(|| (!config.api_base.is_empty()).then(|| config.api_base.clone()))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    match cli.command {
        Command::Serve { port, seed, dist } => run_serve(port, seed, dist).await?,
        Command::Dashboard { email, json } => {
            run_dashboard_cmd(&config, &api_base, &email, json).await?
        }
        Command::Stats { json } => run_stats(&config, &api_base, json).await?,
        Command::Tiers => println!("{}", cli::format_tiers()),
    }

    Ok(())
}

async fn run_serve(port: u16, seed: Option<PathBuf>, dist: Option<PathBuf>) -> Result<()> {
    let directory = match seed {
        Some(path) => AccountDirectory::load(&path)
            .with_context(|| format!("Failed to load seed file {}", path.display()))?,
        None => {
            info!("No seed file given, starting with an empty account directory");
            AccountDirectory::new()
        }
    };

    let dist = dist.filter(|d| {
        let ok = d.join("index.html").exists();
        if !ok {
            tracing::warn!(dist = %d.display(), "No index.html in dist directory, serving API only");
        }
        ok
    });

    if dist.is_some() {
        println!("Backend API + Frontend: http://localhost:{}", port);
    } else {
        println!("Backend API only:       http://localhost:{}/api/*", port);
        println!("   Run 'trunk build' in crates/kamiyo-web and pass --dist to serve the frontend");
    }

    kamiyo_web::run(Arc::new(directory), port, dist).await
}

async fn run_dashboard_cmd(
    config: &KamiyoConfig,
    api_base: &str,
    email: &str,
    json: bool,
) -> Result<()> {
    let email = normalize_email(email).context("Invalid --email")?;
    let client = HttpClient::new(api_base);
    let options = config.dashboard_options();

    match load_dashboard(&client, &email, &options).await {
        DashboardView::Ready(data) => {
            println!(
                "{}",
                cli::format_dashboard(&email, &data, options.usage_min_tier, json)
            );
            Ok(())
        }
        _ => bail!("{} from {}", UNAVAILABLE_MESSAGE, api_base),
    }
}

async fn run_stats(config: &KamiyoConfig, api_base: &str, json: bool) -> Result<()> {
    let client = HttpClient::new(api_base);

    let (protocol, landing) = futures::join!(
        client.protocol_stats(),
        load_landing_stats(&client, config.loss_window_days)
    );
    let protocol = protocol.context("Failed to fetch protocol stats")?;
    let landing = landing.context("Failed to fetch health and loss stats")?;

    println!("{}", cli::format_stats(&protocol, &landing, json));
    Ok(())
}
