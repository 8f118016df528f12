//! payroll-calc: serves the payroll calculators over HTTP.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use payroll_calc::api::{AppState, create_router};
use payroll_calc::config::{ConfigLoader, SiteConfig};

/// Command-line arguments for payroll-calc
#[derive(Parser, Debug)]
#[command(name = "payroll-calc")]
#[command(about = "Payroll calculator API server")]
#[command(version)]
struct Args {
    /// Directory holding site.yaml and calculators.yaml
    #[arg(short, long, env = "PAYROLL_CALC_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080", env = "PAYROLL_CALC_BIND")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payroll_calc=info,analytics=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting payroll-calc v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(dir) => {
            info!("Loading configuration from {}", dir.display());
            ConfigLoader::load(dir)
                .with_context(|| format!("failed to load configuration from {}", dir.display()))?
                .into_config()
        }
        None => {
            info!("No configuration directory given, using built-in defaults");
            SiteConfig::default()
        }
    };

    info!(
        site = %config.site().name,
        locale = %config.formatting().locale,
        currency = %config.formatting().currency,
        analytics = config.analytics().enabled,
        "Configuration ready"
    );

    let app = create_router(AppState::from_config(config));

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!("payroll-calc listening on http://{}", args.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
