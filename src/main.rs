//! Purchase intent service.
//!
//! Trains a random forest on the purchase dataset at startup, then answers
//! `GET /predict-purchase-intent` with `{"message": "Purchase" | "No Purchase"}`.

use anyhow::Context;
use clap::Parser;
use purchase_intent::config::{AppConfig, config_schema, load_config};
use purchase_intent::server::{AppState, build_router};
use purchase_intent::tasks::TrainingPipeline;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "purchase-intent",
    version,
    about = "Train a purchase-intent classifier and serve predictions over HTTP."
)]
struct Cli {
    /// JSON config file; defaults are used when absent.
    #[arg(long, env = "PURCHASE_INTENT_CONFIG")]
    config: Option<PathBuf>,

    /// Overrides `dataset_path` from the config.
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Overrides `listen_addr` from the config.
    #[arg(long)]
    listen: Option<String>,

    /// Print the config JSON Schema and exit.
    #[arg(long)]
    print_config_schema: bool,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!(path = %path.display(), "loading configuration from file");
                load_config(path)?
            }
            None => {
                info!("no config file specified, using defaults");
                AppConfig::default()
            }
        };
        if let Some(dataset) = &self.dataset {
            config.dataset_path = dataset.clone();
        }
        if let Some(listen) = &self.listen {
            config.listen_addr = listen.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("purchase_intent=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    if cli.print_config_schema {
        println!("{}", serde_json::to_string_pretty(&config_schema())?);
        return Ok(());
    }

    let config = cli.resolve_config()?;
    info!(
        dataset = %config.dataset_path.display(),
        listen_addr = %config.listen_addr,
        "starting purchase intent service"
    );

    let bundle = TrainingPipeline::new(&config.dataset_path, config.training.clone())
        .run_blocking()
        .await
        .with_context(|| format!("training on {} failed", config.dataset_path.display()))?;

    let app = build_router(Arc::new(AppState::new(Arc::new(bundle))));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.listen_addr))?;
    info!(listen_addr = %config.listen_addr, "ready, serving predictions");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
