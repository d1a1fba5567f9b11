/*
[INPUT]:  CLI arguments and YAML configuration file
[OUTPUT]: Interactive session against the remote task collection
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use taskdock_adapter::{TaskSynchronizer, TodoClient};
use taskdock_cli::cli::interactive;
use taskdock_cli::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "taskdock", version, about = "Terminal client for a hosted to-do collection")]
struct Cli {
    /// YAML configuration file; flags below override its values
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "owner", value_name = "NAME")]
    owner: Option<String>,
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let _log_guard = init_tracing(&args.log_level)?;

    let config = resolve_config(&args)?;
    info!(owner = %config.owner, base_url = %config.base_url, "starting taskdock");

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        println!("Configuration OK for owner \"{}\"", config.owner);
        return Ok(());
    }

    let client =
        TodoClient::with_config_and_base_url(config.client_config(), &config.base_url, &config.owner)
            .context("build HTTP client")?;
    let synchronizer = TaskSynchronizer::new(client);

    // A failed first load is not fatal: the loop starts on the empty list
    // and the failure shows up on the error banner.
    if let Err(err) = synchronizer.refresh().await {
        warn!(error = %err, "initial refresh failed");
    }

    interactive::run_interactive(synchronizer).await
}

fn resolve_config(args: &Cli) -> Result<AppConfig> {
    let mut config = match &args.config_path {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("load config from {}", path.display()))?,
        None => {
            let owner = args
                .owner
                .clone()
                .ok_or_else(|| anyhow!("either --config or --owner is required"))?;
            AppConfig::for_owner(owner)
        }
    };

    if let Some(owner) = &args.owner {
        config.owner = owner.clone();
    }
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    Ok(config)
}

/// Logs go to a rolling file so the interactive prompt stays clean.
fn init_tracing(log_level: &str) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskdock")
        .join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("create log directory {}", log_dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, "taskdock.log"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}
