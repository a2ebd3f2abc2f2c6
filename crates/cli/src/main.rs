use clap::{Parser, Subcommand};
use knockknock_domain::{BackendConfig, ConfigError, LoggingConfig, PollerConfig};
use knockknock_jobs::JobRunner;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "knockknock")]
#[command(version)]
#[command(about = "KnockKnock - who is home, judging by their devices' DNS traffic")]
struct Cli {
    /// Log level (trace, debug, info, warn, error); overrides LOG_LEVEL
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the REST backend
    Serve,
    /// Poll the Pi-hole query log and report sightings to the backend
    Poll,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => {
            let config = load(BackendConfig::from_env, cli.log_level, |c| &c.logging)?;
            serve(config).await
        }
        Command::Poll => {
            let config = load(PollerConfig::from_env, cli.log_level, |c| &c.logging)?;
            poll(config).await
        }
    }
}

/// Loads a config and starts logging at its level, unless `--log-level` overrides it.
/// A config that fails to load is still reported through the logger.
fn load<T>(
    loader: impl FnOnce() -> Result<T, ConfigError>,
    log_level: Option<String>,
    logging: impl FnOnce(&T) -> &LoggingConfig,
) -> anyhow::Result<T> {
    match loader() {
        Ok(config) => {
            bootstrap::init_logging(&effective_logging(logging(&config), log_level));
            Ok(config)
        }
        Err(e) => {
            bootstrap::init_logging(&effective_logging(&LoggingConfig::from_env(), log_level));
            error!(error = %e, "Invalid configuration");
            Err(anyhow::anyhow!(e))
        }
    }
}

fn effective_logging(config: &LoggingConfig, log_level: Option<String>) -> LoggingConfig {
    match log_level {
        Some(level) => LoggingConfig { level },
        None => config.clone(),
    }
}

async fn serve(config: BackendConfig) -> anyhow::Result<()> {
    info!("Starting KnockKnock backend v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;
    let repos = di::Repositories::new(pool);
    let state = repos.app_state(config.knock_active_secs);

    let shutdown = CancellationToken::new();
    tokio::spawn(bootstrap::shutdown_signal(shutdown.clone()));

    server::start_web_server(config.bind_address, state, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn poll(config: PollerConfig) -> anyhow::Result<()> {
    info!(
        pihole_host = %config.pihole_host,
        backend_host = %config.backend_host,
        frequency_minutes = config.frequency_minutes,
        "Starting KnockKnock poller v{}",
        env!("CARGO_PKG_VERSION")
    );

    let job = di::Poller::new(&config)?.into_job(&config);

    let shutdown = CancellationToken::new();
    tokio::spawn(bootstrap::shutdown_signal(shutdown.clone()));

    let handles = JobRunner::new()
        .with_sighting_poll(job)
        .with_shutdown_token(shutdown)
        .start()
        .await;

    for handle in handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Background job panicked");
        }
    }

    info!("Poller shutdown complete");
    Ok(())
}
