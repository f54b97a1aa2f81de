use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::info;

use beacon::config::AnnouncerConfig;
use beacon::shutdown::shutdown_signal;
use beacon::{Announcer, InstanceId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr — stdout carries the announcement stream.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beacon=info".into()),
        )
        .init();

    let config = AnnouncerConfig::from_env().context("reading announcer configuration")?;
    let id = InstanceId::generate();

    info!(%id, interval_ms = config.interval.as_millis() as u64, "announcer starting");

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            shutdown_signal().await;
            info!("shutdown signal received");
            cancel.cancel();
        }
    });

    let announcer = Announcer::new(id, config.interval);
    announcer
        .run(std::io::stdout(), cancel)
        .await
        .context("writing announcement to stdout")?;

    Ok(())
}
