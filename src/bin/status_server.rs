use anyhow::Context;
use tracing::info;

use beacon::config::ServerConfig;
use beacon::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beacon=info,tower_http=warn".into()),
        )
        .init();

    let config = ServerConfig::from_env().context("reading server configuration")?;
    let addr = config.bind_addr();

    // Bind failure (port taken, permission denied) is fatal — no retry.
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(%addr, port = config.port, "status server listening");

    let trace_layer = tower_http::trace::TraceLayer::new_for_http()
        .make_span_with(tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO))
        .on_response(tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO));

    let app = beacon::api::status::router(config).layer(trace_layer);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("status server error")?;

    Ok(())
}
