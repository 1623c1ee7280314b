//! Trust assessment HTTP server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use trust_assessment::adapters::{build_router, AssessmentAppState, TracingObserver};
use trust_assessment::application::ScoreAssessmentHandler;
use trust_assessment::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured default
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;

    if config.features.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    config.validate()?;
    let addr = config.server.socket_addr()?;

    let handler = Arc::new(ScoreAssessmentHandler::new(Arc::new(TracingObserver::new())));
    let state = AssessmentAppState::new(handler).with_verbose_errors(config.features.verbose_errors);
    let app = build_router(state, &config.server, config.features.enable_tracing)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        timeout_secs = config.server.request_timeout_secs,
        "Trust assessment server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
