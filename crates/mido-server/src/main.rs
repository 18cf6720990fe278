mod api;
mod middleware;

use std::sync::Arc;

use mido_core::{AppConfig, Environment};
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Arc::new(mido_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    log_integrations(&config);

    let app = build_app(AppState::new(Arc::clone(&config)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        env = %config.env,
        variant = %config.scrape_variant,
        "mido-server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn log_integrations(config: &AppConfig) {
    let integrations = [
        ("auth", &config.auth),
        ("payments", &config.payments),
        ("database", &config.database),
    ];

    for (name, integration) in integrations {
        if integration.is_configured() {
            tracing::info!(integration = name, "integration configured");
        } else if config.env == Environment::Production {
            tracing::warn!(
                integration = name,
                "integration not configured in production; falling back to stub behaviour"
            );
        } else {
            tracing::debug!(integration = name, "integration not configured");
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
