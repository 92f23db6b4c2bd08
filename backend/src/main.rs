use std::future::IntoFuture;

use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

use shop_backend::{build_router, config::Config, error, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shop_backend=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    error::set_development(config.is_development());

    info!("╔══════════════════════════════════════╗");
    info!("║  Shop Backend  — Rust + Axum         ║");
    info!("║  catalog · simulated cart · metrics  ║");
    info!("╚══════════════════════════════════════╝");

    let addr = format!("{}:{}", config.host, config.port);
    let environment = config.environment.clone();

    let state = AppState::new(config);
    let app = build_router(state);

    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);
    info!("Products API: http://{}/api/products", addr);
    info!("Environment: {}", environment);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Exit promptly on SIGINT/SIGTERM; in-flight requests are not drained.
    tokio::select! {
        result = axum::serve(listener, app).into_future() => result?,
        name = shutdown_signal() => {
            let name = name?;
            info!(signal = name, "Termination signal received, shutting down");
        }
    }

    Ok(())
}

async fn shutdown_signal() -> anyhow::Result<&'static str> {
    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            Ok("SIGINT")
        }
        _ = sigterm.recv() => Ok("SIGTERM"),
    }
}
