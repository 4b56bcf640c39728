//! Chokuretsu Wrapped HTTP API server.

use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use choku_wrapped::server::{AppState, Config, CorsConfig, init_logging, router};

/// Chokuretsu Wrapped HTTP API server.
#[derive(Parser, Debug)]
#[command(name = "choku-wrapped-server")]
#[command(about = "Collects Chokuretsu saves and serves community statistics")]
struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "choku-wrapped.toml")]
    config: PathBuf,

    /// Shared secret for the refresh endpoint. Overrides `[refresh] secret`.
    #[arg(long, env = "CHOKU_REFRESH_SECRET", hide_env_values = true)]
    refresh_secret: Option<String>,
}

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    if !config.enabled {
        return CorsLayer::new();
    }

    let mut cors = CorsLayer::new();

    if config.allow_origins.iter().any(|o| o == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .allow_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<_> = config
        .allow_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    let headers: Vec<_> = config
        .allow_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    cors = cors.allow_headers(headers);

    cors.max_age(Duration::from_secs(config.max_age))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration first (needed for logging setup)
    let mut config = Config::from_file(&args.config)?;
    if let Some(secret) = args.refresh_secret {
        config.refresh.secret = Some(secret);
    }
    let bind_addr = config.bind_addr();

    init_logging(&config.logging)?;

    tracing::info!(path = %config.storage.path.display(), "Opening record store");
    if let Some(backup_path) = &config.storage.backup_path {
        tracing::info!(path = %backup_path.display(), "Backing up uploads");
    } else {
        tracing::warn!("No backup_path configured; refresh is unavailable");
    }
    if config.refresh.secret.is_none() {
        tracing::warn!("No refresh secret configured; refresh is unavailable");
    }

    let state = AppState::from_config(&config)?;

    // Bring the snapshot in line with whatever records are on disk
    let service = state.service().clone();
    let stats = tokio::task::spawn_blocking(move || service.recompute()).await??;
    tracing::info!(submissions = stats.num_submissions, "Snapshot recomputed");

    let cors = build_cors_layer(&config.cors);
    if config.cors.enabled {
        tracing::info!(
            "CORS enabled with {} allowed origin(s)",
            config.cors.allow_origins.len()
        );
    } else {
        tracing::info!("CORS disabled (denying cross-origin requests)");
    }

    let app: Router = router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = bind_addr.parse()?;

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
