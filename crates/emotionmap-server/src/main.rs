mod config;

use std::net::SocketAddr;

use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use emotionmap_api::AppStateInner;
use emotionmap_db::Database;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "emotionmap=debug,emotionmap_api=debug,emotionmap_db=info,tower_http=debug".into()
            }),
        )
        .init();

    let config = Config::from_env()?;
    if config.admin_token.is_none() {
        warn!("EMOTIONMAP_ADMIN_TOKEN is not set; /admin routes will refuse every request");
    }

    let db = Database::open(&config.db_path)?;
    let state = AppStateInner::new(db, config.admin_token);

    // Anything the API doesn't claim is served from the static directory
    let app = emotionmap_api::router(state)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("EmotionMap listening on http://{}", addr);
    info!("Serving static files from {}", config.static_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on the first of Ctrl+C or SIGTERM. If a handler cannot be
/// installed, that source never fires and the other one still works.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let source = first_stop_request(interrupt, terminate).await;
    info!("{} received, draining EmotionMap connections", source);
}

/// Name of whichever stop request resolves first.
async fn first_stop_request(
    interrupt: impl Future<Output = ()>,
    terminate: impl Future<Output = ()>,
) -> &'static str {
    tokio::select! {
        _ = interrupt => "Ctrl+C",
        _ = terminate => "SIGTERM",
    }
}

#[cfg(test)]
mod tests {
    use std::future::{pending, ready};

    use super::*;

    #[tokio::test]
    async fn stop_request_names_the_source_that_fired() {
        assert_eq!(first_stop_request(ready(()), pending()).await, "Ctrl+C");
        assert_eq!(first_stop_request(pending(), ready(())).await, "SIGTERM");
    }
}
