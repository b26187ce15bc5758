mod config;
mod index;

use std::path::Path;
use std::process::ExitCode;

use axum::routing::get;
use axum::Router;
use config::Config;
use dotenvy::dotenv;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

pub(crate) fn app(public_path: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index::get))
        .route("/touch/", get(index::get))
        .fallback_service(ServeDir::new(public_path))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::debug_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Error listening for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("Error listening for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::debug!("shutting down");
}

#[tokio::main]
async fn main() -> ExitCode {
    registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Error loading configuration: {error}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!("serving static files from {}", config.public_path.display());
    let app = app(&config.public_path);

    // Run the server
    let listener = match tokio::net::TcpListener::bind(config.address).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!("Error binding to {}: {error}", config.address);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!("listening on http://{}", config.address);
    if let Err(error) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
