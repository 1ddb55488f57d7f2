// ============================================================================
// Server Module
// Thin HTTP transport over the calculator: HTML form + JSON API
// ============================================================================
//
// Routes:
// - GET  /          blank form
// - POST /          form submission (num1, num2, operation)
// - GET  /api/calc  JSON API (num1, num2, op)
// - GET  /health    liveness check

pub mod config;
pub mod dto;
pub mod error;
pub mod page;
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use routes::build_router;

use crate::engine::Calculator;
use crate::interfaces::LoggingEventHandler;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Start the server and run until Ctrl-C / SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    config.validate().map_err(ServerError::Config)?;
    let context = config.decimal_context().map_err(ServerError::Config)?;

    let calculator = Arc::new(Calculator::new(context, Arc::new(LoggingEventHandler)));
    let app = build_router(calculator);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

    tracing::info!(
        %address,
        precision = context.precision,
        display_scale = context.display_scale,
        "Calculator listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Calculator stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
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
