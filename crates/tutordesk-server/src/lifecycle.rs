//! Server lifecycle: bind, serve, and shut down on a signal

use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tutordesk_core::errors::{ExError, ExErrorKind};

/// Serve `router` on `addr` until Ctrl+C or SIGTERM
///
/// In-flight requests are allowed to finish before this returns.
///
/// # Errors
///
/// `Io` when the address cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr, router: Router) -> Result<(), ExError> {
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("bind")
            .with_entity_id(addr.to_string())
            .with_message(e.to_string())
    })?;

    tracing::info!(%addr, "server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("serve")
                .with_message(e.to_string())
        })?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
