use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerSettings;
use crate::error::SupportError;

pub async fn bind(server: &ServerSettings) -> Result<TcpListener, SupportError> {
    let address = server.address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!(%address, error = %e, "failed to bind listener");
        e
    })?;
    Ok(listener)
}

/// Serve `app` on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    if let Ok(address) = listener.local_addr() {
        tracing::info!(%address, "listening");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server runs until the task is dropped.
            tracing::warn!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
