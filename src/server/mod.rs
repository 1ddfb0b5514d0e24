//! HTTP interface for the envelope store.
//!
//! # Responsibilities
//! - Build the axum router with all envelope routes
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener until Ctrl+C
//!
//! Handlers decode the body, make exactly one service call and render the
//! result. All state lives in the injected [`AppState`].

mod handlers;
pub mod response;
mod routes;

use std::sync::Arc;

use axum::{http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::services::TransferMode;
use crate::storage::EnvelopeRepository;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<EnvelopeRepository>,
    pub transfer_mode: TransferMode,
}

impl AppState {
    pub fn new(storage: Arc<EnvelopeRepository>, transfer_mode: TransferMode) -> Self {
        Self {
            storage,
            transfer_mode,
        }
    }
}

/// Build the router with all middleware layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(routes::api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        let request_id = request
                            .headers()
                            .get("x-request-id")
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("-");
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id
                        )
                    }),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

/// Run the server on the given listener until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(
        address = %addr,
        transfer_mode = %state.transfer_mode,
        "HTTP server starting"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
