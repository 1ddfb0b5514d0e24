use axum::{
    routing::{get, post},
    Router,
};

use super::{handlers, AppState};

/// Envelope API routes
///
/// The static `transfer` segment wins over `{category}`, so POSTs to
/// `/{user}/envelopes/transfer` are always transfers.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/{user}/envelopes", get(handlers::list_envelopes))
        .route("/{user}/envelopes/transfer", post(handlers::transfer))
        .route(
            "/{user}/envelopes/{category}",
            get(handlers::get_envelope)
                .post(handlers::create_envelope)
                .patch(handlers::update_envelope)
                .delete(handlers::delete_envelope),
        )
}
