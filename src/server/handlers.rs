//! HTTP handlers: one service call per request.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::response::parse_body;
use super::AppState;
use crate::error::EnvelopeResult;
use crate::models::{BudgetInput, Envelope, EnvelopePatch, EnvelopeSet, TransferRequest};
use crate::services::{EnvelopeService, TransferService};

pub async fn health() -> &'static str {
    "ok"
}

pub async fn list_envelopes(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> EnvelopeResult<Json<EnvelopeSet>> {
    let envelopes = EnvelopeService::new(&state.storage).list_envelopes(&user)?;
    Ok(Json(envelopes))
}

pub async fn get_envelope(
    State(state): State<AppState>,
    Path((user, category)): Path<(String, String)>,
) -> EnvelopeResult<Json<Envelope>> {
    let envelope = EnvelopeService::new(&state.storage).get_envelope(&user, &category)?;
    Ok(Json(envelope))
}

pub async fn create_envelope(
    State(state): State<AppState>,
    Path((user, category)): Path<(String, String)>,
    body: Bytes,
) -> EnvelopeResult<(StatusCode, String)> {
    let input = BudgetInput::from_json(&parse_body(&body)?);
    let envelope =
        EnvelopeService::new(&state.storage).create_or_replace(&user, &category, input.budget)?;

    Ok((
        StatusCode::CREATED,
        format!(
            "Created envelope {} for {} with budget {}",
            category, user, envelope.budget
        ),
    ))
}

pub async fn update_envelope(
    State(state): State<AppState>,
    Path((user, category)): Path<(String, String)>,
    body: Bytes,
) -> EnvelopeResult<(StatusCode, String)> {
    let patch = EnvelopePatch::from_json(&parse_body(&body)?);
    let envelope = EnvelopeService::new(&state.storage).update_envelope(&user, &category, &patch)?;

    Ok((
        StatusCode::OK,
        format!("Updated envelope {} for {}: {}", category, user, envelope),
    ))
}

pub async fn delete_envelope(
    State(state): State<AppState>,
    Path((user, category)): Path<(String, String)>,
) -> EnvelopeResult<(StatusCode, String)> {
    EnvelopeService::new(&state.storage).delete_envelope(&user, &category)?;

    Ok((
        StatusCode::OK,
        format!("Deleted envelope {} for {}", category, user),
    ))
}

pub async fn transfer(
    State(state): State<AppState>,
    Path(user): Path<String>,
    body: Bytes,
) -> EnvelopeResult<(StatusCode, String)> {
    let request = TransferRequest::from_json(&parse_body(&body)?);
    let outcome =
        TransferService::with_mode(&state.storage, state.transfer_mode).transfer(&user, &request)?;

    Ok((
        StatusCode::OK,
        format!(
            "Transferred {} between {} and {} for {}",
            outcome.amount, outcome.category_from, outcome.category_to, user
        ),
    ))
}
