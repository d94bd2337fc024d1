use axum::{extract::State, routing::post, Json, Router};
use medicare_core::booking;
use medicare_schema::{AppointmentRequest, SubmissionOutcome};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit_appointment))
}

/// Rejection is reported in the body, not as an HTTP error: the form stays
/// open client-side for correction.
async fn submit_appointment(
    State(state): State<AppState>,
    Json(request): Json<AppointmentRequest>,
) -> Json<SubmissionOutcome> {
    Json(booking::submit(&state.clinic, &request))
}
