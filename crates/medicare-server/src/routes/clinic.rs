use axum::{extract::State, routing::get, Json, Router};
use medicare_core::ClinicInfo;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_clinic))
}

async fn get_clinic(State(state): State<AppState>) -> Json<ClinicInfo> {
    Json(state.clinic.as_ref().clone())
}
