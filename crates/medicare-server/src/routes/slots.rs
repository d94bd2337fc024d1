use axum::{routing::get, Json, Router};
use medicare_core::available_slots;
use medicare_schema::AvailableSlot;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_slots))
}

/// Availability is derived on every request from the current date; nothing
/// is reserved or decremented by bookings.
async fn list_slots() -> Json<Vec<AvailableSlot>> {
    Json(available_slots())
}
