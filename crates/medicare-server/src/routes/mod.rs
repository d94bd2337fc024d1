pub mod appointments;
pub mod clinic;
pub mod sessions;
pub mod slots;

use axum::Router;

use crate::state::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/clinic", clinic::router())
        .nest("/slots", slots::router())
        .nest("/sessions", sessions::router())
        .nest("/appointments", appointments::router())
}
