use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use medicare_core::ChatSession;
use medicare_schema::{Message, QuickAction};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/{id}/messages", get(get_messages).post(post_message))
        .route("/{id}/quick/{action}", post(post_quick_action))
}

#[derive(Serialize)]
pub struct SessionCreated {
    pub id: Uuid,
    pub messages: Vec<Message>,
}

#[derive(Deserialize)]
pub struct NewMessage {
    pub text: String,
}

async fn create_session(
    State(state): State<AppState>,
) -> Result<Json<SessionCreated>, StatusCode> {
    let session = ChatSession::new(&state.responder);
    let created = SessionCreated {
        id: session.id(),
        messages: session.transcript().all().to_vec(),
    };

    let mut sessions = state
        .sessions
        .write()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    sessions.insert(session.id(), session);
    tracing::info!(id = %created.id, "session created");
    Ok(Json(created))
}

async fn get_messages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Message>>, StatusCode> {
    let sessions = state
        .sessions
        .read()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(session.transcript().all().to_vec()))
}

async fn post_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<NewMessage>,
) -> Result<Json<Message>, StatusCode> {
    let mut sessions = state
        .sessions
        .write()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    let reply = session.handle_input(&state.responder, &body.text);
    Ok(Json(reply))
}

async fn post_quick_action(
    State(state): State<AppState>,
    Path((id, action)): Path<(Uuid, String)>,
) -> Result<Json<Message>, StatusCode> {
    let action: QuickAction = action.parse().map_err(|_| StatusCode::BAD_REQUEST)?;

    let mut sessions = state
        .sessions
        .write()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    let reply = session.handle_quick_action(&state.responder, action);
    Ok(Json(reply))
}
