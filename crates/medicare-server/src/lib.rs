pub mod routes;
pub mod state;

use anyhow::Result;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", routes::api_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("medicare-server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use medicare_core::ClinicInfo;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        create_router(AppState::new(ClinicInfo::default()))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn clinic_profile_is_served() {
        let response = app()
            .oneshot(Request::get("/api/clinic").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["name"], "MediCare Clínica Geral");
        assert_eq!(json["insurance"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn slots_listing_has_only_weekdays() {
        let response = app()
            .oneshot(Request::get("/api/slots").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let slots = json.as_array().unwrap();
        assert!(!slots.is_empty());
        assert!(slots.len() <= 25);
        assert!(slots.iter().all(|s| s["available"] == true));
    }

    #[tokio::test]
    async fn chat_turn_roundtrip() {
        let app = app();

        let response = app
            .clone()
            .oneshot(Request::post("/api/sessions").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["messages"].as_array().unwrap().len(), 1);

        let response = app
            .clone()
            .oneshot(
                Request::post(format!("/api/sessions/{id}/messages"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"text":"bom dia"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let reply = body_json(response).await;
        assert_eq!(reply["role"], "bot");
        assert_eq!(reply["content"], "Bom dia! Como posso ajudá-lo hoje?");

        let response = app
            .oneshot(
                Request::get(format!("/api/sessions/{id}/messages"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let transcript = body_json(response).await;
        assert_eq!(transcript.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unknown_session_is_404() {
        let response = app()
            .oneshot(
                Request::post(format!(
                    "/api/sessions/{}/messages",
                    uuid::Uuid::new_v4()
                ))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"text":"oi"}"#))
                .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn quick_action_turn() {
        let app = app();

        let response = app
            .clone()
            .oneshot(Request::post("/api/sessions").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::post(format!("/api/sessions/{id}/quick/book"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let reply = body_json(response).await;
        assert!(reply["content"]
            .as_str()
            .unwrap()
            .contains("Qual seu nome completo?"));

        let response = app
            .oneshot(
                Request::post(format!("/api/sessions/{id}/quick/nonsense"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn appointment_rejection_is_a_domain_outcome() {
        let response = app()
            .oneshot(
                Request::post("/api/appointments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"name":"","phone":"123","slot_label":"02/03/2026 - 09:00"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["missing"][0], "nome");
    }

    #[tokio::test]
    async fn appointment_confirmation_echoes_fields() {
        let response = app()
            .oneshot(
                Request::post("/api/appointments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"name":"Ana","phone":"11999999999","slot_label":"02/03/2026 - 09:00"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "confirmed");
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["phone"], "11999999999");
        assert!(json["instructions"].as_str().unwrap().contains("24h"));
    }
}
