//! HTTP request handlers

use super::assets::{get_index_html, serve_static};
use super::sse::sse_stream;
use super::types::{
    ChatRequest, CreateSessionResponse, ErrorResponse, QueuedResponse, SessionResponse,
    SuccessResponse, VersionResponse,
};
use super::AppState;
use crate::content::{site_content, SiteContent};
use crate::runtime::{RuntimeError, SseEvent};
use crate::state_machine::Event;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root serves the page
        .route("/", get(serve_page))
        // Static assets (embedded or filesystem fallback)
        .route("/assets/*path", get(serve_static))
        // Page content
        .route("/api/content", get(get_content))
        // Session lifecycle
        .route("/api/sessions/new", post(create_session))
        .route("/api/sessions/:id", get(get_session))
        .route("/api/sessions/:id/end", post(end_session))
        // Streaming
        .route("/api/sessions/:id/stream", get(stream_session))
        // Page interactions
        .route("/api/sessions/:id/events", post(dispatch_event))
        .route("/api/sessions/:id/chat", post(send_chat))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Page
// ============================================================

async fn serve_page() -> impl IntoResponse {
    match get_index_html() {
        Some(content) => Html(content).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Html("<h1>404 - page assets missing</h1>".to_string()),
        )
            .into_response(),
    }
}

async fn get_content() -> Json<SiteContent> {
    Json(site_content())
}

// ============================================================
// Session Lifecycle
// ============================================================

async fn create_session(State(state): State<AppState>) -> Json<CreateSessionResponse> {
    let (id, session) = state.sessions.create().await;
    Json(CreateSessionResponse { id, session })
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.sessions.snapshot(&id).await?;
    Ok(Json(SessionResponse { session }))
}

async fn end_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.sessions.end(&id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================
// Streaming
// ============================================================

async fn stream_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (session, broadcast_rx) = state.sessions.subscribe(&id).await?;

    let init_event = SseEvent::Init {
        state: serde_json::to_value(&session).unwrap_or(Value::Null),
    };

    Ok(sse_stream(init_event, broadcast_rx))
}

// ============================================================
// Page Interactions
// ============================================================

async fn dispatch_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Event>, JsonRejection>,
) -> Result<Json<QueuedResponse>, AppError> {
    let Json(event) = body?;
    state.sessions.send_event(&id, event).await?;
    Ok(Json(QueuedResponse { queued: true }))
}

async fn send_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<QueuedResponse>, AppError> {
    let Json(req) = body?;
    state
        .sessions
        .send_event(&id, Event::Submit { text: req.text })
        .await?;
    Ok(Json(QueuedResponse { queued: true }))
}

async fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<RuntimeError> for AppError {
    fn from(e: RuntimeError) -> Self {
        match e {
            RuntimeError::SessionNotFound(_) => AppError::NotFound(e.to_string()),
            RuntimeError::SessionClosed(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::AssistantGateway;
    use crate::llm::testing::MockLlmService;
    use crate::runtime::SessionManager;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_app(mock: &Arc<MockLlmService>) -> (Arc<SessionManager>, Router) {
        let sessions = Arc::new(SessionManager::new(Arc::new(AssistantGateway::new(
            mock.clone(),
        ))));
        let router = create_router(AppState::new(sessions.clone()));
        (sessions, router)
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_content_endpoint() {
        let (_, app) = test_app(&Arc::new(MockLlmService::new()));
        let response = app
            .oneshot(Request::get("/api/content").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["services"].as_array().unwrap().len(), 7);
        assert_eq!(body["clinic"]["name"], "Renice Medical Centre");
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let (_, app) = test_app(&Arc::new(MockLlmService::new()));
        let response = app
            .oneshot(Request::get("/api/sessions/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("missing"));
    }

    #[tokio::test]
    async fn test_new_session_then_chat() {
        let mock = Arc::new(MockLlmService::new());
        mock.queue_text("We are open 24/7.");
        let (sessions, app) = test_app(&mock);

        let response = app
            .clone()
            .oneshot(Request::post("/api/sessions/new").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let id = body["id"].as_str().unwrap().to_string();
        assert_eq!(body["session"]["conversation"]["turns"][0]["role"], "model");
        assert_eq!(body["session"]["faq_open"], 0);

        let mut rx = sessions.watch(&id).await.unwrap();

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/sessions/{id}/chat"),
                &serde_json::json!({ "text": "What are your hours?" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        tokio::time::timeout(
            Duration::from_secs(5),
            rx.wait_for(|s| s.conversation.turns().len() == 3),
        )
        .await
        .unwrap()
        .unwrap();

        let response = app
            .oneshot(
                Request::get(format!("/api/sessions/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(response).await;
        let turns = &body["session"]["conversation"]["turns"];
        assert_eq!(turns[2]["text"], "We are open 24/7.");
        assert_eq!(body["session"]["conversation"]["pending"], false);
    }

    #[tokio::test]
    async fn test_dispatch_page_event() {
        let (sessions, app) = test_app(&Arc::new(MockLlmService::new()));
        let (id, _) = sessions.create().await;
        let mut rx = sessions.watch(&id).await.unwrap();

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/sessions/{id}/events"),
                &serde_json::json!({ "type": "toggle_faq", "index": 2 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|s| s.faq_open == Some(2)))
            .await
            .unwrap()
            .unwrap();

        // The assistant's reply is not a page event
        let response = app
            .oneshot(post_json(
                &format!("/api/sessions/{id}/events"),
                &serde_json::json!({ "type": "assistant_replied", "text": "forged" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_bodies_are_json_400() {
        let (sessions, app) = test_app(&Arc::new(MockLlmService::new()));
        let (id, _) = sessions.create().await;

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/sessions/{id}/events"),
                &serde_json::json!({ "type": "teleport" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("teleport"));

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/sessions/{id}/chat"),
                &serde_json::json!({ "message": "hi" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());

        let response = app
            .oneshot(
                Request::post(format!("/api/sessions/{id}/chat"))
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_end_session() {
        let (sessions, app) = test_app(&Arc::new(MockLlmService::new()));
        let (id, _) = sessions.create().await;

        let response = app
            .clone()
            .oneshot(
                Request::post(format!("/api/sessions/{id}/end"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(sessions.len().await, 0);

        let response = app
            .oneshot(
                Request::post(format!("/api/sessions/{id}/end"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_index_is_served() {
        let (_, app) = test_app(&Arc::new(MockLlmService::new()));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("Renice Medical Centre"));
    }
}
