use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use models::{Inquiry, Service, Stored, TeamMember};
use service::{content, seed, storage::Store};

use crate::errors::ApiError;

/// Shared request state: the process-wide store handle plus the data path
/// reported by diagnostics.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub data_dir: String,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({"message": "Event Organizing Company Backend Running"}))
}

async fn hello() -> Json<serde_json::Value> {
    Json(json!({"message": "Hello from the backend API!"}))
}

async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<Stored<Service>>>, ApiError> {
    Ok(Json(content::list_services(&state.store).await?))
}

#[derive(Debug, Deserialize)]
pub struct TeamQuery {
    pub team: Option<String>,
}

async fn list_team(
    State(state): State<AppState>,
    Query(q): Query<TeamQuery>,
) -> Result<Json<Vec<Stored<TeamMember>>>, ApiError> {
    Ok(Json(content::list_team(&state.store, q.team.as_deref()).await?))
}

async fn create_inquiry(
    State(state): State<AppState>,
    Json(input): Json<Inquiry>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let id = content::create_inquiry(&state.store, input).await?;
    Ok((StatusCode::CREATED, Json(json!({"id": id, "status": "received"}))))
}

#[derive(Debug, Deserialize)]
pub struct InquiriesQuery {
    pub limit: Option<i64>,
}

async fn list_inquiries(
    State(state): State<AppState>,
    Query(q): Query<InquiriesQuery>,
) -> Result<Json<Vec<Stored<Inquiry>>>, ApiError> {
    Ok(Json(content::list_inquiries(&state.store, q.limit).await?))
}

async fn seed_content(State(state): State<AppState>) -> Json<serde_json::Value> {
    let summary = seed::seed_defaults(&state.store).await;
    Json(json!({"seeded": summary}))
}

/// Free-form diagnostics: process status, store connectivity and the first
/// few collection names. Not part of the core API contract.
async fn diagnostics(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut response = json!({
        "backend": "running",
        "store": "not available",
        "data_dir": state.data_dir,
        "connection_status": "not connected",
        "collections": [],
    });
    if state.store.is_connected() {
        response["connection_status"] = json!("connected");
        match state.store.collection_names().await {
            Ok(names) => {
                let first: Vec<String> = names.into_iter().take(10).collect();
                response["collections"] = json!(first);
                response["store"] = json!("connected and working");
            }
            Err(e) => {
                response["store"] = json!(format!("connected but error: {e}"));
            }
        }
    }
    Json(response)
}

/// Build the full application router: content API, seeding, health and
/// diagnostics, with CORS and request tracing layered on top.
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/test", get(diagnostics))
        .route("/api/hello", get(hello))
        .route("/api/services", get(list_services))
        .route("/api/team", get(list_team))
        .route("/api/inquiries", post(create_inquiry).get(list_inquiries))
        .route("/api/seed", post(seed_content))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
