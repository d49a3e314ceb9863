//! HTTP server exposing the search-term settings API.
//!
//! Four endpoints translate REST calls into store transactions:
//!
//! | Method   | Path | Description |
//! |----------|------|-------------|
//! | `GET`    | `/api/settings/search_terms` | List terms, base URL, count |
//! | `POST`   | `/api/settings/search_terms` | Append a term |
//! | `PUT`    | `/api/settings/search_terms/{index}` | Replace the term at an index |
//! | `DELETE` | `/api/settings/search_terms/{index}` | Remove the term at an index |
//! | `GET`    | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! All failures render as:
//!
//! ```json
//! { "error": "Invalid index: 5 (have 1 search terms)" }
//! ```
//!
//! Invalid terms, duplicates, and out-of-range indices are `400`; file
//! system and JSON parse failures are `500`. A non-integer `{index}`
//! segment is rejected by the path extractor and never reaches the store.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so a browser-based
//! operator page can call the API from any origin.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::Config;
use crate::error::SettingsError;
use crate::store::SettingsStore;

/// Shared application state passed to all route handlers via Axum's `State`
/// extractor.
#[derive(Clone)]
struct AppState {
    store: Arc<SettingsStore>,
}

/// Starts the HTTP server.
///
/// Binds to the address configured in `[server].bind` and serves until the
/// process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let store = Arc::new(SettingsStore::new(
        &config.settings.path,
        &config.settings.backup_dir,
    ));
    let state = AppState { store };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route(
            "/api/settings/search_terms",
            get(handle_list).post(handle_add),
        )
        .route(
            "/api/settings/search_terms/{index}",
            put(handle_update).delete(handle_remove),
        )
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state);

    println!(
        "Settings server listening on http://{}",
        config.server.bind
    );

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        let status = if err.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            warn!(error = %err, "settings transaction failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        AppError {
            status,
            message: err.to_string(),
        }
    }
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    /// Always `"ok"` when the server is running.
    status: String,
    /// The crate version from `Cargo.toml`.
    version: String,
}

/// Handler for `GET /health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /api/settings/search_terms ============

/// JSON response body for the list endpoint.
#[derive(Serialize)]
struct ListResponse {
    search_terms: Vec<String>,
    base_url: String,
    count: usize,
}

/// Handler for `GET /api/settings/search_terms`. Read-only; no backup is
/// taken.
async fn handle_list(State(state): State<AppState>) -> Result<Json<ListResponse>, AppError> {
    let list = state.store.list()?;
    Ok(Json(ListResponse {
        search_terms: list.search_terms,
        base_url: list.base_url,
        count: list.count,
    }))
}

// ============ POST /api/settings/search_terms ============

/// JSON request body carrying a search term (`POST` and `PUT`).
#[derive(Deserialize)]
struct TermRequest {
    search_term: String,
}

/// JSON response body for a successful append.
#[derive(Serialize)]
struct AddResponse {
    success: bool,
    search_term: String,
    backup: String,
}

/// Handler for `POST /api/settings/search_terms`.
async fn handle_add(
    State(state): State<AppState>,
    Json(req): Json<TermRequest>,
) -> Result<Json<AddResponse>, AppError> {
    let added = state.store.add(&req.search_term)?;
    Ok(Json(AddResponse {
        success: true,
        search_term: added.term,
        backup: added.backup,
    }))
}

// ============ PUT /api/settings/search_terms/{index} ============

/// JSON response body for a successful replacement.
#[derive(Serialize)]
struct UpdateResponse {
    success: bool,
    search_term: String,
    old_term: String,
    backup: String,
}

/// Handler for `PUT /api/settings/search_terms/{index}`.
async fn handle_update(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<TermRequest>,
) -> Result<Json<UpdateResponse>, AppError> {
    let updated = state.store.update(index, &req.search_term)?;
    Ok(Json(UpdateResponse {
        success: true,
        search_term: updated.new_term,
        old_term: updated.old_term,
        backup: updated.backup,
    }))
}

// ============ DELETE /api/settings/search_terms/{index} ============

/// JSON response body for a successful removal.
#[derive(Serialize)]
struct DeleteResponse {
    success: bool,
    deleted_term: String,
    backup: String,
}

/// Handler for `DELETE /api/settings/search_terms/{index}`.
async fn handle_remove(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<DeleteResponse>, AppError> {
    let removed = state.store.remove(index)?;
    Ok(Json(DeleteResponse {
        success: true,
        deleted_term: removed.term,
        backup: removed.backup,
    }))
}
