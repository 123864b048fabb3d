//! Web API module for Team Colors.
//!
//! A read-only REST API over the school data plus a stateless export
//! endpoint. The selection lives with the client; the server only shares an
//! immutable copy of the loaded document.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/conferences` - List conferences
//! - `GET /api/conferences/{key}` - School cards of one conference
//! - `POST /api/export` - Render a list of colors as clipboard text

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::PaletteError;
use crate::models::{ColorEntry, DisplayFormat, SchoolData, SelectionSet};
use crate::services::loader::{self, DataSource};
use crate::services::renderer::{self, ConferenceSummary, ConferenceView};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct ApiState {
    /// School document (immutable after load)
    data: Arc<SchoolData>,
}

impl ApiState {
    /// Wraps a loaded document.
    #[must_use]
    pub fn new(data: SchoolData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Conference list response.
#[derive(Debug, Serialize)]
pub struct ConferenceListResponse {
    /// Conferences in document order.
    pub conferences: Vec<ConferenceSummary>,
}

/// Export request body.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// Output format, hex-only when omitted.
    #[serde(default)]
    pub format: DisplayFormat,
    /// Colors in pick order; duplicates by `(school, hex)` are dropped.
    pub colors: Vec<ColorEntry>,
}

/// Export response.
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    /// Newline-joined rendered lines.
    pub text: String,
    /// Number of distinct colors exported.
    pub count: usize,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

impl From<PaletteError> for (StatusCode, Json<ApiError>) {
    fn from(err: PaletteError) -> Self {
        let status = match err {
            PaletteError::NotFound(_) => StatusCode::NOT_FOUND,
            PaletteError::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PaletteError::Fetch { .. } | PaletteError::Clipboard(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ApiError::new(err.to_string())))
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/conferences - List every conference.
async fn list_conferences(State(state): State<ApiState>) -> Json<ConferenceListResponse> {
    Json(ConferenceListResponse {
        conferences: renderer::list_conferences(Some(&state.data)),
    })
}

/// GET /api/conferences/{key} - School cards of one conference.
async fn get_conference(
    State(state): State<ApiState>,
    Path(key): Path<String>,
) -> ApiResult<ConferenceView> {
    let view = renderer::select_conference(Some(&state.data), &key).inspect_err(|e| {
        warn!("Conference lookup failed: {e}");
    })?;
    Ok(Json(view))
}

/// POST /api/export - Render colors exactly as the clipboard export does.
async fn export_colors(Json(request): Json<ExportRequest>) -> ApiResult<ExportResponse> {
    let mut selection = SelectionSet::new();
    for color in request.colors {
        selection.add(color.hex, color.school, color.color_type);
    }

    if selection.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("No colors selected")),
        ));
    }

    Ok(Json(ExportResponse {
        text: selection.export(request.format),
        count: selection.len(),
    }))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: ApiState) -> Router {
    // The server runs on the user's machine next to the frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/conferences", get(list_conferences))
        .route("/api/conferences/{key}", get(get_conference))
        .route("/api/export", post(export_colors))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// The document is loaded once before binding, off the async runtime since
/// the loader blocks.
///
/// # Errors
///
/// Returns an error if the data can't be loaded or the server fails to start.
pub async fn run_server(source: DataSource, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Loading school data from {source}");
    let data = tokio::task::spawn_blocking(move || loader::load(&source))
        .await
        .context("Loader task panicked")??;

    let app = create_router(ApiState::new(data));

    info!("Starting Team Colors web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
