use crate::actors::StarButtonRef;
use crate::error::Result;
use crate::models::ButtonSnapshot;
use crate::render::escape_html;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Health check status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Liveness probe response (minimal, just indicates the process is running)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

/// Application state for the preview server
#[derive(Clone)]
pub struct PreviewState {
    pub button: StarButtonRef,
    pub start_time: Instant,
}

pub fn router(state: PreviewState) -> Router {
    Router::new()
        .route("/", get(preview_page))
        .route("/api/snapshot", get(snapshot))
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/livez", get(liveness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the preview page until the process is stopped
pub async fn start_preview_server(state: PreviewState, port: u16) -> Result<()> {
    let app = router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Preview server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Full HTML document around one rendered button
pub fn preview_document(snapshot: &ButtonSnapshot, button_html: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n",
            "<meta http-equiv=\"refresh\" content=\"1\">\n",
            "<title>{title}</title>\n",
            "<script src=\"https://cdn.tailwindcss.com\"></script>\n",
            "</head>\n<body class=\"min-h-screen flex items-center justify-center bg-gray-100\">\n",
            "{button}\n</body>\n</html>\n"
        ),
        title = escape_html(&snapshot.repository.to_string()),
        button = button_html,
    )
}

async fn preview_page(State(state): State<PreviewState>) -> impl IntoResponse {
    let rendered = match state.button.snapshot().await {
        Ok(snapshot) => state
            .button
            .render()
            .await
            .map(|html| preview_document(&snapshot, &html)),
        Err(e) => Err(e),
    };

    match rendered {
        Ok(page) => (StatusCode::OK, Html(page)),
        Err(e) => {
            error!("Failed to render preview: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Html("<p>Star button is not mounted</p>".to_string()),
            )
        }
    }
}

async fn snapshot(State(state): State<PreviewState>) -> impl IntoResponse {
    match state.button.snapshot().await {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(e) => Err((StatusCode::SERVICE_UNAVAILABLE, e.to_string())),
    }
}

/// Healthy while the button actor answers
async fn health_check(State(state): State<PreviewState>) -> impl IntoResponse {
    let uptime = state.start_time.elapsed().as_secs();

    let (status, message) = match state.button.snapshot().await {
        Ok(_) => (HealthStatus::Healthy, None),
        Err(e) => (
            HealthStatus::Unhealthy,
            Some(format!("Star button not responding: {}", e)),
        ),
    };

    let status_code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
        message,
    };

    (status_code, Json(response))
}

async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            status: "alive".to_string(),
        }),
    )
}
