//! HTTP server exposing the generation pipeline.
//!
//! Endpoints:
//! - `POST /api/generate` — run the pipeline; 400 on structural input
//!   errors, 500 with an embedded fallback artifact on internal failure,
//!   200 with the normalized artifact on success.
//! - `POST /api/preview` — apply customization rewriting to source text.
//! - `POST /api/export` — package an artifact as a zip download.
//! - `GET /health` — liveness check.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::adapters::GeminiClient;
use crate::config::Config;
use crate::core::{self, GenerateRequest, GenerationOutcome, Orchestrator};
use crate::domain::{Artifact, CustomizationSet, Framework};

/// Shared state for all handlers
pub struct AppState {
    pub orchestrator: Orchestrator,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody {
    #[serde(default)]
    request_text: String,
    #[serde(default)]
    customizations: CustomizationSet,
    framework_id: Option<Framework>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PreviewBody {
    source: String,
    #[serde(default)]
    customizations: CustomizationSet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportBody {
    artifact: Artifact,
    framework_id: Framework,
}

/// Build the router over shared state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/api/preview", post(preview_handler))
        .route("/api/export", post(export_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Build the orchestrator from config and serve until shutdown
pub async fn serve(config: &Config) -> Result<()> {
    let generator = GeminiClient::new(
        config.api_key.clone(),
        config.model.clone(),
        config.timeout,
    )?;
    let state = Arc::new(AppState {
        orchestrator: Orchestrator::new(Box::new(generator)),
    });

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!(bind = %listener.local_addr()?, "listening");

    axum::serve(listener, router(state))
        .await
        .map_err(anyhow::Error::from)
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn generate_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateBody>,
) -> Response {
    let Some(framework) = body.framework_id else {
        return input_error("Missing required fields");
    };

    let request = GenerateRequest {
        request_text: body.request_text,
        customizations: body.customizations,
        framework,
    };

    match state.orchestrator.generate(&request).await {
        Err(e) => input_error(&e.to_string()),
        Ok(GenerationOutcome::Generated(artifact)) => {
            (StatusCode::OK, Json(artifact)).into_response()
        }
        Ok(GenerationOutcome::Fallback {
            artifact,
            kind,
            detail,
        }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": format!("Failed to generate component ({kind} error)"),
                "details": detail,
                "fallback": artifact,
            })),
        )
            .into_response(),
    }
}

async fn preview_handler(Json(body): Json<PreviewBody>) -> impl IntoResponse {
    let source = core::rewriter::apply(&body.source, &body.customizations);
    Json(json!({ "source": source }))
}

async fn export_handler(Json(body): Json<ExportBody>) -> Response {
    match core::package(&body.artifact, body.framework_id) {
        Ok(bytes) => {
            let file_name = core::archive_file_name(&body.artifact, body.framework_id);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/zip".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file_name),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Export packaging failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error exporting component. Please try again." })),
            )
                .into_response()
        }
    }
}

fn input_error(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message })),
    )
        .into_response()
}
