use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::core::models::GeneratorState;
use crate::web::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub url: String,
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "urlqr"
    }))
}

/// Run one validate-then-encode cycle on the shared generator.
///
/// `try_lock` is the server-side twin of the disabled submit button: a
/// submission arriving while one is in flight settles immediately with 409
/// instead of queueing a second encoder call.
pub async fn generate_qr(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    let mut generator = match state.generator.try_lock() {
        Ok(generator) => generator,
        Err(_) => {
            return (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "A QR code is already being generated. Please wait."
                })),
            )
                .into_response();
        }
    };

    match generator.generate(&request.url).await {
        GeneratorState::Ready(artifact) => {
            info!("Generated QR code ({} bytes as data URI)", artifact.data_uri.len());
            (
                StatusCode::OK,
                Json(json!({
                    "data_uri": &artifact.data_uri,
                    "filename": &artifact.filename,
                })),
            )
                .into_response()
        }
        GeneratorState::Error(message) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": message })),
        )
            .into_response(),
        // generate() always settles to Ready or Error while the lock is held
        other => {
            error!("Generator settled in unexpected state: {:?}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}

/// Handle 404 errors for API routes
pub async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "API endpoint not found" })),
    )
}
