use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use lielens_common::LieLensError;
use lielens_core::{AnalysisReport, ContentType};

use crate::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const MIN_CONTENT_CHARS: usize = 10;
const MAX_CONTENT_CHARS: usize = 10_000;

/// Sample run through the analyzer by `GET /demo`.
const DEMO_CONTENT: &str = "BREAKING: Scientists SHOCKED by this simple trick that Big Pharma HATES! \
    They don't want you to know this one secret that could save your life. \
    Thousands of people are already using this, but the mainstream media won't report it. \
    Act fast - this information might be taken down soon!";

#[derive(Deserialize)]
pub struct AnalysisRequest {
    pub content: String,
    #[serde(default)]
    pub content_type: ContentType,
    pub user_id: Option<String>,
}

// --- Error mapping ---

/// Wraps pipeline failures for the HTTP boundary. Client-caused failures
/// (validation, fetch) keep their message; server-side failures get a
/// generic body so raw model output never leaks.
pub struct ApiError(LieLensError);

impl From<LieLensError> for ApiError {
    fn from(err: LieLensError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            LieLensError::Validation(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            LieLensError::Fetch { .. } => (StatusCode::BAD_REQUEST, self.0.to_string()),
            LieLensError::ResponseFormat(detail) => {
                error!(%detail, "Model response failed schema validation");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AI response format error".to_string(),
                )
            }
            LieLensError::Analysis(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Analysis failed: {message}"),
            ),
            LieLensError::Internal(e) => {
                error!(error = %e, "Unexpected internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

// --- Handlers ---

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": VERSION,
    }))
}

fn validate(request: &AnalysisRequest) -> Result<(), LieLensError> {
    let chars = request.content.chars().count();
    if chars < MIN_CONTENT_CHARS {
        return Err(LieLensError::Validation(format!(
            "content must be at least {MIN_CONTENT_CHARS} characters, got {chars}"
        )));
    }
    if chars > MAX_CONTENT_CHARS {
        return Err(LieLensError::Validation(format!(
            "content must be at most {MAX_CONTENT_CHARS} characters, got {chars}"
        )));
    }
    Ok(())
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    validate(&request)?;

    let request_id = Uuid::new_v4();
    let content = request.content.trim();

    let resolved = state.resolver.resolve(content, request.content_type).await?;
    let source_type = resolved.source_info.source_type();

    info!(
        %request_id,
        source_type,
        content_length = resolved.text.chars().count(),
        has_user_id = request.user_id.is_some(),
        "Analyzing content"
    );

    let mut report = state.analyzer.analyze(&resolved.text, source_type).await?;
    report.source_info = Some(resolved.source_info);

    info!(%request_id, "Analysis completed");
    Ok(Json(report))
}

pub async fn demo(State(state): State<Arc<AppState>>) -> Result<Json<AnalysisReport>, ApiError> {
    let report = state.analyzer.analyze(DEMO_CONTENT, "text").await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(content: &str) -> AnalysisRequest {
        AnalysisRequest {
            content: content.to_string(),
            content_type: ContentType::Auto,
            user_id: None,
        }
    }

    #[test]
    fn validate_rejects_short_content() {
        let err = validate(&request("too short")).unwrap_err();
        assert!(matches!(err, LieLensError::Validation(_)));
    }

    #[test]
    fn validate_accepts_minimum_length() {
        assert!(validate(&request("0123456789")).is_ok());
    }

    #[test]
    fn validate_rejects_oversized_content() {
        let long = "a".repeat(10_001);
        let err = validate(&request(&long)).unwrap_err();
        assert!(matches!(err, LieLensError::Validation(_)));
    }

    #[test]
    fn validate_accepts_maximum_length() {
        let long = "a".repeat(10_000);
        assert!(validate(&request(&long)).is_ok());
    }
}
