use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use wayfarer_shared::{PreferenceKey, Preferences};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct MissingPreference {
    pub key: PreferenceKey,
    pub label: &'static str,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub preferences: Preferences,
    pub missing: Vec<MissingPreference>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/preferences/extract", post(extract_preferences))
}

/// POST /v1/preferences/extract
async fn extract_preferences(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::ValidationError("text must not be empty".to_string()));
    }

    let preferences = state.capture.extract_all(&req.text).await;
    let mut missing = Vec::new();
    for key in preferences.missing() {
        missing.push(MissingPreference {
            key,
            label: key.label(),
            question: state.capture.followup_question(key, &req.text).await,
        });
    }

    Ok(Json(ExtractResponse { preferences, missing }))
}
