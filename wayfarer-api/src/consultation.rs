use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use wayfarer_offer::Consultant;
use wayfarer_shared::{Preferences, ScoredPackage};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConsultationRequest {
    pub question: String,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub packages: Vec<ScoredPackage>,
}

#[derive(Debug, Serialize)]
pub struct ConsultationResponse {
    pub answer: String,
    /// The question reads as the user ending the conversation.
    pub exit: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/consultation", post(consult))
}

/// POST /v1/consultation
async fn consult(
    State(state): State<AppState>,
    Json(req): Json<ConsultationRequest>,
) -> Result<Json<ConsultationResponse>, AppError> {
    if req.question.trim().is_empty() {
        return Err(AppError::ValidationError("question must not be empty".to_string()));
    }

    Ok(Json(ConsultationResponse {
        answer: state.consultant.answer(&req.question, &req.preferences, &req.packages).await,
        exit: Consultant::is_exit(&req.question),
    }))
}
