use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use wayfarer_catalog::{AccommodationAdvisor, AdviceSection};
use wayfarer_offer::RecommendationSource;
use wayfarer_shared::{Preferences, ScoredPackage};

use crate::error::AppError;
use crate::state::AppState;

const MAX_TOP_N: usize = 50;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub preferences: Preferences,
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub id: Uuid,
    pub source: RecommendationSource,
    pub packages: Vec<ScoredPackage>,
    pub accommodation_suggestions: Vec<AdviceSection>,
    pub created_at: DateTime<Utc>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/recommendations", post(recommend))
}

/// POST /v1/recommendations
/// Catalog matches first, online packages when the catalog has none
async fn recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    if let Some(n) = req.top_n {
        if n == 0 || n > MAX_TOP_N {
            return Err(AppError::ValidationError(format!(
                "top_n must be between 1 and {}",
                MAX_TOP_N
            )));
        }
    }

    let recommendation = state.service.recommend(&req.preferences, req.top_n).await;
    let id = Uuid::new_v4();
    info!(%id, source = ?recommendation.source, count = recommendation.packages.len(), "Recommendation served");

    Ok(Json(RecommendationResponse {
        id,
        source: recommendation.source,
        packages: recommendation.packages,
        accommodation_suggestions: AccommodationAdvisor::suggestions(&req.preferences),
        created_at: Utc::now(),
    }))
}
