use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use wayfarer_shared::Package;

use crate::error::AppError;
use crate::state::AppState;

const MAX_SAMPLE_SIZE: usize = 1000;

#[derive(Debug, Default, Deserialize)]
pub struct SampleRequest {
    pub count: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct SampleResponse {
    pub count: usize,
    pub seed: u64,
    pub packages: Vec<Package>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/packages", get(list_packages))
        .route("/v1/packages/sample", post(regenerate_sample))
}

/// GET /v1/packages
async fn list_packages(State(state): State<AppState>) -> Json<Vec<Package>> {
    Json(state.service.recommender().load_or_seed().await)
}

/// POST /v1/packages/sample
/// Replace the catalog with a freshly generated sample
async fn regenerate_sample(
    State(state): State<AppState>,
    Json(req): Json<SampleRequest>,
) -> Result<Json<SampleResponse>, AppError> {
    let recommender = state.service.recommender();
    let defaults = recommender.catalog_config();

    let count = req.count.unwrap_or(defaults.sample_size);
    if count == 0 || count > MAX_SAMPLE_SIZE {
        return Err(AppError::ValidationError(format!(
            "count must be between 1 and {}",
            MAX_SAMPLE_SIZE
        )));
    }
    let seed = req.seed.unwrap_or(defaults.sample_seed);

    let packages = recommender.reseed(count, seed).await;
    Ok(Json(SampleResponse {
        count: packages.len(),
        seed,
        packages,
    }))
}
