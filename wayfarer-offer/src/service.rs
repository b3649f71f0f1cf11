use serde::Serialize;
use tracing::info;
use wayfarer_shared::{Preferences, ScoredPackage};

use crate::fallback::OnlineFallback;
use crate::ranker::PackageRecommender;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Catalog,
    Online,
    None,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub source: RecommendationSource,
    pub packages: Vec<ScoredPackage>,
}

/// Catalog first; the online fallback only runs when the catalog yields
/// nothing above the compatibility floor.
pub struct RecommendationService {
    recommender: PackageRecommender,
    fallback: OnlineFallback,
}

impl RecommendationService {
    pub fn new(recommender: PackageRecommender, fallback: OnlineFallback) -> Self {
        Self { recommender, fallback }
    }

    pub fn recommender(&self) -> &PackageRecommender {
        &self.recommender
    }

    pub async fn recommend(&self, preferences: &Preferences, n: Option<usize>) -> Recommendation {
        let n = n.unwrap_or_else(|| self.recommender.default_top_n());

        let local = self.recommender.find_top(preferences, n).await;
        if !local.is_empty() {
            return Recommendation {
                source: RecommendationSource::Catalog,
                packages: local,
            };
        }

        info!(destination = %preferences.destination, "No catalog match; trying online packages");
        let online = self.fallback.find_online(preferences, n).await;
        let source = if online.is_empty() {
            RecommendationSource::None
        } else {
            RecommendationSource::Online
        };

        Recommendation { source, packages: online }
    }
}
