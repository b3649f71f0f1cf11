use std::sync::Arc;
use tracing::{info, warn};
use wayfarer_catalog::SampleCatalog;
use wayfarer_core::repository::PackageRepository;
use wayfarer_shared::{Package, Preferences, ScoredPackage};
use wayfarer_store::app_config::{CatalogConfig, RankingConfig};

use crate::scoring::{BaselineScorer, CompatibilityScorer};

/// Baseline-scores `packages`, drops weak matches and returns the best `n`.
///
/// Ties on percentage are broken by rating; remaining ties keep input order.
pub fn rank_packages(
    preferences: &Preferences,
    packages: &[Package],
    n: usize,
    min_compatibility: f64,
) -> Vec<ScoredPackage> {
    let scorer = BaselineScorer;

    let mut scored: Vec<ScoredPackage> = packages
        .iter()
        .filter_map(|package| {
            let compatibility = scorer.score(preferences, package);
            (compatibility.percentage > min_compatibility).then(|| ScoredPackage {
                compatibility: Some(compatibility),
                ..ScoredPackage::new(package.clone())
            })
        })
        .collect();

    scored.sort_by(|a, b| {
        let pa = a.compatibility.map_or(0.0, |c| c.percentage);
        let pb = b.compatibility.map_or(0.0, |c| c.percentage);
        sort_key(pb)
            .total_cmp(&sort_key(pa))
            .then_with(|| sort_key(b.package.rating).total_cmp(&sort_key(a.package.rating)))
    });

    scored.truncate(n);
    scored
}

/// NaN sorts below every number.
pub(crate) fn sort_key(value: f64) -> f64 {
    if value.is_nan() {
        f64::NEG_INFINITY
    } else {
        value
    }
}

/// Ranks the stored catalog, reseeding it first when it is empty
pub struct PackageRecommender {
    repo: Arc<dyn PackageRepository>,
    ranking: RankingConfig,
    catalog: CatalogConfig,
}

impl PackageRecommender {
    pub fn new(repo: Arc<dyn PackageRepository>, ranking: RankingConfig, catalog: CatalogConfig) -> Self {
        Self { repo, ranking, catalog }
    }

    pub fn default_top_n(&self) -> usize {
        self.ranking.top_n
    }

    pub fn catalog_config(&self) -> &CatalogConfig {
        &self.catalog
    }

    /// Never fails: load errors and an empty store both fall back to a
    /// freshly generated sample catalog.
    pub async fn find_top(&self, preferences: &Preferences, n: usize) -> Vec<ScoredPackage> {
        let packages = self.load_or_seed().await;
        let top = rank_packages(preferences, &packages, n, self.ranking.min_compatibility);
        info!(
            candidates = packages.len(),
            matched = top.len(),
            destination = %preferences.destination,
            "Ranked catalog packages"
        );
        top
    }

    /// Current catalog, generating and persisting the sample when empty.
    pub async fn load_or_seed(&self) -> Vec<Package> {
        match self.repo.list_packages().await {
            Ok(packages) if !packages.is_empty() => return packages,
            Ok(_) => info!("Package catalog is empty; generating sample catalog"),
            Err(e) => warn!(error = %e, "Failed to load package catalog; generating sample catalog"),
        }
        self.reseed(self.catalog.sample_size, self.catalog.sample_seed).await
    }

    /// Replace the stored catalog with a generated sample.
    ///
    /// A failed write is logged and the sample is still returned.
    pub async fn reseed(&self, count: usize, seed: u64) -> Vec<Package> {
        let packages = SampleCatalog::generate(count, seed);
        if let Err(e) = self.repo.persist(&packages).await {
            warn!(error = %e, "Failed to persist sample catalog");
        } else {
            info!(count = packages.len(), seed, "Stored sample catalog");
        }
        packages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use wayfarer_core::repository::RepositoryResult;
    use wayfarer_store::InMemoryPackageRepository;

    fn preferences() -> Preferences {
        Preferences {
            destination: "Paris".to_string(),
            budget: "luxury".to_string(),
            duration: "7".to_string(),
            travel_style: "cultural".to_string(),
            group_size: "couple".to_string(),
            accommodation_type: "hotel".to_string(),
        }
    }

    fn package(id: &str, rating: f64) -> Package {
        Package {
            id: id.to_string(),
            name: format!("Art & Culture {}", id),
            destination: "Paris, France".to_string(),
            budget: "luxury".to_string(),
            duration_days: Some(7),
            travel_style: "cultural".to_string(),
            group_size: "couple".to_string(),
            accommodation_type: "hotel".to_string(),
            activities: "Cultural sites, Historical tours, Art galleries".to_string(),
            price_range: "$3000-6000".to_string(),
            rating,
            reviews_count: 400,
            includes: "Accommodation, Transportation".to_string(),
            best_time: "Spring".to_string(),
            source: None,
            booking_links: Default::default(),
        }
    }

    fn unrelated(id: &str) -> Package {
        Package {
            destination: "Tokyo, Japan".to_string(),
            budget: "budget".to_string(),
            duration_days: Some(21),
            travel_style: "adventure".to_string(),
            group_size: "group".to_string(),
            accommodation_type: "camping".to_string(),
            activities: "Hiking".to_string(),
            ..package(id, 5.0)
        }
    }

    struct FailingRepo;

    #[async_trait]
    impl PackageRepository for FailingRepo {
        async fn list_packages(&self) -> RepositoryResult<Vec<Package>> {
            Err("disk on fire".into())
        }

        async fn persist(&self, _packages: &[Package]) -> RepositoryResult<()> {
            Err("read-only".into())
        }
    }

    #[test]
    fn test_rating_breaks_ties() {
        let packages = vec![package("A", 4.1), package("B", 4.9)];
        let top = rank_packages(&preferences(), &packages, 3, 5.0);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].package.id, "B");
        assert_eq!(top[1].package.id, "A");
        assert_eq!(top[0].compatibility.unwrap().percentage, 100.0);
        assert!(top[0].enhanced_compatibility.is_none());
    }

    #[test]
    fn test_nan_rating_does_not_break_order() {
        let packages = vec![package("A", 4.1), package("N", f64::NAN), package("B", 4.9)];
        let ids: Vec<_> = rank_packages(&preferences(), &packages, 3, 5.0)
            .into_iter()
            .map(|p| p.package.id)
            .collect();
        assert_eq!(ids, vec!["B", "A", "N"]);
    }

    #[test]
    fn test_equal_packages_keep_input_order() {
        let packages = vec![package("A", 4.5), package("B", 4.5), package("C", 4.5)];
        let ids: Vec<_> = rank_packages(&preferences(), &packages, 3, 5.0)
            .into_iter()
            .map(|p| p.package.id)
            .collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_weak_matches_are_dropped() {
        let packages = vec![unrelated("X"), package("A", 4.0)];
        let top = rank_packages(&preferences(), &packages, 3, 5.0);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].package.id, "A");
        assert!(top.iter().all(|p| p.compatibility.unwrap().percentage > 5.0));
    }

    #[test]
    fn test_truncates_to_n() {
        let packages: Vec<_> = (0..10).map(|i| package(&i.to_string(), 4.0)).collect();
        assert_eq!(rank_packages(&preferences(), &packages, 3, 5.0).len(), 3);
        assert!(rank_packages(&preferences(), &packages, 0, 5.0).is_empty());
    }

    #[tokio::test]
    async fn test_empty_store_is_reseeded() {
        let repo = Arc::new(InMemoryPackageRepository::default());
        let recommender = PackageRecommender::new(repo.clone(), RankingConfig::default(), CatalogConfig::default());

        let sample = SampleCatalog::generate(20, 42);
        let prefs = Preferences {
            destination: sample[0].destination.clone(),
            ..Default::default()
        };
        let top = recommender.find_top(&prefs, 3).await;

        assert!(!top.is_empty());
        assert!(top.iter().all(|t| sample.iter().any(|p| p.id == t.package.id)));

        let stored = repo.list_packages().await.unwrap();
        assert_eq!(stored, sample);
    }

    #[tokio::test]
    async fn test_failing_store_still_ranks() {
        let recommender = PackageRecommender::new(Arc::new(FailingRepo), RankingConfig::default(), CatalogConfig::default());
        let catalog = recommender.load_or_seed().await;
        assert_eq!(catalog.len(), 20);

        let a = recommender.find_top(&preferences(), 3).await;
        let b = recommender.find_top(&preferences(), 3).await;
        assert_eq!(a, b);
        assert!(a.len() <= 3);
    }
}
