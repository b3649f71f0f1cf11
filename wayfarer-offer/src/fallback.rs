use rand::seq::IteratorRandom;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use wayfarer_catalog::{BookingLinkBuilder, DraftValidator};
use wayfarer_core::generator::{GeneratorError, PackageGenerator};
use wayfarer_shared::{PackageDraft, Preferences, ScoredPackage, Season};

use crate::ranker::sort_key;
use crate::scoring::{CompatibilityScorer, EnhancedScorer};

#[derive(Debug, Clone)]
pub struct FallbackConfig {
    pub timeout: Duration,
    pub season: Season,
}

impl FallbackConfig {
    pub fn new(timeout_secs: u64, season: Season) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
            season,
        }
    }
}

/// Asks the package generator for packages when the catalog has no match.
///
/// Generator failures never reach the caller; they are logged and turned
/// into an empty result.
pub struct OnlineFallback {
    generator: Arc<dyn PackageGenerator>,
    timeout: Duration,
    scorer: EnhancedScorer,
    validator: DraftValidator,
    links: BookingLinkBuilder,
}

impl OnlineFallback {
    pub fn new(generator: Arc<dyn PackageGenerator>, links: BookingLinkBuilder, config: FallbackConfig) -> Self {
        Self {
            generator,
            timeout: config.timeout,
            scorer: EnhancedScorer::new(config.season),
            validator: DraftValidator::new(config.season),
            links,
        }
    }

    pub async fn find_online(&self, preferences: &Preferences, n: usize) -> Vec<ScoredPackage> {
        let drafts = match self.fetch_drafts(preferences).await {
            Ok(drafts) => drafts,
            Err(e) => {
                warn!(error = %e, destination = %preferences.destination, "Online package search failed");
                return Vec::new();
            }
        };

        if drafts.is_empty() {
            info!(destination = %preferences.destination, "Online package search returned nothing");
            return Vec::new();
        }

        let mut scored: Vec<ScoredPackage> = drafts
            .iter()
            .enumerate()
            .map(|(i, draft)| {
                let mut package = self.validator.validate(draft, i + 1, preferences);
                package.booking_links = self.links.links_for(&package);
                package.source = package
                    .booking_links
                    .values()
                    .choose(&mut rand::thread_rng())
                    .cloned();

                let enhanced = self.scorer.score(preferences, &package);
                ScoredPackage {
                    enhanced_compatibility: Some(enhanced),
                    ..ScoredPackage::new(package)
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            let pa = a.enhanced_compatibility.map_or(0.0, |c| c.percentage);
            let pb = b.enhanced_compatibility.map_or(0.0, |c| c.percentage);
            sort_key(pb)
                .total_cmp(&sort_key(pa))
                .then_with(|| sort_key(b.package.rating).total_cmp(&sort_key(a.package.rating)))
                .then_with(|| b.package.reviews_count.cmp(&a.package.reviews_count))
        });
        scored.truncate(n);

        info!(count = scored.len(), destination = %preferences.destination, "Online packages ready");
        scored
    }

    async fn fetch_drafts(&self, preferences: &Preferences) -> Result<Vec<PackageDraft>, GeneratorError> {
        tokio::time::timeout(self.timeout, self.generator.generate_packages(preferences))
            .await
            .map_err(|_| GeneratorError::Timeout(self.timeout.as_secs()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use wayfarer_shared::BookingSite;

    struct FixedGenerator(Vec<PackageDraft>);

    #[async_trait]
    impl PackageGenerator for FixedGenerator {
        async fn generate_packages(&self, _preferences: &Preferences) -> Result<Vec<PackageDraft>, GeneratorError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenGenerator;

    #[async_trait]
    impl PackageGenerator for BrokenGenerator {
        async fn generate_packages(&self, _preferences: &Preferences) -> Result<Vec<PackageDraft>, GeneratorError> {
            Err(GeneratorError::Transport("connection reset".to_string()))
        }
    }

    struct SlowGenerator;

    #[async_trait]
    impl PackageGenerator for SlowGenerator {
        async fn generate_packages(&self, _preferences: &Preferences) -> Result<Vec<PackageDraft>, GeneratorError> {
            tokio::time::sleep(Duration::from_secs(120)).await;
            Ok(vec![PackageDraft::default()])
        }
    }

    fn fallback(generator: impl PackageGenerator + 'static) -> OnlineFallback {
        let links = BookingLinkBuilder::new(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(), 5, 2);
        OnlineFallback::new(Arc::new(generator), links, FallbackConfig::new(30, Season::Summer))
    }

    fn preferences() -> Preferences {
        Preferences {
            destination: "Kyoto".to_string(),
            budget: "luxury".to_string(),
            duration: "6".to_string(),
            travel_style: "cultural".to_string(),
            group_size: "couple".to_string(),
            accommodation_type: "ryokan".to_string(),
        }
    }

    fn draft(name: &str, rating: &str, reviews: &str) -> PackageDraft {
        PackageDraft {
            name: Some(name.to_string()),
            rating: Some(rating.to_string()),
            reviews_count: Some(reviews.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_generator_error_gives_empty() {
        assert!(fallback(BrokenGenerator).find_online(&preferences(), 3).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_gives_empty() {
        assert!(fallback(SlowGenerator).find_online(&preferences(), 3).await.is_empty());
    }

    #[tokio::test]
    async fn test_no_drafts_gives_empty() {
        assert!(fallback(FixedGenerator(vec![])).find_online(&preferences(), 3).await.is_empty());
    }

    #[tokio::test]
    async fn test_drafts_are_clamped_and_ranked() {
        let generator = FixedGenerator(vec![
            draft("Out of range", "5.3", "1500"),
            draft("Popular", "4.6", "900"),
            draft("Less popular", "4.6", "150"),
        ]);
        let result = fallback(generator).find_online(&preferences(), 3).await;
        assert_eq!(result.len(), 3);

        let names: Vec<_> = result.iter().map(|p| p.package.name.as_str()).collect();
        assert_eq!(names, vec!["Popular", "Less popular", "Out of range"]);

        let clamped = &result[2].package;
        assert_eq!(clamped.id, "ONLINE001");
        assert_eq!(clamped.rating, 4.2);
        assert_eq!(clamped.reviews_count, 300);

        for scored in &result {
            assert!(scored.compatibility.is_none());
            let enhanced = scored.enhanced_compatibility.unwrap();
            assert_eq!(enhanced.max_score, 22.5);
            assert_eq!(scored.package.booking_links.len(), BookingSite::ALL.len());
            let source = scored.package.source.as_ref().unwrap();
            assert!(scored.package.booking_links.values().any(|url| url == source));
        }
    }

    #[tokio::test]
    async fn test_truncates_to_n() {
        let generator = FixedGenerator(vec![PackageDraft::default(); 3]);
        assert_eq!(fallback(generator).find_online(&preferences(), 1).await.len(), 1);
    }
}
