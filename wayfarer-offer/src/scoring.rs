//! Compatibility scoring between a traveller's preferences and a package.
//!
//! Both scorers are pure: they borrow their inputs and return a fresh
//! [`Compatibility`]. The maximum score is fixed per scorer, so percentages
//! from the same scorer are directly comparable.

use wayfarer_catalog::pricing::{
    BudgetTier, BUDGET_RANGES, LUXURY_RANGES, MODERATE_ADJACENT_RANGES, MODERATE_RANGES,
};
use wayfarer_shared::{Compatibility, Package, Preferences, Season};

pub const DESTINATION_WEIGHT: f64 = 3.0;
pub const BUDGET_WEIGHT: f64 = 3.0;
pub const DURATION_WEIGHT: f64 = 2.0;
pub const TRAVEL_STYLE_WEIGHT: f64 = 3.0;
pub const GROUP_SIZE_WEIGHT: f64 = 2.0;
pub const ACCOMMODATION_WEIGHT: f64 = 2.0;

pub const RATING_WEIGHT: f64 = 2.0;
pub const REVIEWS_WEIGHT: f64 = 1.0;
pub const PRICE_WEIGHT: f64 = 2.0;
pub const SEASON_WEIGHT: f64 = 1.0;
pub const INCLUSIONS_WEIGHT: f64 = 1.5;

pub const BASELINE_MAX_SCORE: f64 = DESTINATION_WEIGHT
    + BUDGET_WEIGHT
    + DURATION_WEIGHT
    + TRAVEL_STYLE_WEIGHT
    + GROUP_SIZE_WEIGHT
    + ACCOMMODATION_WEIGHT;

pub const ENHANCED_MAX_SCORE: f64 =
    BASELINE_MAX_SCORE + RATING_WEIGHT + REVIEWS_WEIGHT + PRICE_WEIGHT + SEASON_WEIGHT + INCLUSIONS_WEIGHT;

pub trait CompatibilityScorer: Send + Sync {
    fn score(&self, preferences: &Preferences, package: &Package) -> Compatibility;

    fn max_score(&self) -> f64;
}

/// Six-factor match on the attributes every catalog package carries
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineScorer;

impl BaselineScorer {
    pub fn raw_score(&self, preferences: &Preferences, package: &Package) -> f64 {
        destination_points(&preferences.destination, &package.destination)
            + budget_points(&preferences.budget, &package.budget)
            + duration_points(&preferences.duration, package.duration_days)
            + travel_style_points(&preferences.travel_style, &package.travel_style, &package.activities)
            + group_size_points(&preferences.group_size, &package.group_size)
            + accommodation_points(&preferences.accommodation_type, &package.accommodation_type)
    }
}

impl CompatibilityScorer for BaselineScorer {
    fn score(&self, preferences: &Preferences, package: &Package) -> Compatibility {
        Compatibility::new(self.raw_score(preferences, package), self.max_score())
    }

    fn max_score(&self) -> f64 {
        BASELINE_MAX_SCORE
    }
}

/// Baseline match plus rating, popularity, price, season and inclusions.
///
/// Meant for externally sourced packages whose metadata is richer than the
/// catalog's. The season is fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct EnhancedScorer {
    season: Season,
}

impl EnhancedScorer {
    pub fn new(season: Season) -> Self {
        Self { season }
    }

    /// Scorer for today's season.
    pub fn current() -> Self {
        Self::new(Season::current())
    }
}

impl CompatibilityScorer for EnhancedScorer {
    fn score(&self, preferences: &Preferences, package: &Package) -> Compatibility {
        let raw = BaselineScorer.raw_score(preferences, package)
            + rating_points(package.rating)
            + reviews_points(package.reviews_count)
            + price_points(&preferences.budget, &package.price_range)
            + season_points(&package.best_time, self.season)
            + inclusion_points(package.inclusion_count());

        Compatibility::new(raw, self.max_score())
    }

    fn max_score(&self) -> f64 {
        ENHANCED_MAX_SCORE
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn destination_points(wanted: &str, destination: &str) -> f64 {
    let wanted = wanted.to_lowercase();
    let destination = destination.to_lowercase();

    if destination.contains(&wanted) {
        DESTINATION_WEIGHT
    } else if wanted.split_whitespace().any(|word| destination.contains(word)) {
        2.0
    } else {
        0.0
    }
}

fn budget_points(wanted: &str, offered: &str) -> f64 {
    let wanted = wanted.to_lowercase();
    let offered = offered.to_lowercase();

    if wanted == offered {
        BUDGET_WEIGHT
    } else if contains_any(&offered, &["budget", "cheap", "low"])
        && contains_any(&wanted, &["budget", "cheap", "low", "affordable"])
    {
        2.0
    } else if contains_any(&offered, &["luxury", "premium"])
        && contains_any(&wanted, &["luxury", "high", "premium", "expensive"])
    {
        2.0
    } else if offered.contains("moderate") && !contains_any(&wanted, &["budget", "luxury", "cheap", "expensive"]) {
        1.0
    } else {
        0.0
    }
}

fn duration_points(wanted: &str, offered: Option<u32>) -> f64 {
    let (Ok(wanted), Some(offered)) = (wanted.trim().parse::<i64>(), offered) else {
        return 0.0;
    };

    match (wanted - i64::from(offered)).abs() {
        0 => DURATION_WEIGHT,
        1..=2 => 1.0,
        _ => 0.0,
    }
}

fn travel_style_points(wanted: &str, offered: &str, activities: &str) -> f64 {
    let wanted = wanted.to_lowercase();

    if wanted == offered.to_lowercase() {
        TRAVEL_STYLE_WEIGHT
    } else if activities.to_lowercase().contains(&wanted) {
        2.0
    } else {
        0.0
    }
}

fn group_bucket(group: &str) -> Option<u8> {
    match group {
        "solo" | "1" => Some(1),
        "couple" | "2" => Some(2),
        "family" | "group" => Some(3),
        _ => None,
    }
}

fn group_size_points(wanted: &str, offered: &str) -> f64 {
    let wanted = wanted.to_lowercase();
    let offered = offered.to_lowercase();

    if wanted == offered {
        GROUP_SIZE_WEIGHT
    } else if group_bucket(&wanted).is_some() && group_bucket(&wanted) == group_bucket(&offered) {
        1.0
    } else {
        0.0
    }
}

fn accommodation_points(wanted: &str, offered: &str) -> f64 {
    let wanted = wanted.to_lowercase();
    let offered = offered.to_lowercase();

    if wanted == offered {
        ACCOMMODATION_WEIGHT
    } else if offered.contains(&wanted) || wanted.contains(&offered) {
        1.0
    } else {
        0.0
    }
}

fn rating_points(rating: f64) -> f64 {
    if rating >= 4.5 {
        RATING_WEIGHT
    } else if rating >= 4.0 {
        1.5
    } else if rating >= 3.5 {
        1.0
    } else {
        0.0
    }
}

fn reviews_points(reviews: u32) -> f64 {
    match reviews {
        500.. => REVIEWS_WEIGHT,
        200..=499 => 0.7,
        100..=199 => 0.5,
        _ => 0.0,
    }
}

fn price_points(budget: &str, price_range: &str) -> f64 {
    let budget = budget.to_lowercase();
    let price_range = price_range.to_lowercase();

    if !price_range.contains('$') || budget.is_empty() {
        return 0.0;
    }

    match BudgetTier::of_user_budget(&budget) {
        BudgetTier::Budget if contains_any(&price_range, &BUDGET_RANGES) => PRICE_WEIGHT,
        BudgetTier::Luxury if contains_any(&price_range, &LUXURY_RANGES) => PRICE_WEIGHT,
        BudgetTier::Moderate if contains_any(&price_range, &MODERATE_RANGES) => PRICE_WEIGHT,
        BudgetTier::Moderate if contains_any(&price_range, &MODERATE_ADJACENT_RANGES) => 1.5,
        _ => 0.0,
    }
}

fn season_points(best_time: &str, season: Season) -> f64 {
    let best_time = best_time.to_lowercase();

    if best_time == season.as_str().to_lowercase() || best_time == "year-round" {
        SEASON_WEIGHT
    } else if best_time == "all seasons" {
        0.7
    } else {
        0.0
    }
}

fn inclusion_points(count: usize) -> f64 {
    match count {
        7.. => INCLUSIONS_WEIGHT,
        5..=6 => 1.2,
        3..=4 => 0.8,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_catalog::SampleCatalog;

    fn paris_preferences() -> Preferences {
        Preferences {
            destination: "Paris".to_string(),
            budget: "luxury".to_string(),
            duration: "7".to_string(),
            travel_style: "cultural".to_string(),
            group_size: "couple".to_string(),
            accommodation_type: "hotel".to_string(),
        }
    }

    fn paris_package() -> Package {
        Package {
            id: "PKG001".to_string(),
            name: "Art & Culture 1".to_string(),
            destination: "Paris, France".to_string(),
            budget: "luxury".to_string(),
            duration_days: Some(7),
            travel_style: "cultural".to_string(),
            group_size: "couple".to_string(),
            accommodation_type: "hotel".to_string(),
            activities: "Cultural sites, Historical tours, Art galleries".to_string(),
            price_range: "$3000-6000".to_string(),
            rating: 4.6,
            reviews_count: 640,
            includes: "Accommodation, Transportation, Breakfast, Tour guide, WiFi, City tours, Travel kit".to_string(),
            best_time: "Year-round".to_string(),
            source: None,
            booking_links: Default::default(),
        }
    }

    #[test]
    fn test_perfect_baseline_match() {
        let c = BaselineScorer.score(&paris_preferences(), &paris_package());
        assert_eq!(c.raw_score, 15.0);
        assert_eq!(c.max_score, 15.0);
        assert_eq!(c.percentage, 100.0);
    }

    #[test]
    fn test_duration_tiers() {
        assert_eq!(duration_points("7", Some(7)), 2.0);
        assert_eq!(duration_points("7", Some(9)), 1.0);
        assert_eq!(duration_points("7", Some(5)), 1.0);
        assert_eq!(duration_points("7", Some(12)), 0.0);
        assert_eq!(duration_points(" 7 ", Some(7)), 2.0);
        assert_eq!(duration_points("a week", Some(7)), 0.0);
        assert_eq!(duration_points("7", None), 0.0);
    }

    #[test]
    fn test_destination_partial_match() {
        assert_eq!(destination_points("Paris", "Paris, France"), 3.0);
        assert_eq!(destination_points("south of France", "Paris, France"), 2.0);
        assert_eq!(destination_points("Tokyo", "Paris, France"), 0.0);
    }

    #[test]
    fn test_budget_buckets() {
        assert_eq!(budget_points("Luxury", "luxury"), 3.0);
        assert_eq!(budget_points("affordable", "budget"), 2.0);
        assert_eq!(budget_points("high end", "premium"), 2.0);
        assert_eq!(budget_points("$1500", "moderate"), 1.0);
        assert_eq!(budget_points("cheap", "moderate"), 0.0);
        assert_eq!(budget_points("luxury", "budget"), 0.0);
    }

    #[test]
    fn test_style_group_accommodation() {
        assert_eq!(travel_style_points("cultural", "adventure", "Cultural sites, Art"), 2.0);
        assert_eq!(travel_style_points("romantic", "adventure", "Hiking"), 0.0);

        assert_eq!(group_size_points("couple", "2"), 1.0);
        assert_eq!(group_size_points("1", "solo"), 1.0);
        assert_eq!(group_size_points("family", "group"), 1.0);
        assert_eq!(group_size_points("family", "4"), 0.0);
        assert_eq!(group_size_points("6", "8"), 0.0);

        assert_eq!(accommodation_points("boutique hotel", "hotel"), 1.0);
        assert_eq!(accommodation_points("hotel", "Hotel"), 2.0);
        assert_eq!(accommodation_points("camping", "resort"), 0.0);
    }

    #[test]
    fn test_enhanced_perfect_match() {
        let scorer = EnhancedScorer::new(Season::Winter);
        let c = scorer.score(&paris_preferences(), &paris_package());
        assert_eq!(c.max_score, 22.5);
        assert_eq!(c.raw_score, 22.5);
        assert_eq!(c.percentage, 100.0);
    }

    #[test]
    fn test_enhanced_factor_tiers() {
        assert_eq!(rating_points(4.0), 1.5);
        assert_eq!(rating_points(3.7), 1.0);
        assert_eq!(rating_points(3.4), 0.0);

        assert_eq!(reviews_points(500), 1.0);
        assert_eq!(reviews_points(250), 0.7);
        assert_eq!(reviews_points(100), 0.5);
        assert_eq!(reviews_points(99), 0.0);

        assert_eq!(price_points("cheap", "$400-800"), 2.0);
        assert_eq!(price_points("moderate", "$1000-1800"), 2.0);
        assert_eq!(price_points("moderate", "$2000-5000"), 1.5);
        assert_eq!(price_points("luxury", "$400-800"), 0.0);
        assert_eq!(price_points("luxury", "3000-6000"), 0.0);
        assert_eq!(price_points("", "$3000-6000"), 0.0);

        assert_eq!(season_points("Summer", Season::Summer), 1.0);
        assert_eq!(season_points("Year-round", Season::Fall), 1.0);
        assert_eq!(season_points("All seasons", Season::Fall), 0.7);
        assert_eq!(season_points("Spring", Season::Fall), 0.0);

        assert_eq!(inclusion_points(7), 1.5);
        assert_eq!(inclusion_points(5), 1.2);
        assert_eq!(inclusion_points(3), 0.8);
        assert_eq!(inclusion_points(2), 0.0);
    }

    #[test]
    fn test_percentages_normalised_over_catalog() {
        let preferences = paris_preferences();
        let enhanced = EnhancedScorer::new(Season::Summer);

        for package in SampleCatalog::generate(200, 11) {
            let base = BaselineScorer.score(&preferences, &package);
            assert!((0.0..=100.0).contains(&base.percentage));
            assert_eq!(base.percentage, base.raw_score / 15.0 * 100.0);

            let rich = enhanced.score(&preferences, &package);
            assert!((0.0..=100.0).contains(&rich.percentage));
            assert_eq!(rich.percentage, rich.raw_score / 22.5 * 100.0);
        }
    }

    #[test]
    fn test_scoring_does_not_mutate() {
        let preferences = paris_preferences();
        let package = paris_package();
        let before = package.clone();
        let _ = EnhancedScorer::new(Season::Spring).score(&preferences, &package);
        assert_eq!(package, before);
    }
}
