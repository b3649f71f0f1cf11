use rand::seq::SliceRandom;
use rand::Rng;

/// Price ranges offered for budget-tier packages.
pub const BUDGET_RANGES: [&str; 3] = ["300-600", "400-800", "500-900"];

/// Price ranges offered for mid-range packages.
pub const MODERATE_RANGES: [&str; 3] = ["800-1500", "1000-1800", "1200-2000"];

/// Wider ranges that still sit next to a moderate budget.
pub const MODERATE_ADJACENT_RANGES: [&str; 2] = ["1000-2000", "2000-5000"];

/// Price ranges offered for luxury packages.
pub const LUXURY_RANGES: [&str; 4] = ["2500-5000", "3000-6000", "4000-8000", "5000-10000"];

/// Fallback range for anything we cannot place.
pub const DEFAULT_RANGE: &str = "$800-1500";

/// Coarse tier of a free-text budget descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    Budget,
    Moderate,
    Luxury,
}

impl BudgetTier {
    /// Classify a traveller's budget text.
    ///
    /// Budget words win over luxury words; anything else is moderate.
    pub fn of_user_budget(budget: &str) -> Self {
        let budget = budget.to_lowercase();
        if ["budget", "cheap", "low"].iter().any(|w| budget.contains(w)) {
            BudgetTier::Budget
        } else if ["luxury", "premium", "high"].iter().any(|w| budget.contains(w)) {
            BudgetTier::Luxury
        } else {
            BudgetTier::Moderate
        }
    }
}

/// Price range for a generated catalog entry of the given budget descriptor.
pub fn price_range_for<R: Rng + ?Sized>(budget: &str, rng: &mut R) -> String {
    let pick = |ranges: &[&str], rng: &mut R| {
        ranges
            .choose(rng)
            .map(|r| format!("${}", r))
            .unwrap_or_else(|| DEFAULT_RANGE.to_string())
    };

    match budget {
        "budget" => pick(&BUDGET_RANGES[..], rng),
        "moderate" => pick(&MODERATE_RANGES[..], rng),
        "luxury" => pick(&LUXURY_RANGES[..3], rng),
        "$500-1000" | "$1000-2000" | "$2000-5000" => budget.to_string(),
        "$5000+" => "$5000-10000".to_string(),
        _ => DEFAULT_RANGE.to_string(),
    }
}

/// Price range assumed for an external package that did not state one.
pub fn default_price_for_budget(budget: &str) -> &'static str {
    match budget.to_lowercase().as_str() {
        "budget" => "$400-800",
        "luxury" => "$3000-6000",
        _ => "$1000-1800",
    }
}

/// Typical activities for a travel style.
pub fn activities_for_style(style: &str) -> &'static str {
    match style.to_lowercase().as_str() {
        "cultural" => "Museums, Historical sites, Art galleries, Cultural tours",
        "adventure" => "Hiking, Rock climbing, Adventure sports, Nature exploration",
        "relaxation" => "Spa treatments, Beach activities, Yoga, Meditation",
        "business" => "Business meetings, Networking events, City exploration, Fine dining",
        "romantic" => "Romantic dinners, Couples spa, Sunset tours, Wine tasting",
        "family" => "Family activities, Theme parks, Kid-friendly tours, Interactive museums",
        _ => "City tours, Local experiences, Sightseeing",
    }
}
