use wayfarer_shared::{Package, PackageDraft, Preferences, Season, NOT_SPECIFIED};

use crate::pricing::{activities_for_style, default_price_for_budget};

pub const DEFAULT_RATING: f64 = 4.2;
pub const DEFAULT_REVIEWS: u32 = 300;
pub const RATING_RANGE: std::ops::RangeInclusive<f64> = 3.5..=5.0;
pub const REVIEWS_RANGE: std::ops::RangeInclusive<u32> = 100..=1000;

/// Turns generator drafts into catalog-shaped packages.
///
/// Every missing or malformed attribute is defaulted; a draft is never
/// rejected.
#[derive(Debug, Clone, Copy)]
pub struct DraftValidator {
    season: Season,
}

impl DraftValidator {
    pub fn new(season: Season) -> Self {
        Self { season }
    }

    /// `position` is 1-based and becomes the `ONLINE00n` identifier.
    pub fn validate(&self, draft: &PackageDraft, position: usize, preferences: &Preferences) -> Package {
        let destination = preferences.destination.clone();
        let budget = preferences.budget.clone();
        let travel_style = preferences.travel_style.clone();

        let name = present(&draft.name)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} Experience in {}", title_case(&travel_style), destination));
        let activities = present(&draft.activities)
            .map(str::to_string)
            .unwrap_or_else(|| activities_for_style(&travel_style).to_string());
        let price_range = present(&draft.price_range)
            .map(str::to_string)
            .unwrap_or_else(|| default_price_for_budget(&budget).to_string());
        let includes = present(&draft.includes)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Accommodation, Transportation, {} activities, Travel insurance", travel_style));
        let best_time = present(&draft.best_time)
            .map(str::to_string)
            .unwrap_or_else(|| self.season.to_string());

        Package {
            id: format!("ONLINE{:03}", position),
            name,
            destination,
            budget,
            duration_days: parse_duration(&preferences.duration),
            travel_style,
            group_size: preferences.group_size.clone(),
            accommodation_type: preferences.accommodation_type.clone(),
            activities,
            price_range,
            rating: clamp_rating(draft.rating.as_deref()),
            reviews_count: clamp_reviews(draft.reviews_count.as_deref()),
            includes,
            best_time,
            source: None,
            booking_links: Default::default(),
        }
    }
}

/// Whole days, or `None` for anything that is not a non-negative integer.
pub fn parse_duration(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

pub fn clamp_rating(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|r| RATING_RANGE.contains(r))
        .unwrap_or(DEFAULT_RATING)
}

pub fn clamp_reviews(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|r| REVIEWS_RANGE.contains(r))
        .unwrap_or(DEFAULT_REVIEWS)
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != NOT_SPECIFIED)
}

fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
