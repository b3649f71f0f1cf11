use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Booking sites a package can link out to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BookingSite {
    Expedia,
    BookingCom,
    Agoda,
    TripAdvisor,
    Kayak,
    #[serde(rename = "makemytrip")]
    MakeMyTrip,
    Cleartrip,
    Goibibo,
}

impl BookingSite {
    pub const ALL: [BookingSite; 8] = [
        BookingSite::Expedia,
        BookingSite::BookingCom,
        BookingSite::Agoda,
        BookingSite::TripAdvisor,
        BookingSite::Kayak,
        BookingSite::MakeMyTrip,
        BookingSite::Cleartrip,
        BookingSite::Goibibo,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            BookingSite::Expedia => "Expedia",
            BookingSite::BookingCom => "Booking.com",
            BookingSite::Agoda => "Agoda",
            BookingSite::TripAdvisor => "TripAdvisor",
            BookingSite::Kayak => "Kayak",
            BookingSite::MakeMyTrip => "MakeMyTrip",
            BookingSite::Cleartrip => "Cleartrip",
            BookingSite::Goibibo => "Goibibo",
        }
    }
}

/// A bookable trip offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub destination: String,
    pub budget: String,
    /// `None` when the source value was not an integer number of days.
    pub duration_days: Option<u32>,
    pub travel_style: String,
    pub group_size: String,
    pub accommodation_type: String,
    pub activities: String,
    pub price_range: String,
    pub rating: f64,
    pub reviews_count: u32,
    /// Comma separated.
    pub includes: String,
    pub best_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub booking_links: BTreeMap<BookingSite, String>,
}

impl Package {
    /// Number of comma separated inclusion items; an empty string has none.
    pub fn inclusion_count(&self) -> usize {
        if self.includes.is_empty() {
            0
        } else {
            self.includes.split(',').count()
        }
    }
}

/// Loosely-typed package as returned by an external generator.
///
/// Every attribute is optional text; validation into a [`Package`] happens
/// on the matching side, never in the generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageDraft {
    pub name: Option<String>,
    pub activities: Option<String>,
    pub price_range: Option<String>,
    pub rating: Option<String>,
    pub reviews_count: Option<String>,
    pub includes: Option<String>,
    pub best_time: Option<String>,
}

/// Outcome of one scoring pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Compatibility {
    pub percentage: f64,
    pub raw_score: f64,
    pub max_score: f64,
}

impl Compatibility {
    pub fn new(raw_score: f64, max_score: f64) -> Self {
        let percentage = if max_score > 0.0 {
            raw_score / max_score * 100.0
        } else {
            0.0
        };
        Self {
            percentage,
            raw_score,
            max_score,
        }
    }
}

/// A package annotated with its compatibility results.
///
/// Baseline and enhanced results live under separate keys so a package
/// scored by both keeps both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredPackage {
    #[serde(flatten)]
    pub package: Package,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<Compatibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_compatibility: Option<Compatibility>,
}

impl ScoredPackage {
    pub fn new(package: Package) -> Self {
        Self {
            package,
            compatibility: None,
            enhanced_compatibility: None,
        }
    }

    /// Enhanced percentage when present, otherwise baseline, otherwise zero.
    pub fn best_percentage(&self) -> f64 {
        self.enhanced_compatibility
            .or(self.compatibility)
            .map(|c| c.percentage)
            .unwrap_or(0.0)
    }
}
