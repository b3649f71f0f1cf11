use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wayfarer_shared::Package;

use crate::pricing::price_range_for;

const DESTINATIONS: [&str; 20] = [
    "Paris, France", "Tokyo, Japan", "New York, USA", "London, UK", "Rome, Italy",
    "Barcelona, Spain", "Amsterdam, Netherlands", "Sydney, Australia", "Dubai, UAE",
    "Bangkok, Thailand", "Istanbul, Turkey", "Prague, Czech Republic", "Vienna, Austria",
    "Berlin, Germany", "Copenhagen, Denmark", "Stockholm, Sweden", "Zurich, Switzerland",
    "Singapore", "Hong Kong", "Mumbai, India",
];

const BUDGETS: [&str; 7] = ["budget", "moderate", "luxury", "$500-1000", "$1000-2000", "$2000-5000", "$5000+"];
const DURATIONS: [u32; 7] = [3, 5, 7, 10, 14, 21, 28];
const TRAVEL_STYLES: [&str; 6] = ["adventure", "relaxation", "cultural", "business", "romantic", "family"];
const GROUP_SIZES: [&str; 8] = ["solo", "couple", "family", "group", "2", "4", "6", "8"];
const ACCOMMODATION_TYPES: [&str; 6] = ["hotel", "hostel", "airbnb", "resort", "camping", "boutique"];
const SEASONS: [&str; 5] = ["Spring", "Summer", "Fall", "Winter", "Year-round"];

const PACKAGE_NAMES: [&str; 20] = [
    "City Explorer", "Cultural Immersion", "Adventure Seeker", "Luxury Escape",
    "Budget Traveler", "Business Elite", "Romantic Getaway", "Family Fun",
    "Backpacker Special", "Wellness Retreat", "Historic Journey", "Modern Metropolis",
    "Nature Explorer", "Culinary Tour", "Art & Culture", "Shopping Spree",
    "Beach Paradise", "Mountain Adventure", "Desert Safari", "Urban Discovery",
];

const ACTIVITIES: [&str; 10] = [
    "City tours, Museums, Local cuisine",
    "Hiking, Adventure sports, Nature walks",
    "Spa treatments, Yoga, Meditation",
    "Shopping, Nightlife, Entertainment",
    "Cultural sites, Historical tours, Art galleries",
    "Beach activities, Water sports, Relaxation",
    "Business meetings, Networking events, City exploration",
    "Family activities, Theme parks, Kid-friendly tours",
    "Budget tours, Free walking tours, Local experiences",
    "Photography tours, Scenic views, Local markets",
];

const BASE_INCLUDES: [&str; 2] = ["Accommodation", "Transportation"];
const OPTIONAL_INCLUDES: [&str; 11] = [
    "Breakfast", "All meals", "Tour guide", "Airport transfers",
    "Travel insurance", "WiFi", "City tours", "Welcome dinner",
    "24/7 support", "Local SIM card", "Travel kit",
];

/// Seeded generator for the demo catalog.
///
/// Used to bootstrap an empty store. The same seed always yields the same
/// packages.
pub struct SampleCatalog;

impl SampleCatalog {
    pub fn generate(count: usize, seed: u64) -> Vec<Package> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..count).map(|i| Self::package(i + 1, &mut rng)).collect()
    }

    fn package<R: Rng>(number: usize, rng: &mut R) -> Package {
        let budget = pick(&BUDGETS, rng);

        Package {
            id: format!("PKG{:03}", number),
            name: format!("{} {}", pick(&PACKAGE_NAMES, rng), number),
            destination: pick(&DESTINATIONS, rng).to_string(),
            budget: budget.to_string(),
            duration_days: DURATIONS.choose(rng).copied(),
            travel_style: pick(&TRAVEL_STYLES, rng).to_string(),
            group_size: pick(&GROUP_SIZES, rng).to_string(),
            accommodation_type: pick(&ACCOMMODATION_TYPES, rng).to_string(),
            activities: pick(&ACTIVITIES, rng).to_string(),
            price_range: price_range_for(budget, rng),
            rating: (rng.gen_range(3.5..=5.0_f64) * 10.0).round() / 10.0,
            reviews_count: rng.gen_range(50..=1000),
            includes: Self::includes(rng),
            best_time: pick(&SEASONS, rng).to_string(),
            source: None,
            booking_links: Default::default(),
        }
    }

    fn includes<R: Rng>(rng: &mut R) -> String {
        let extra = rng.gen_range(2..=5);
        BASE_INCLUDES
            .iter()
            .chain(OPTIONAL_INCLUDES.choose_multiple(rng, extra))
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn pick<R: Rng>(values: &[&'static str], rng: &mut R) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}
