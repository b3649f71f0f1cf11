use serde::Serialize;
use wayfarer_shared::Preferences;

use crate::validation::parse_duration;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AdviceSection {
    pub title: String,
    pub items: Vec<String>,
}

impl AdviceSection {
    fn new(title: &str, items: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Rule-based accommodation advice shown next to the package list
pub struct AccommodationAdvisor;

impl AccommodationAdvisor {
    pub fn suggestions(preferences: &Preferences) -> Vec<AdviceSection> {
        let budget = preferences.budget.to_lowercase();
        let style = preferences.travel_style.to_lowercase();
        let mut sections = Vec::new();

        if ["budget", "cheap", "low", "affordable", "$"].iter().any(|w| budget.contains(w)) {
            sections.push(AdviceSection::new(
                "Budget-Friendly Options",
                &[
                    "Hostels with private rooms or dorms",
                    "Budget hotels or motels",
                    "Airbnb shared spaces or private rooms",
                    "Guesthouses and B&Bs",
                    "Youth hostels (if applicable)",
                ],
            ));
        } else if ["luxury", "high", "premium", "expensive"].iter().any(|w| budget.contains(w)) {
            sections.push(AdviceSection::new(
                "Luxury Accommodations",
                &[
                    "5-star hotels and resorts",
                    "Luxury villas and penthouses",
                    "Boutique hotels with premium amenities",
                    "All-inclusive resorts",
                    "High-end vacation rentals",
                ],
            ));
        } else {
            sections.push(AdviceSection::new(
                "Mid-Range Options",
                &[
                    "3-4 star hotels with good amenities",
                    "Well-reviewed Airbnb entire places",
                    "Business hotels with modern facilities",
                    "Serviced apartments for longer stays",
                ],
            ));
        }

        let style_section = match style.as_str() {
            "adventure" => Some(AdviceSection::new(
                "Adventure-Focused Stays",
                &[
                    "Mountain lodges and cabins",
                    "Eco-lodges near nature activities",
                    "Camping sites and glamping options",
                    "Adventure hostels with gear rental",
                ],
            )),
            "relaxation" => Some(AdviceSection::new(
                "Relaxation-Oriented",
                &[
                    "Spa resorts and wellness retreats",
                    "Beachfront hotels with pools",
                    "Quiet countryside accommodations",
                    "Hotels with fitness and wellness facilities",
                ],
            )),
            "cultural" => Some(AdviceSection::new(
                "Cultural Immersion",
                &[
                    "Hotels in historic districts",
                    "Traditional guesthouses or ryokans",
                    "Accommodations near museums and landmarks",
                    "Locally-owned boutique hotels",
                ],
            )),
            "business" => Some(AdviceSection::new(
                "Business-Friendly",
                &[
                    "Business hotels with conference facilities",
                    "Hotels near business districts",
                    "Extended stay hotels for longer trips",
                    "Accommodations with reliable WiFi and workspaces",
                ],
            )),
            _ => None,
        };
        sections.extend(style_section);

        if parse_duration(&preferences.duration).is_some_and(|days| days >= 7) {
            sections.push(AdviceSection::new(
                "Extended Stay Tips",
                &[
                    "Consider vacation rentals for better weekly rates",
                    "Look for accommodations with kitchen facilities",
                    "Extended stay hotels with laundry services",
                ],
            ));
        }

        sections.push(AdviceSection::new(
            "Booking Tips",
            &[
                "Compare prices on multiple booking platforms",
                "Read recent reviews from verified guests",
                "Check cancellation policies before booking",
                "Look for accommodations with good location ratings",
            ],
        ));

        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_cultural_long_stay() {
        let prefs = Preferences {
            budget: "affordable".to_string(),
            travel_style: "Cultural".to_string(),
            duration: "10".to_string(),
            ..Default::default()
        };
        let titles: Vec<_> = AccommodationAdvisor::suggestions(&prefs)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Budget-Friendly Options", "Cultural Immersion", "Extended Stay Tips", "Booking Tips"]
        );
    }

    #[test]
    fn test_unspecified_preferences_get_mid_range() {
        let titles: Vec<_> = AccommodationAdvisor::suggestions(&Preferences::default())
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["Mid-Range Options", "Booking Tips"]);
    }
}
