use regex::Regex;
use serde::{Deserialize, Serialize};
use wayfarer_shared::{PreferenceKey, Preferences};

use crate::{CoreError, CoreResult};

const TRAVEL_STYLES: [&str; 6] = ["adventure", "relaxation", "cultural", "business", "romantic", "family"];
const GROUP_WORDS: [&str; 4] = ["solo", "couple", "family", "group"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Result of looking for one preference in a reply
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Extraction {
    pub value: Option<String>,
    pub confidence: Confidence,
    pub needs_clarification: bool,
}

impl Extraction {
    pub fn found(value: String) -> Self {
        Self {
            value: Some(value),
            confidence: Confidence::Medium,
            needs_clarification: false,
        }
    }

    pub fn unclear() -> Self {
        Self {
            value: None,
            confidence: Confidence::Low,
            needs_clarification: true,
        }
    }
}

/// Keyword based preference extraction.
///
/// Anything not explicitly stated is reported as needing clarification
/// rather than guessed.
pub struct PreferenceExtractor {
    destination: Regex,
    destination_prefix: Regex,
    budget: Regex,
    duration: Regex,
    travel_style: Regex,
    group_size: Regex,
    accommodation_type: Regex,
}

impl PreferenceExtractor {
    pub fn new() -> CoreResult<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| CoreError::InternalError(format!("bad extraction pattern: {}", e)))
        };

        Ok(Self {
            destination: compile(r"(?:to|visit|go\s+to)\s+([a-zA-Z\s,]+?)(?:\s+for|\s+in|\s*$)")?,
            destination_prefix: compile(r"^(?:go to|visit|to)\s+")?,
            budget: compile(
                r"(?:budget.*?is|spend|cost.*?is)\s*\$?(\d+(?:,\d{3})*(?:\.\d{2})?)|(\d+(?:,\d{3})*(?:\.\d{2})?)\s*(?:dollars?|bucks?|\$)|(?:budget.*?)?(luxury|moderate|cheap|expensive)",
            )?,
            duration: compile(r"(\d+)\s*(?:days?|nights?|weeks?|months?)")?,
            travel_style: compile(
                r"(?:travel|style|experience|trip).*?\b(adventure|relaxation|cultural|business|romantic|family)\b|\b(adventure|relaxation|cultural|business|romantic|family)\b(?:\s+(?:travel|style|experience|trip))?",
            )?,
            group_size: compile(
                r"(\d+)\s*(?:people|person|travelers?)|(?:\b(solo|couple|family|group)\b)(?:\s+(?:travel|trip|vacation))?",
            )?,
            accommodation_type: compile(
                r"(?:stay|staying|accommodation).*?\b(hotel|hostel|airbnb|resort|camping|motel|guesthouse|boutique)\b|\b(hotel|hostel|airbnb|resort|camping|motel|guesthouse|boutique)\b",
            )?,
        })
    }

    fn pattern(&self, key: PreferenceKey) -> &Regex {
        match key {
            PreferenceKey::Destination => &self.destination,
            PreferenceKey::Budget => &self.budget,
            PreferenceKey::Duration => &self.duration,
            PreferenceKey::TravelStyle => &self.travel_style,
            PreferenceKey::GroupSize => &self.group_size,
            PreferenceKey::AccommodationType => &self.accommodation_type,
        }
    }

    /// Look for a single preference in a free-text reply.
    pub fn extract(&self, text: &str, key: PreferenceKey) -> Extraction {
        let lowered = text.to_lowercase();

        let Some(captures) = self.pattern(key).captures(&lowered) else {
            return Extraction::unclear();
        };

        // First non-empty group wins
        let value = captures
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str().trim())
            .find(|s| !s.is_empty());

        let Some(value) = value else {
            return Extraction::unclear();
        };

        let value = match key {
            PreferenceKey::Destination => self.destination_prefix.replace(value, "").trim().to_string(),
            _ => value.to_string(),
        };

        let valid = match key {
            PreferenceKey::TravelStyle => TRAVEL_STYLES.contains(&value.as_str()),
            PreferenceKey::GroupSize => {
                GROUP_WORDS.contains(&value.as_str()) || value.chars().all(|c| c.is_ascii_digit())
            }
            PreferenceKey::Destination => value.chars().count() >= 2,
            _ => true,
        };

        if valid {
            Extraction::found(value)
        } else {
            Extraction::unclear()
        }
    }

    /// Fill every preference that can be read from `text`; the rest keep the sentinel.
    pub fn extract_all(&self, text: &str) -> Preferences {
        let mut preferences = Preferences::default();
        for key in PreferenceKey::ALL {
            if let Extraction { value: Some(value), needs_clarification: false, .. } = self.extract(text, key) {
                tracing::debug!("Extracted {}: {}", key, value);
                preferences.set(key, value);
            }
        }
        preferences
    }

    /// Default question asked when a preference is still missing.
    pub fn followup_question(key: PreferenceKey) -> &'static str {
        match key {
            PreferenceKey::Destination => "Where would you like to travel?",
            PreferenceKey::Budget => "What is your budget range for this trip?",
            PreferenceKey::Duration => "How many days are you planning to travel?",
            PreferenceKey::TravelStyle => {
                "What type of travel experience are you looking for? (adventure, relaxation, cultural, business, etc.)"
            }
            PreferenceKey::GroupSize => "How many people will be traveling?",
            PreferenceKey::AccommodationType => "What type of accommodation do you prefer?",
        }
    }
}
