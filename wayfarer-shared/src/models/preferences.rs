use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel stored for any preference the dialogue could not resolve.
pub const NOT_SPECIFIED: &str = "Not specified";

fn not_specified() -> String {
    NOT_SPECIFIED.to_string()
}

/// The six preference keys, in the order they are asked for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceKey {
    Destination,
    Budget,
    Duration,
    TravelStyle,
    GroupSize,
    AccommodationType,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 6] = [
        PreferenceKey::Destination,
        PreferenceKey::Budget,
        PreferenceKey::Duration,
        PreferenceKey::TravelStyle,
        PreferenceKey::GroupSize,
        PreferenceKey::AccommodationType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::Destination => "destination",
            PreferenceKey::Budget => "budget",
            PreferenceKey::Duration => "duration",
            PreferenceKey::TravelStyle => "travel_style",
            PreferenceKey::GroupSize => "group_size",
            PreferenceKey::AccommodationType => "accommodation_type",
        }
    }

    /// Human label, e.g. "Travel Style".
    pub fn label(&self) -> &'static str {
        match self {
            PreferenceKey::Destination => "Destination",
            PreferenceKey::Budget => "Budget",
            PreferenceKey::Duration => "Duration",
            PreferenceKey::TravelStyle => "Travel Style",
            PreferenceKey::GroupSize => "Group Size",
            PreferenceKey::AccommodationType => "Accommodation Type",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A traveller's requirements.
///
/// Every field is always present. Keys missing from an incoming JSON payload
/// deserialize to [`NOT_SPECIFIED`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default = "not_specified")]
    pub destination: String,
    #[serde(default = "not_specified")]
    pub budget: String,
    #[serde(default = "not_specified")]
    pub duration: String,
    #[serde(default = "not_specified")]
    pub travel_style: String,
    #[serde(default = "not_specified")]
    pub group_size: String,
    #[serde(default = "not_specified")]
    pub accommodation_type: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            destination: not_specified(),
            budget: not_specified(),
            duration: not_specified(),
            travel_style: not_specified(),
            group_size: not_specified(),
            accommodation_type: not_specified(),
        }
    }
}

impl Preferences {
    pub fn get(&self, key: PreferenceKey) -> &str {
        match key {
            PreferenceKey::Destination => &self.destination,
            PreferenceKey::Budget => &self.budget,
            PreferenceKey::Duration => &self.duration,
            PreferenceKey::TravelStyle => &self.travel_style,
            PreferenceKey::GroupSize => &self.group_size,
            PreferenceKey::AccommodationType => &self.accommodation_type,
        }
    }

    pub fn set(&mut self, key: PreferenceKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            PreferenceKey::Destination => self.destination = value,
            PreferenceKey::Budget => self.budget = value,
            PreferenceKey::Duration => self.duration = value,
            PreferenceKey::TravelStyle => self.travel_style = value,
            PreferenceKey::GroupSize => self.group_size = value,
            PreferenceKey::AccommodationType => self.accommodation_type = value,
        }
    }

    pub fn is_specified(&self, key: PreferenceKey) -> bool {
        self.get(key) != NOT_SPECIFIED
    }

    /// Keys still holding the sentinel.
    pub fn missing(&self) -> Vec<PreferenceKey> {
        PreferenceKey::ALL
            .into_iter()
            .filter(|k| !self.is_specified(*k))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default_to_sentinel() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"destination": "Paris", "duration": "7"}"#).unwrap();
        assert_eq!(prefs.destination, "Paris");
        assert_eq!(prefs.budget, NOT_SPECIFIED);
        assert_eq!(
            prefs.missing(),
            vec![
                PreferenceKey::Budget,
                PreferenceKey::TravelStyle,
                PreferenceKey::GroupSize,
                PreferenceKey::AccommodationType,
            ]
        );
    }

    #[test]
    fn test_set_and_get() {
        let mut prefs = Preferences::default();
        prefs.set(PreferenceKey::TravelStyle, "cultural");
        assert_eq!(prefs.get(PreferenceKey::TravelStyle), "cultural");
        assert!(prefs.is_specified(PreferenceKey::TravelStyle));
        assert!(!prefs.is_specified(PreferenceKey::GroupSize));
    }
}
