use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};
use wayfarer_core::generator::{GeneratorError, PackageGenerator};
use wayfarer_shared::{PackageDraft, Preferences};

use crate::app_config::GeneratorConfig;
use crate::chat::ChatClient;

const MAX_DRAFTS: usize = 3;

const SYSTEM_PROMPT: &str = "You are a professional travel consultant with extensive knowledge of current travel packages and destinations worldwide.";

/// Package generator backed by a chat completion endpoint
pub struct ChatPackageGenerator {
    chat: ChatClient,
    max_tokens: u32,
    temperature: f32,
}

impl ChatPackageGenerator {
    pub fn new(chat: ChatClient, config: &GeneratorConfig) -> Self {
        Self {
            chat,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl PackageGenerator for ChatPackageGenerator {
    async fn generate_packages(
        &self,
        preferences: &Preferences,
    ) -> Result<Vec<PackageDraft>, GeneratorError> {
        let messages = json!([
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": build_prompt(preferences) },
        ]);

        info!(destination = %preferences.destination, model = %self.chat.model(), "Requesting online packages");
        let content = self.chat.complete(messages, self.max_tokens, self.temperature).await?;

        let drafts = parse_drafts(&content);
        debug!(count = drafts.len(), "Parsed package drafts");
        Ok(drafts)
    }
}

/// Used when no API key is configured. Every chat feature reports itself
/// unavailable.
pub struct DisabledGenerator;

#[async_trait]
impl PackageGenerator for DisabledGenerator {
    async fn generate_packages(&self, _preferences: &Preferences) -> Result<Vec<PackageDraft>, GeneratorError> {
        Err(GeneratorError::Unavailable)
    }
}

fn build_prompt(p: &Preferences) -> String {
    let mut prompt = format!(
        "Find 3 real travel packages that match these preferences:\n\
         - Destination: {}\n\
         - Budget: {}\n\
         - Duration: {} days\n\
         - Travel Style: {}\n\
         - Group Size: {}\n\
         - Accommodation Type: {}\n\n\
         For each package, answer in exactly this format:\n\n",
        p.destination, p.budget, p.duration, p.travel_style, p.group_size, p.accommodation_type
    );

    for n in 1..=MAX_DRAFTS {
        prompt.push_str(&format!(
            "Package {n}:\n\
             package_id: ONLINE{n:03}\n\
             package_name: [Creative package name for {dest}]\n\
             activities: [Specific {style} activities in {dest}]\n\
             price_range: [Realistic price range for a {budget} budget]\n\
             rating: [Rating between 3.5-5.0]\n\
             reviews_count: [Number of reviews between 100-1000]\n\
             includes: [Comma separated list of what is included]\n\
             best_time: [Best season to visit {dest}]\n\n",
            n = n,
            dest = p.destination,
            style = p.travel_style,
            budget = p.budget,
        ));
    }
    prompt
}

/// Splits a completion into at most three `Package N:` blocks.
pub fn parse_drafts(text: &str) -> Vec<PackageDraft> {
    text.split("Package ")
        .skip(1)
        .take(MAX_DRAFTS)
        .map(|block| PackageDraft {
            name: extract_field(block, "package_name"),
            activities: extract_field(block, "activities"),
            price_range: extract_field(block, "price_range"),
            rating: extract_field(block, "rating"),
            reviews_count: extract_field(block, "reviews_count"),
            includes: extract_field(block, "includes"),
            best_time: extract_field(block, "best_time"),
        })
        .collect()
}

/// Value of the first `field: value` line, with template brackets removed.
fn extract_field(block: &str, field: &str) -> Option<String> {
    let value = block.lines().find_map(|line| {
        let line = line.trim();
        let key = line.get(..field.len())?;
        if !key.eq_ignore_ascii_case(field) {
            return None;
        }
        line[field.len()..].trim_start().strip_prefix(':')
    })?;

    let value = value.replace(['[', ']'], "");
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETION: &str = "Here are some options.\n\n\
        Package 1:\n\
        package_id: ONLINE001\n\
        package_name: Kyoto Temples & Tea\n\
        activities: Temple visits, Tea ceremony, Geisha district walk\n\
        price_range: $2500-5000 per person\n\
        rating: 4.8\n\
        reviews_count: 845\n\
        includes: Accommodation, Transportation, Breakfast, Tour guide, JR pass\n\
        best_time: Spring\n\n\
        Package 2:\n\
        package_name: [Tokyo Neon Nights]\n\
        rating: 5.6\n\
        reviews_count: 12\n\
        best_time:\n\n\
        Package 3:\n\
        package_name: Osaka Food Trail\n\n\
        Package 4:\n\
        package_name: Ignored\n";

    #[test]
    fn test_parse_blocks() {
        let drafts = parse_drafts(COMPLETION);
        assert_eq!(drafts.len(), 3);

        assert_eq!(drafts[0].name.as_deref(), Some("Kyoto Temples & Tea"));
        assert_eq!(drafts[0].price_range.as_deref(), Some("$2500-5000 per person"));
        assert_eq!(drafts[0].rating.as_deref(), Some("4.8"));
        assert_eq!(drafts[0].reviews_count.as_deref(), Some("845"));
        assert_eq!(drafts[0].best_time.as_deref(), Some("Spring"));

        assert_eq!(drafts[1].name.as_deref(), Some("Tokyo Neon Nights"));
        assert_eq!(drafts[1].rating.as_deref(), Some("5.6"));
        assert_eq!(drafts[1].best_time, None);
        assert_eq!(drafts[1].activities, None);

        assert_eq!(drafts[2].name.as_deref(), Some("Osaka Food Trail"));
    }

    #[test]
    fn test_field_names_inside_values_are_ignored() {
        let drafts = parse_drafts(
            "Package 1:\n\
             package_name: Celebrating Kyoto\n\
             activities: A tea ceremony that includes a kimono fitting\n\
             price_range: $3000-5000\n\
             Rating : 4.8\n\
             reviews_count: 640\n\
             includes: Accommodation, Breakfast, Tour guide\n\
             best_time: Spring\n",
        );
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].name.as_deref(), Some("Celebrating Kyoto"));
        assert_eq!(drafts[0].rating.as_deref(), Some("4.8"));
        assert_eq!(drafts[0].activities.as_deref(), Some("A tea ceremony that includes a kimono fitting"));
        assert_eq!(drafts[0].includes.as_deref(), Some("Accommodation, Breakfast, Tour guide"));
    }

    #[test]
    fn test_unstructured_reply_has_no_drafts() {
        assert!(parse_drafts("Sorry, I cannot help with that.").is_empty());
    }

    #[test]
    fn test_prompt_mentions_preferences() {
        let prefs = Preferences {
            destination: "Kyoto".to_string(),
            travel_style: "cultural".to_string(),
            ..Default::default()
        };
        let prompt = build_prompt(&prefs);
        assert!(prompt.contains("- Destination: Kyoto"));
        assert!(prompt.contains("package_id: ONLINE003"));
        assert!(prompt.contains("Specific cultural activities in Kyoto"));
    }
}
