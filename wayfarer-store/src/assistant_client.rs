use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;
use wayfarer_core::assistant::TravelAssistant;
use wayfarer_core::extraction::{Confidence, Extraction};
use wayfarer_core::generator::GeneratorError;
use wayfarer_shared::{PreferenceKey, Preferences, ScoredPackage};

use crate::chat::ChatClient;
use crate::generator_client::DisabledGenerator;

const EXTRACTION_MAX_TOKENS: u32 = 200;
const EXTRACTION_TEMPERATURE: f32 = 0.3;
const FOLLOWUP_MAX_TOKENS: u32 = 100;
const FOLLOWUP_TEMPERATURE: f32 = 0.7;
const ADVICE_MAX_TOKENS: u32 = 500;
const ADVICE_TEMPERATURE: f32 = 0.7;

/// Travel assistant that asks a chat completion endpoint
pub struct ChatTravelAssistant {
    chat: ChatClient,
}

impl ChatTravelAssistant {
    pub fn new(chat: ChatClient) -> Self {
        Self { chat }
    }
}

#[async_trait]
impl TravelAssistant for ChatTravelAssistant {
    async fn extract_preference(&self, reply: &str, key: PreferenceKey) -> Result<Extraction, GeneratorError> {
        let messages = json!([{ "role": "user", "content": extraction_prompt(reply, key) }]);
        let content = self
            .chat
            .complete(messages, EXTRACTION_MAX_TOKENS, EXTRACTION_TEMPERATURE)
            .await?;
        let extraction = parse_extraction(&content)?;
        debug!(key = %key, ?extraction, "Assistant extracted preference");
        Ok(extraction)
    }

    async fn followup_question(&self, key: PreferenceKey, previous_reply: &str) -> Result<String, GeneratorError> {
        let messages = json!([{ "role": "user", "content": followup_prompt(key, previous_reply) }]);
        let question = self
            .chat
            .complete(messages, FOLLOWUP_MAX_TOKENS, FOLLOWUP_TEMPERATURE)
            .await?;
        non_empty(question)
    }

    async fn advise(
        &self,
        question: &str,
        preferences: &Preferences,
        packages: &[ScoredPackage],
    ) -> Result<String, GeneratorError> {
        let messages = json!([
            { "role": "system", "content": advice_prompt(preferences, packages) },
            { "role": "user", "content": question },
        ]);
        let answer = self.chat.complete(messages, ADVICE_MAX_TOKENS, ADVICE_TEMPERATURE).await?;
        non_empty(answer)
    }
}

#[async_trait]
impl TravelAssistant for DisabledGenerator {
    async fn extract_preference(&self, _reply: &str, _key: PreferenceKey) -> Result<Extraction, GeneratorError> {
        Err(GeneratorError::Unavailable)
    }

    async fn followup_question(&self, _key: PreferenceKey, _previous_reply: &str) -> Result<String, GeneratorError> {
        Err(GeneratorError::Unavailable)
    }

    async fn advise(
        &self,
        _question: &str,
        _preferences: &Preferences,
        _packages: &[ScoredPackage],
    ) -> Result<String, GeneratorError> {
        Err(GeneratorError::Unavailable)
    }
}

fn non_empty(text: String) -> Result<String, GeneratorError> {
    if text.is_empty() {
        Err(GeneratorError::InvalidResponse("empty completion".to_string()))
    } else {
        Ok(text)
    }
}

fn extraction_prompt(reply: &str, key: PreferenceKey) -> String {
    format!(
        "You extract travel preferences from what a traveller wrote.\n\n\
         Traveller's reply: \"{reply}\"\n\n\
         Extract the {key} and answer with JSON only, in this exact shape:\n\
         {{\"extracted_value\": \"value\", \"confidence\": \"high|medium|low\", \"needs_clarification\": true|false}}\n\n\
         Rules:\n\
         - destination: a city, country or region named in the reply.\n\
         - budget: an amount, a range, or a word such as budget, moderate or luxury.\n\
         - duration: a number of days, weeks or another explicit period.\n\
         - travel_style: adventure, relaxation, cultural, business, romantic, family or similar.\n\
         - group_size: a number of people or a word such as solo, couple, family or group.\n\
         - accommodation_type: hotel, hostel, airbnb, resort, camping or similar.\n\n\
         Only extract what is stated outright. Never guess. When the {key} is unclear or absent, \
         set extracted_value to null and needs_clarification to true.",
        reply = reply,
        key = key,
    )
}

fn followup_prompt(key: PreferenceKey, previous_reply: &str) -> String {
    format!(
        "You are a friendly travel agent. The traveller said: \"{previous_reply}\"\n\n\
         Their {label} is still unclear. Write one short, natural follow-up question that asks for it.",
        previous_reply = previous_reply,
        label = key.label().to_lowercase(),
    )
}

fn advice_prompt(preferences: &Preferences, packages: &[ScoredPackage]) -> String {
    let mut prompt = format!(
        "You are a travel expert helping a traveller pick a package.\n\
         Their preferences:\n\
         - Destination: {}\n\
         - Budget: {}\n\
         - Duration: {} days\n\
         - Travel Style: {}\n\
         - Group Size: {}\n\
         - Accommodation: {}\n\n\
         The top {} packages for them:\n",
        preferences.destination,
        preferences.budget,
        preferences.duration,
        preferences.travel_style,
        preferences.group_size,
        preferences.accommodation_type,
        packages.len(),
    );

    for (i, scored) in packages.iter().enumerate() {
        let p = &scored.package;
        let duration = p.duration_days.map(|d| d.to_string()).unwrap_or_else(|| "?".to_string());
        prompt.push_str(&format!(
            "\nPackage {n}: {name}\n\
             - Destination: {destination}\n\
             - Price: {price}\n\
             - Duration: {duration} days\n\
             - Style: {style}\n\
             - Group Size: {group}\n\
             - Accommodation: {accommodation}\n\
             - Rating: {rating} ({reviews} reviews)\n\
             - Activities: {activities}\n\
             - Includes: {includes}\n\
             - Best Time: {best_time}\n\
             - Compatibility Score: {score:.1}%\n",
            n = i + 1,
            name = p.name,
            destination = p.destination,
            price = p.price_range,
            duration = duration,
            style = p.travel_style,
            group = p.group_size,
            accommodation = p.accommodation_type,
            rating = p.rating,
            reviews = p.reviews_count,
            activities = p.activities,
            includes = p.includes,
            best_time = p.best_time,
            score = scored.best_percentage(),
        ));
    }

    prompt.push_str(
        "\nUsing the question and the preferences, recommend the most suitable package and give concrete reasons. \
         For general travel questions, answer helpfully and tie the answer back to these packages where it fits. \
         Keep it short and conversational.",
    );
    prompt
}

#[derive(Debug, Deserialize)]
struct ExtractionReply {
    #[serde(default)]
    extracted_value: Value,
    #[serde(default = "low_confidence")]
    confidence: Confidence,
    #[serde(default)]
    needs_clarification: bool,
}

fn low_confidence() -> Confidence {
    Confidence::Low
}

/// Reads the JSON object in a completion, tolerating prose or code fences
/// around it. A reply without a usable value always needs clarification.
pub fn parse_extraction(content: &str) -> Result<Extraction, GeneratorError> {
    let json = match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => return Err(GeneratorError::InvalidResponse("no JSON object in reply".to_string())),
    };
    let reply: ExtractionReply =
        serde_json::from_str(json).map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;

    let value = match reply.extracted_value {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("null")),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    };

    Ok(match value {
        Some(value) if !reply.needs_clarification => Extraction {
            value: Some(value),
            confidence: reply.confidence,
            needs_clarification: false,
        },
        _ => Extraction {
            value: None,
            confidence: reply.confidence,
            needs_clarification: true,
        },
    })
}
