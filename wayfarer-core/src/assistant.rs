use async_trait::async_trait;
use wayfarer_shared::{PreferenceKey, Preferences, ScoredPackage};

use crate::extraction::Extraction;
use crate::generator::GeneratorError;

/// Language-model helper for the conversational parts of trip planning.
///
/// Callers treat every error as "use the rule-based answer instead".
#[async_trait]
pub trait TravelAssistant: Send + Sync {
    /// Read one preference out of a free-text reply.
    async fn extract_preference(&self, reply: &str, key: PreferenceKey) -> Result<Extraction, GeneratorError>;

    /// Conversational question asking again for `key`.
    async fn followup_question(&self, key: PreferenceKey, previous_reply: &str) -> Result<String, GeneratorError>;

    /// Answer a question about a ranked shortlist.
    async fn advise(
        &self,
        question: &str,
        preferences: &Preferences,
        packages: &[ScoredPackage],
    ) -> Result<String, GeneratorError>;
}
