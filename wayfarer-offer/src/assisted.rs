//! Conversational features that prefer the travel assistant and fall back
//! to the rule-based helpers when it fails, times out or is not configured.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use wayfarer_core::assistant::TravelAssistant;
use wayfarer_core::extraction::{Extraction, PreferenceExtractor};
use wayfarer_core::generator::GeneratorError;
use wayfarer_shared::{PreferenceKey, Preferences, ScoredPackage};

use crate::consultation::Consultant;

async fn ask<T>(
    timeout: Duration,
    task: &'static str,
    call: impl Future<Output = Result<T, GeneratorError>>,
) -> Option<T> {
    let outcome = tokio::time::timeout(timeout, call)
        .await
        .unwrap_or_else(|_| Err(GeneratorError::Timeout(timeout.as_secs())));

    match outcome {
        Ok(value) => Some(value),
        Err(GeneratorError::Unavailable) => {
            debug!(task, "Assistant not configured; using rules");
            None
        }
        Err(e) => {
            warn!(task, error = %e, "Assistant failed; using rules");
            None
        }
    }
}

/// Preference capture from free text
pub struct PreferenceCapture {
    rules: PreferenceExtractor,
    assistant: Arc<dyn TravelAssistant>,
    timeout: Duration,
}

impl PreferenceCapture {
    pub fn new(rules: PreferenceExtractor, assistant: Arc<dyn TravelAssistant>, timeout: Duration) -> Self {
        Self {
            rules,
            assistant,
            timeout,
        }
    }

    pub async fn extract(&self, reply: &str, key: PreferenceKey) -> Extraction {
        match ask(self.timeout, "extract_preference", self.assistant.extract_preference(reply, key)).await {
            Some(extraction) => extraction,
            None => self.rules.extract(reply, key),
        }
    }

    /// Every preference stated in `text`; the rest keep the sentinel.
    pub async fn extract_all(&self, text: &str) -> Preferences {
        let mut preferences = Preferences::default();
        for key in PreferenceKey::ALL {
            if let Extraction { value: Some(value), needs_clarification: false, .. } = self.extract(text, key).await {
                debug!("Extracted {}: {}", key, value);
                preferences.set(key, value);
            }
        }
        preferences
    }

    pub async fn followup_question(&self, key: PreferenceKey, previous_reply: &str) -> String {
        ask(self.timeout, "followup_question", self.assistant.followup_question(key, previous_reply))
            .await
            .unwrap_or_else(|| PreferenceExtractor::followup_question(key).to_string())
    }
}

/// Answers follow-up questions about a recommendation list
pub struct AssistedConsultant {
    assistant: Arc<dyn TravelAssistant>,
    timeout: Duration,
}

impl AssistedConsultant {
    pub fn new(assistant: Arc<dyn TravelAssistant>, timeout: Duration) -> Self {
        Self { assistant, timeout }
    }

    /// `packages` must be in ranked order.
    pub async fn answer(&self, question: &str, preferences: &Preferences, packages: &[ScoredPackage]) -> String {
        ask(self.timeout, "advise", self.assistant.advise(question, preferences, packages))
            .await
            .unwrap_or_else(|| Consultant::answer(question, packages))
    }
}
