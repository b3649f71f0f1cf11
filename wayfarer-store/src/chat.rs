use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path;
use std::time::Duration;
use tracing::warn;
use wayfarer_core::generator::GeneratorError;
use wayfarer_shared::Masked;

use crate::app_config::GeneratorConfig;
use crate::StoreError;

/// Reads the bearer token from `path`. Missing or blank files yield `None`.
pub fn read_api_key(path: impl AsRef<Path>) -> Option<Masked<String>> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let key = contents.trim();
            if key.is_empty() {
                warn!(path = %path.display(), "API key file is empty");
                None
            } else {
                Some(Masked::new(key.to_string()))
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "API key file not readable; chat features disabled");
            None
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Thin client for an OpenAI-compatible chat completion endpoint.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    api_key: Masked<String>,
    endpoint: String,
    model: String,
}

impl ChatClient {
    pub fn new(config: &GeneratorConfig, api_key: Masked<String>) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `messages` and returns the trimmed text of the first choice.
    pub async fn complete(&self, messages: Value, max_tokens: u32, temperature: f32) -> Result<String, GeneratorError> {
        let body = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeneratorError::Transport(format!("unexpected status {}", status)));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| GeneratorError::InvalidResponse("no completion choices".to_string()))
    }
}
