//! Gemini `generateContent` client.
//!
//! Sends the mood description with a JSON response schema so the model
//! answers with a bare array of `{song, movie, reason}` objects, then
//! extracts the text part of the first candidate.

use std::time::Duration;

use serde_json::{Value, json};

use crate::config::RecommendSettings;

use super::gateway::{CompletionApi, RecommendError};

pub struct GeminiClient {
    agent: ureq::Agent,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client from settings. Returns `None` when no credential is
    /// available, so callers never attempt a request without one.
    pub fn from_settings(settings: &RecommendSettings) -> Option<Self> {
        let api_key = settings.resolved_api_key()?;
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(settings.timeout_secs))
            .timeout_write(Duration::from_secs(settings.timeout_secs))
            .build();

        Some(Self {
            agent,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key,
        })
    }

    fn request_body(prompt: &str) -> Value {
        json!({
            "contents": [{
                "parts": [{
                    "text": format!(
                        "The user is looking for Tamil music with this description: \"{prompt}\". \
                         Based on Tamil cinema knowledge, suggest 3-5 songs that match this vibe. \
                         Return the response in JSON format."
                    )
                }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "song": { "type": "STRING" },
                            "movie": { "type": "STRING" },
                            "reason": { "type": "STRING" }
                        },
                        "required": ["song", "movie", "reason"]
                    }
                }
            }
        })
    }
}

impl CompletionApi for GeminiClient {
    fn complete(&self, prompt: &str) -> Result<String, RecommendError> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);

        let response = self
            .agent
            .post(&url)
            .set("x-goog-api-key", &self.api_key)
            .send_json(Self::request_body(prompt))
            .map_err(|e| RecommendError::Http(e.to_string()))?;

        let value: Value = response
            .into_json()
            .map_err(|e| RecommendError::Http(e.to_string()))?;
        extract_candidate_text(&value)
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a `generateContent`
/// response.
pub(super) fn extract_candidate_text(value: &Value) -> Result<String, RecommendError> {
    value["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| RecommendError::BadShape("no candidate text in response".to_string()))
}
