//! The recommendation contract: prompt in, validated records out.

use serde::Deserialize;
use thiserror::Error;

/// An AI-suggested (song, movie, reason) triple. The response schema is
/// exactly these three string fields; anything else is a shape mismatch.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recommendation {
    pub song: String,
    pub movie: String,
    pub reason: String,
}

/// Failure taxonomy for the gateway. None of these are fatal; callers
/// surface an empty result set and keep running.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// No access credential configured; no request was attempted.
    #[error("no API key configured")]
    MissingKey,

    /// The service was unreachable or answered with a non-success status.
    #[error("recommendation request failed: {0}")]
    Http(String),

    /// The response did not parse as the expected array of records.
    #[error("unexpected response shape: {0}")]
    BadShape(String),
}

/// Seam to the external completion service: takes the user's free-text
/// description, returns the model's raw response text.
pub trait CompletionApi {
    fn complete(&self, prompt: &str) -> Result<String, RecommendError>;
}

/// Ask the service for mood recommendations.
///
/// A prompt that is empty after trimming short-circuits to an empty result
/// set without issuing a request. Otherwise exactly one call is made; the
/// response order is preserved and nothing is cached.
pub fn recommend(
    api: &dyn CompletionApi,
    prompt: &str,
) -> Result<Vec<Recommendation>, RecommendError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Ok(Vec::new());
    }
    let text = api.complete(prompt)?;
    parse_recommendations(&text)
}

/// Validate the model's response text against the expected shape.
pub(super) fn parse_recommendations(text: &str) -> Result<Vec<Recommendation>, RecommendError> {
    serde_json::from_str::<Vec<Recommendation>>(text)
        .map_err(|e| RecommendError::BadShape(e.to_string()))
}
