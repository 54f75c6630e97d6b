//! Recommendation module: the mood-search gateway and its Gemini client.
//!
//! One outbound request per explicit user submission; every failure mode
//! degrades to an empty result set at the UI.

mod gateway;
mod gemini;

pub use gateway::{CompletionApi, Recommendation, RecommendError, recommend};
pub use gemini::GeminiClient;

#[cfg(test)]
mod tests;
