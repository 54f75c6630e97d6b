use std::cell::Cell;

use serde_json::json;

use super::gateway::parse_recommendations;
use super::gemini::extract_candidate_text;
use super::*;

struct StubApi {
    response: Result<String, fn() -> RecommendError>,
    calls: Cell<usize>,
}

impl StubApi {
    fn returning(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            calls: Cell::new(0),
        }
    }

    fn failing(err: fn() -> RecommendError) -> Self {
        Self {
            response: Err(err),
            calls: Cell::new(0),
        }
    }
}

impl CompletionApi for StubApi {
    fn complete(&self, _prompt: &str) -> Result<String, RecommendError> {
        self.calls.set(self.calls.get() + 1);
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(make) => Err(make()),
        }
    }
}

const WELL_FORMED: &str = r#"[
    {"song": "Nenjukkul Peidhidum", "movie": "Vaaranam Aayiram", "reason": "soft rain mood"},
    {"song": "Mazhai Kuruvi", "movie": "Chekka Chivantha Vaanam", "reason": "rain imagery"},
    {"song": "Uyire", "movie": "Bombay", "reason": "longing on a night drive"},
    {"song": "Vinnaithaandi Varuvaaya", "movie": "VTV", "reason": "wistful highway feel"}
]"#;

#[test]
fn empty_prompt_short_circuits_without_a_call() {
    let api = StubApi::returning(WELL_FORMED);
    let out = recommend(&api, "").expect("empty prompt is not an error");
    assert!(out.is_empty());
    assert_eq!(api.calls.get(), 0);

    let out = recommend(&api, "   \t ").expect("whitespace prompt is not an error");
    assert!(out.is_empty());
    assert_eq!(api.calls.get(), 0);
}

#[test]
fn well_formed_response_passes_through_in_order() {
    let api = StubApi::returning(WELL_FORMED);
    let out = recommend(&api, "rainy night drive").expect("well-formed response");

    assert_eq!(api.calls.get(), 1);
    assert_eq!(out.len(), 4);
    assert_eq!(out[0].song, "Nenjukkul Peidhidum");
    assert_eq!(out[1].movie, "Chekka Chivantha Vaanam");
    assert_eq!(out[3].reason, "wistful highway feel");
}

#[test]
fn non_json_response_is_a_shape_error() {
    let api = StubApi::returning("the model got chatty instead of returning JSON");
    let err = recommend(&api, "gym pump").unwrap_err();
    assert!(matches!(err, RecommendError::BadShape(_)));
}

#[test]
fn missing_fields_are_a_shape_error() {
    let api = StubApi::returning(r#"[{"song": "Kaavaalaa"}]"#);
    let err = recommend(&api, "dance").unwrap_err();
    assert!(matches!(err, RecommendError::BadShape(_)));
}

#[test]
fn extra_fields_are_rejected() {
    let api = StubApi::returning(
        r#"[{"song": "Kaavaalaa", "movie": "Jailer", "reason": "hook step", "rating": 5}]"#,
    );
    let err = recommend(&api, "dance").unwrap_err();
    assert!(matches!(err, RecommendError::BadShape(_)));
}

#[test]
fn transport_errors_propagate() {
    let api = StubApi::failing(|| RecommendError::Http("connection refused".to_string()));
    let err = recommend(&api, "melancholy evening").unwrap_err();
    assert!(matches!(err, RecommendError::Http(_)));
    assert_eq!(api.calls.get(), 1);
}

#[test]
fn parse_accepts_an_empty_array() {
    assert!(parse_recommendations("[]").expect("empty array is valid").is_empty());
}

#[test]
fn candidate_text_is_extracted_from_a_generate_content_response() {
    let response = json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": "[{\"song\":\"a\",\"movie\":\"b\",\"reason\":\"c\"}]" }],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    });

    let text = extract_candidate_text(&response).expect("candidate text present");
    let recs = parse_recommendations(&text).expect("inner payload parses");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].song, "a");
}

#[test]
fn responses_without_candidates_are_a_shape_error() {
    let err = extract_candidate_text(&json!({ "promptFeedback": {} })).unwrap_err();
    assert!(matches!(err, RecommendError::BadShape(_)));
}
