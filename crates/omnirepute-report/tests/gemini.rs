//! Integration tests for `GeminiGenerator` using wiremock HTTP mocks.

use omnirepute_core::{DataSource, MentionRow};
use omnirepute_report::{GeminiGenerator, GeneratorError, ReportGenerator, PROMPT_SAMPLE_LIMIT};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_generator(base_url: &str) -> GeminiGenerator {
    GeminiGenerator::new("test-key", "gemini-2.0-flash", Some(base_url), 30)
        .expect("generator construction should not fail")
}

fn mentions(n: usize) -> Vec<MentionRow> {
    (0..n)
        .map(|i| MentionRow {
            source: "reddit".to_string(),
            full_text: format!("mention number {i}"),
        })
        .collect()
}

fn report_text() -> String {
    serde_json::json!({
        "reputationScore": 81,
        "scoreRationale": "Reddit users speak favourably of the brand.",
        "keyInsights": ["strong community", "fast support", "fair pricing"],
        "improvementStrategies": [
            { "title": "Expand availability", "description": "More regions" }
        ],
        "whatUsersLove": ["support"],
        "whatUsersHate": ["stock levels"],
        "complaintResponses": [
            { "complaint": "always sold out", "suggestedResponse": "We are scaling production." }
        ]
    })
    .to_string()
}

fn candidate_envelope(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn generate_parses_schema_conforming_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_envelope(&report_text())))
        .mount(&server)
        .await;

    let generator = test_generator(&server.uri());
    let report = generator
        .generate("Tesla", DataSource::Reddit, &mentions(10))
        .await
        .expect("should parse report");

    assert_eq!(report.reputation_score, 81);
    assert_eq!(report.key_insights.len(), 3);
    assert_eq!(report.complaint_responses.len(), 1);
}

#[tokio::test]
async fn request_carries_schema_and_truncated_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_envelope(&report_text())))
        .mount(&server)
        .await;

    let generator = test_generator(&server.uri());
    generator
        .generate("Tesla", DataSource::All, &mentions(700))
        .await
        .expect("generate");

    let requests = server.received_requests().await.expect("requests recorded");
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("request body is JSON");

    let required = body["generationConfig"]["responseSchema"]["required"]
        .as_array()
        .expect("required list");
    assert_eq!(required.len(), 7);

    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .expect("prompt text");
    assert!(prompt.contains("sample of 700 mentions"));
    let embedded = prompt.matches("- [reddit]").count();
    assert_eq!(embedded, PROMPT_SAMPLE_LIMIT);
}

#[tokio::test]
async fn non_json_candidate_text_is_a_schema_violation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_envelope("the brand seems fine to me")),
        )
        .mount(&server)
        .await;

    let generator = test_generator(&server.uri());
    let result = generator
        .generate("Tesla", DataSource::All, &mentions(3))
        .await;

    assert!(matches!(result, Err(GeneratorError::SchemaViolation(_))));
}

#[tokio::test]
async fn missing_candidates_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let generator = test_generator(&server.uri());
    let result = generator
        .generate("Tesla", DataSource::All, &mentions(3))
        .await;

    assert!(matches!(result, Err(GeneratorError::Api(_))));
}

#[tokio::test]
async fn http_failure_is_a_generation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let generator = test_generator(&server.uri());
    let result = generator
        .generate("Tesla", DataSource::All, &mentions(3))
        .await;

    assert!(matches!(result, Err(GeneratorError::Generation(_))));
}
