//! Integration tests for `WarehouseClient` using wiremock HTTP mocks.

use omnirepute_core::DataSource;
use omnirepute_warehouse::{MentionSource, WarehouseClient, MAX_SAMPLE_ROWS};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str, token: Option<&str>) -> WarehouseClient {
    WarehouseClient::with_base_url(base_url, "omnirepute-test", token, 30)
        .expect("client construction should not fail")
}

fn rows_body(rows: &[(&str, &str)]) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = rows
        .iter()
        .map(|(source, text)| serde_json::json!({ "source": source, "full_text": text }))
        .collect();
    serde_json::json!({ "rows": rows })
}

#[tokio::test]
async fn fetch_mentions_returns_parsed_rows() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/projects/omnirepute-test/queries"))
        .and(body_partial_json(serde_json::json!({
            "parameters": [
                { "name": "brandName", "value": "Tesla" },
                { "name": "source", "value": "reddit" }
            ],
            "maxResults": 700
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows_body(&[
            ("reddit", "love the autopilot"),
            ("reddit", "service center was slow"),
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let rows = client
        .fetch_mentions("Tesla", DataSource::Reddit)
        .await
        .expect("should parse rows");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].source, "reddit");
    assert_eq!(rows[0].full_text, "love the autopilot");
}

#[tokio::test]
async fn fetch_mentions_empty_result_is_ok_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/projects/omnirepute-test/queries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows_body(&[])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let rows = client
        .fetch_mentions("Acme", DataSource::All)
        .await
        .expect("empty sample should be Ok");

    assert!(rows.is_empty());
}

#[tokio::test]
async fn fetch_mentions_omits_source_parameter_for_all() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/projects/omnirepute-test/queries"))
        .and(body_partial_json(serde_json::json!({
            "parameters": [ { "name": "brandName", "value": "Acme" } ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows_body(&[("gdelt", "news")])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let rows = client
        .fetch_mentions("Acme", DataSource::All)
        .await
        .expect("should match the single-parameter body");
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn fetch_mentions_sends_bearer_token_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/projects/omnirepute-test/queries"))
        .and(header("authorization", "Bearer wh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows_body(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Some("wh-token"));
    client
        .fetch_mentions("Tesla", DataSource::All)
        .await
        .expect("authenticated request should succeed");
}

#[tokio::test]
async fn fetch_mentions_caps_sample_at_limit() {
    let server = MockServer::start().await;

    // A misbehaving warehouse returning more rows than requested.
    let oversized: Vec<(&str, &str)> = (0..MAX_SAMPLE_ROWS + 20)
        .map(|_| ("twitter", "mention"))
        .collect();

    Mock::given(method("POST"))
        .and(path("/v1/projects/omnirepute-test/queries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows_body(&oversized)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let rows = client
        .fetch_mentions("Tesla", DataSource::Twitter)
        .await
        .expect("should parse rows");

    assert_eq!(rows.len(), MAX_SAMPLE_ROWS);
}

#[tokio::test]
async fn fetch_mentions_surfaces_http_failures() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/projects/omnirepute-test/queries"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let result = client.fetch_mentions("Tesla", DataSource::All).await;

    assert!(result.is_err(), "500 from the warehouse must be an error");
}

#[tokio::test]
async fn fetch_mentions_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/projects/omnirepute-test/queries"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let result = client.fetch_mentions("Tesla", DataSource::All).await;

    let err = result.expect_err("malformed body must be an error");
    assert!(
        err.to_string().contains("deserialization"),
        "unexpected error: {err}"
    );
}
