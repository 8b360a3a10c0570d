//! End-to-end tests for the submit/render cycle against a mock backend.

use serde_json::json;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ragchat::api::ApiClient;
use ragchat::config::ApiConfig;
use ragchat::controller::ChatController;
use ragchat::render;
use ragchat::transcript::{RequestState, Role};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig {
        origin: server.uri(),
        timeout_seconds: 5,
    };
    ApiClient::new(&config).unwrap()
}

/// A client pointed at a port with nothing listening on it
fn unreachable_client() -> ApiClient {
    let config = ApiConfig {
        // Port 9 (discard) is reserved and nothing answers there.
        origin: "http://127.0.0.1:9".to_string(),
        timeout_seconds: 2,
    };
    ApiClient::new(&config).unwrap()
}

/// Scenario A: a successful answer with no citations
#[tokio::test]
async fn test_successful_answer_without_sources() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({
            "query": "capital of France",
            "session_id": "cli-test0000"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"answer": "Paris", "results": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = ChatController::new("greeting");

    let submitted = controller
        .submit(&client, "cli-test0000", "capital of France")
        .await;
    assert!(submitted);

    // Greeting, user question, assistant answer.
    assert_eq!(controller.transcript().len(), 3);
    assert_eq!(controller.state(), RequestState::Idle);

    let last = controller.transcript().last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.content, "Paris");
    assert!(last.sources.is_empty());

    // No sources block is rendered for a citation-free answer.
    colored::control::set_override(false);
    let view = render::render_view(controller.transcript(), controller.state());
    assert!(view.contains("Assistant: Paris"));
    assert!(!view.contains("Sources"));
    assert!(!view.contains("Thinking"));
}

/// Scenario B: a non-success status surfaces the body text in the transcript
#[tokio::test]
async fn test_http_error_becomes_transcript_entry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = ChatController::new("greeting");

    controller.submit(&client, "cli-test0000", "anything").await;

    let last = controller.transcript().last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert!(last.content.starts_with("Error:"));
    assert!(last.content.contains("HTTP 500"));
    assert!(last.content.contains("internal error"));
    assert!(last.sources.is_empty());

    // The failure never leaves the controller blocked.
    assert_eq!(controller.state(), RequestState::Idle);
}

/// Scenario C: a transport failure becomes an error-prefixed entry
#[tokio::test]
async fn test_connection_failure_becomes_transcript_entry() {
    let client = unreachable_client();
    let mut controller = ChatController::new("greeting");

    let submitted = controller.submit(&client, "cli-test0000", "hello").await;
    assert!(submitted);

    let last = controller.transcript().last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert!(last.content.starts_with("Error:"));
    assert_eq!(controller.state(), RequestState::Idle);

    // And the controller accepts the next question.
    assert!(controller.begin("retry").is_some());
}

/// Citations on the wire end up attached to the assistant message
#[tokio::test]
async fn test_answer_with_sources() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "See the handbook.",
            "results": [
                {"title": "Handbook", "uri": "https://docs.example.com/handbook", "snippet": "Relevant text."},
                {"snippet": "A citation with neither title nor uri."}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = ChatController::new("greeting");
    controller.submit(&client, "cli-test0000", "where is the policy?").await;

    let last = controller.transcript().last().unwrap();
    assert_eq!(last.sources.len(), 2);
    assert_eq!(last.sources[0].link(), Some("https://docs.example.com/handbook"));
    assert_eq!(last.sources[1].link(), None);
    assert_eq!(last.sources[1].display_title(), "Untitled document");

    colored::control::set_override(false);
    let view = render::render_view(controller.transcript(), controller.state());
    assert!(view.contains("Sources:"));
    assert!(view.contains("Handbook (https://docs.example.com/handbook)"));
}

/// Rejected submissions never reach the wire
#[tokio::test]
async fn test_rejected_submission_sends_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "unused"})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = ChatController::new("greeting");

    assert!(!controller.submit(&client, "cli-test0000", "   ").await);
    assert!(!controller.submit(&client, "cli-test0000", "").await);
    assert_eq!(controller.transcript().len(), 1);
}

/// A non-array `results` field degrades to no citations, not an error
#[tokio::test]
async fn test_malformed_results_tolerated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Still fine.",
            "results": {"unexpected": "object"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = ChatController::new("greeting");
    controller.submit(&client, "cli-test0000", "question").await;

    let last = controller.transcript().last().unwrap();
    assert_eq!(last.content, "Still fine.");
    assert!(last.sources.is_empty());
}

/// A success body with no answer falls back to the placeholder
#[tokio::test]
async fn test_missing_answer_placeholder() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = ChatController::new("greeting");
    controller.submit(&client, "cli-test0000", "question").await;

    assert_eq!(controller.transcript().last().unwrap().content, "No answer.");
}

/// The health probe reports the backend body on success
#[tokio::test]
async fn test_health_probe_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.health().await.unwrap(), "ok");
}

/// The health probe fails on a non-success status
#[tokio::test]
async fn test_health_probe_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_string("draining"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.health().await.unwrap_err();
    assert!(err.to_string().contains("HTTP 503"));
}
