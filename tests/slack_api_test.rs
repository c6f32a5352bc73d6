//! Integration tests for the API client and worker against a mock server.
//!
//! Boots a real HTTP server on a loopback port, records every request it
//! sees, and drives the actual client over the wire.

use std::io::Read;
use std::sync::mpsc::{Receiver, channel};
use std::thread;
use std::time::{Duration, Instant};

use tiny_http::{Response, Server};

use slackpanel::api::{ApiClient, ApiError, SlackOptions, SlackSettings};
use slackpanel::gui::{ApiCommand, ApiEvent, ApiWorker};
use slackpanel::notify::NotificationTypes;

/// A request the mock server saw.
struct Recorded {
    method: String,
    url: String,
    body: String,
    api_key: Option<String>,
}

/// Start a mock server answering one reply per incoming request.
///
/// Returns the base URL and a channel of recorded requests. The server
/// thread exits after its replies are exhausted.
fn start_mock(replies: Vec<(u16, &'static str)>) -> (String, Receiver<Recorded>) {
    let server = Server::http("127.0.0.1:0").expect("failed to bind mock server");
    let port = server
        .server_addr()
        .to_ip()
        .expect("tcp listener")
        .port();
    let base_url = format!("http://127.0.0.1:{}", port);
    let (tx, rx) = channel();

    thread::spawn(move || {
        for (status, body) in replies {
            let Ok(mut request) = server.recv() else {
                return;
            };

            let mut request_body = String::new();
            let _ = request.as_reader().read_to_string(&mut request_body);
            let api_key = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("X-Api-Key"))
                .map(|h| h.value.as_str().to_string());

            let _ = tx.send(Recorded {
                method: request.method().to_string(),
                url: request.url().to_string(),
                body: request_body,
                api_key,
            });

            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .unwrap(),
                );
            let _ = request.respond(response);
        }
    });

    (base_url, rx)
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, None, Duration::from_secs(5))
}

fn settings(enabled: bool, types: u32, url: &str) -> SlackSettings {
    SlackSettings {
        enabled,
        types: NotificationTypes::from_bits(types),
        options: SlackOptions {
            webhook_url: url.to_string(),
        },
    }
}

const SETTINGS_BODY: &str =
    r#"{"enabled":true,"types":5,"options":{"webhookUrl":"https://hooks.example/abc"}}"#;

#[test]
fn test_get_hits_settings_resource() {
    let (base_url, requests) = start_mock(vec![(200, SETTINGS_BODY)]);

    let fetched = client(&base_url).get_slack_settings().unwrap();
    assert_eq!(fetched, settings(true, 5, "https://hooks.example/abc"));

    let recorded = requests.recv().unwrap();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.url, "/api/v1/settings/notifications/slack");
    assert_eq!(recorded.api_key, None);
}

#[test]
fn test_update_posts_exact_body() {
    let (base_url, requests) = start_mock(vec![(200, "{}")]);

    client(&base_url)
        .update_slack_settings(&settings(false, 22, "https://hooks.example/xyz"))
        .unwrap();

    let recorded = requests.recv().unwrap();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.url, "/api/v1/settings/notifications/slack");

    let body: serde_json::Value = serde_json::from_str(&recorded.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "enabled": false,
            "types": 22,
            "options": { "webhookUrl": "https://hooks.example/xyz" }
        })
    );
}

#[test]
fn test_test_posts_to_test_endpoint() {
    let (base_url, requests) = start_mock(vec![(200, "{}")]);

    client(&base_url)
        .test_slack_settings(&settings(true, 5, "https://hooks.example/abc"))
        .unwrap();

    let recorded = requests.recv().unwrap();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.url, "/api/v1/settings/notifications/slack/test");
}

#[test]
fn test_api_key_header_is_sent_when_configured() {
    let (base_url, requests) = start_mock(vec![(200, SETTINGS_BODY)]);

    let client = ApiClient::new(&base_url, Some("sekrit".to_string()), Duration::from_secs(5));
    client.get_slack_settings().unwrap();

    let recorded = requests.recv().unwrap();
    assert_eq!(recorded.api_key.as_deref(), Some("sekrit"));
}

#[test]
fn test_trailing_slash_in_base_url_is_tolerated() {
    let (base_url, requests) = start_mock(vec![(200, SETTINGS_BODY)]);

    client(&format!("{}/", base_url)).get_slack_settings().unwrap();

    let recorded = requests.recv().unwrap();
    assert_eq!(recorded.url, "/api/v1/settings/notifications/slack");
}

#[test]
fn test_server_error_maps_to_status() {
    let (base_url, _requests) = start_mock(vec![(500, "{}")]);

    let err = client(&base_url).get_slack_settings().unwrap_err();
    match err {
        ApiError::Status { code, .. } => assert_eq!(code, 500),
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[test]
fn test_invalid_json_maps_to_decode() {
    let (base_url, _requests) = start_mock(vec![(200, "not json")]);

    let err = client(&base_url).get_slack_settings().unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[test]
fn test_unreachable_server_maps_to_transport() {
    // Nothing listens on port 1
    let err = client("http://127.0.0.1:1").get_slack_settings().unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
}

/// Wait for the worker's next event, polling like the GUI frame loop does.
fn wait_event(worker: &ApiWorker) -> ApiEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = worker.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "timed out waiting for worker event");
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn test_save_is_followed_by_exactly_one_refetch() {
    // One reply for the save, one for the resync fetch
    let (base_url, requests) = start_mock(vec![(200, "{}"), (200, SETTINGS_BODY)]);

    let worker = ApiWorker::spawn(client(&base_url), egui::Context::default());
    worker.send(ApiCommand::Save(settings(true, 5, "https://hooks.example/abc")));

    assert!(matches!(wait_event(&worker), ApiEvent::Saved(Ok(()))));
    match wait_event(&worker) {
        ApiEvent::Loaded(Ok(loaded)) => {
            assert_eq!(loaded, settings(true, 5, "https://hooks.example/abc"));
        }
        other => panic!("Expected Loaded event, got {:?}", other),
    }

    let first = requests.recv_timeout(Duration::from_secs(1)).unwrap();
    let second = requests.recv_timeout(Duration::from_secs(1)).unwrap();
    assert_eq!(first.method, "POST");
    assert_eq!(second.method, "GET");
    assert!(requests.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn test_failed_save_still_triggers_refetch() {
    let (base_url, requests) = start_mock(vec![(500, "{}"), (200, SETTINGS_BODY)]);

    let worker = ApiWorker::spawn(client(&base_url), egui::Context::default());
    worker.send(ApiCommand::Save(settings(true, 5, "https://hooks.example/abc")));

    assert!(matches!(wait_event(&worker), ApiEvent::Saved(Err(_))));
    assert!(matches!(wait_event(&worker), ApiEvent::Loaded(Ok(_))));

    let first = requests.recv_timeout(Duration::from_secs(1)).unwrap();
    let second = requests.recv_timeout(Duration::from_secs(1)).unwrap();
    assert_eq!(first.method, "POST");
    assert_eq!(second.method, "GET");
}

#[test]
fn test_test_command_never_refetches() {
    let (base_url, requests) = start_mock(vec![(200, "{}")]);

    let worker = ApiWorker::spawn(client(&base_url), egui::Context::default());
    worker.send(ApiCommand::Test(settings(true, 5, "https://hooks.example/abc")));

    assert!(matches!(wait_event(&worker), ApiEvent::TestSent(Ok(()))));

    let recorded = requests.recv_timeout(Duration::from_secs(1)).unwrap();
    assert_eq!(recorded.url, "/api/v1/settings/notifications/slack/test");
    assert!(requests.recv_timeout(Duration::from_millis(200)).is_err());
}
