use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::{Value, json};

use packcalc::config::ServerConfig;
use packcalc::core::SolveOptions;
use packcalc::server::{self, App, ServerHandle};
use packcalc::storage::Database;

fn start_server(sizes: &[i64]) -> (ServerHandle, String) {
    let db = Database::open_in_memory().unwrap();
    db.seed_if_empty(sizes).unwrap();
    let app = App::new(Arc::new(db), SolveOptions::default(), 250);

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        workers: 2,
        poll_interval_ms: 50,
    };
    let handle = server::start(Arc::new(app), &config).unwrap();
    let base = format!("http://{}", handle.addr());
    (handle, base)
}

#[test]
fn serves_calculations_over_http() {
    let (handle, base) = start_server(&[250, 500, 1000, 2000, 5000]);
    let client = Client::new();

    let response = client
        .post(format!("{base}/api/v2/calculate-packs"))
        .json(&json!({"order": 12_500}))
        .send()
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let body: Value = response.json().unwrap();
    assert_eq!(body["packs"], json!({"5000": 2, "2000": 1, "500": 1}));
    assert_eq!(body["sizes"], json!([250, 500, 1000, 2000, 5000]));

    let response = client
        .post(format!("{base}/api/v1/calculate-packs"))
        .json(&json!({"sizes": [25, 100], "order": 24}))
        .send()
        .unwrap();
    let body: Value = response.json().unwrap();
    assert_eq!(body, json!({"packs": {"25": 1}}));

    handle.shutdown();
}

#[test]
fn updates_sizes_over_http() {
    let (handle, base) = start_server(&[250]);
    let client = Client::new();

    let response = client
        .put(format!("{base}/api/v2/pack-sizes"))
        .json(&json!({"sizes": [23, 31, 53]}))
        .send()
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body: Value = client
        .get(format!("{base}/api/v2/pack-sizes"))
        .send()
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(body, json!({"sizes": [23, 31, 53]}));

    let response = client
        .put(format!("{base}/api/v2/pack-sizes"))
        .json(&json!({"sizes": [-1]}))
        .send()
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    handle.shutdown();
}

#[test]
fn reports_client_errors() {
    let (handle, base) = start_server(&[250]);
    let client = Client::new();

    let response = client
        .post(format!("{base}/api/v2/calculate-packs"))
        .body("not json")
        .send()
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .post(format!("{base}/api/v2/calculate-packs?debug=1"))
        .json(&json!({"order": 0}))
        .send()
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().unwrap();
    assert_eq!(body["code"], "INVALID_ARGUMENT");

    let response = client.get(format!("{base}/missing")).send().unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    handle.shutdown();
}

#[test]
fn serves_the_ui() {
    let (handle, base) = start_server(&[250, 500]);

    let response = Client::new().get(format!("{base}/")).send().unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = response.text().unwrap();
    assert!(page.contains("<li>250</li><li>500</li>"));

    handle.shutdown();
}

#[test]
fn shutdown_stops_accepting_connections() {
    let (handle, base) = start_server(&[250]);
    let addr = handle.addr();
    handle.shutdown();

    let result = Client::new()
        .get(format!("{base}/api/v2/pack-sizes"))
        .timeout(std::time::Duration::from_secs(2))
        .send();
    assert!(result.is_err(), "server at {addr} still answering");
}
