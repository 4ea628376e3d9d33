use std::sync::Arc;

use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::{Method, StatusCode, Uri};
use serde_json::{json, Value};
use tempfile::TempDir;

use twd_api::http::{dispatch, AppState, HttpResponse};
use twd_api::lifecycle::CatalogSystem;
use twd_api::store::Store;

fn setup() -> (TempDir, CatalogSystem, AppState) {
    let characters: Vec<Value> = (1..=15)
        .map(|id| json!({"id": id, "name": format!("Survivor {id}"), "status": "Alive"}))
        .collect();
    let data = json!({
        "characters": characters,
        "episodes": [{"id": 1, "season": 1}, {"id": 2, "season": 2}],
    });
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, serde_json::to_vec(&data).unwrap()).unwrap();

    let system = CatalogSystem::with_store(Arc::new(Store::open(&path).unwrap()), 8);
    let state = AppState::new(&system);
    (dir, system, state)
}

async fn call(state: &AppState, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let uri: Uri = uri.parse().unwrap();
    let response = dispatch(state, &method, &uri, Bytes::from(body.to_string())).await;
    let status = response.status();
    (status, body_json(response).await)
}

async fn body_json(response: HttpResponse) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}

#[tokio::test]
async fn test_character_listing_with_links() {
    let (_dir, _system, state) = setup();

    let (status, body) = call(&state, Method::GET, "/api/characters?limit=12", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["totalItems"], 15);
    assert_eq!(body["characters"].as_array().unwrap().len(), 12);
    assert_eq!(body["next"], "/api/characters?page=2&limit=12");
    assert_eq!(body["prev"], Value::Null);

    let (_, body) = call(&state, Method::GET, "/api/characters?page=2&limit=abc", "").await;
    assert_eq!(body["characters"].as_array().unwrap().len(), 3);
    assert_eq!(body["next"], Value::Null);
    assert_eq!(body["prev"], "/api/characters?page=1&limit=12");
}

#[tokio::test]
async fn test_error_bodies() {
    let (_dir, _system, state) = setup();

    let (status, body) = call(&state, Method::GET, "/api/episodes/0", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Invalid ID", "message": "Episode ID must be a positive number"})
    );

    let (status, body) = call(&state, Method::GET, "/api/episodes?season=12", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid season");

    let (status, body) = call(&state, Method::GET, "/api/episodes/500", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": "Episode not found", "message": "No episode found with ID 500"})
    );

    let (status, body) = call(&state, Method::GET, "/api/villains", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Endpoint not found"}));

    let (status, _) = call(&state, Method::DELETE, "/api/episodes/1", "").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, body) = call(&state, Method::POST, "/api/characters", "[1, 2]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid body");
}

#[tokio::test]
async fn test_character_writes() {
    let (_dir, _system, state) = setup();

    let (status, created) = call(
        &state,
        Method::POST,
        "/api/characters",
        r#"{"name": "Judith Grimes", "status": "Alive"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_u64().unwrap();

    let path = format!("/api/characters/{id}");
    let (status, updated) = call(&state, Method::PUT, &path, r#"{"status": "Deceased"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Judith Grimes");
    assert_eq!(updated["status"], "Deceased");

    let (status, removed) = call(&state, Method::DELETE, &path, "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed, updated);

    let (status, _) = call(&state, Method::GET, &path, "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_service_endpoints() {
    let (_dir, _system, state) = setup();

    let (status, body) = call(&state, Method::GET, "/api/health", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));

    let (_, body) = call(&state, Method::GET, "/api/ping", "").await;
    assert_eq!(body["message"], "API is awake!");

    let (_, body) = call(&state, Method::GET, "/", "").await;
    assert_eq!(body["endpoints"]["characters"], "/api/characters");

    // Unprefixed paths reach the same resources.
    let (status, body) = call(&state, Method::GET, "/episodes/2", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["season"], 2);

    let uri: Uri = "/api/characters".parse().unwrap();
    let response = dispatch(&state, &Method::OPTIONS, &uri, Bytes::new()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
