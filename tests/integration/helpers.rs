//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use stickr_api::AppState;
use stickr_core::config::{AppConfig, StoreProvider};
use stickr_database::{MemoryStore, Stores};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The tables behind the router, for direct inspection
    pub store: MemoryStore,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = StoreProvider::Memory;
        config.server.public_url = "https://stickr.test/".to_string();

        let store = MemoryStore::new();
        let state = AppState::new(config.clone(), Stores::memory(store.clone()));
        let router = stickr_api::build_app(state);

        Self {
            router,
            store,
            config,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Add a sticker and return its id
    pub async fn add_sticker(&self, folder: &str, content: &str) -> String {
        let response = self
            .request(
                "POST",
                &format!("/api/folders/{folder}/stickers"),
                Some(serde_json::json!({ "content": content })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.data()["id"]
            .as_str()
            .expect("sticker id")
            .to_string()
    }

    /// Sticker contents of a folder, in list order
    pub async fn contents(&self, folder: &str) -> Vec<String> {
        let response = self
            .request("GET", &format!("/api/folders/{folder}/stickers"), None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response
            .data()
            .as_array()
            .expect("sticker list")
            .iter()
            .map(|s| s["content"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of a success body
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }
}
