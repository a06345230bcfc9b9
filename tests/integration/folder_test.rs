//! Integration tests for folder get-or-create, update, share, and delete.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health_reports_memory_store() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["store"], "memory");
}

#[tokio::test]
async fn test_first_visit_creates_default_folder() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/folders/abc123", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], "abc123");
    assert_eq!(response.data()["name"], "Untitled Folder");
    assert_eq!(response.data()["dark_mode"], false);
    assert_eq!(
        response.data()["share_url"],
        "https://stickr.test/folder/abc123"
    );

    let again = app.request("GET", "/api/folders/abc123", None).await;
    assert_eq!(again.data()["created_at"], response.data()["created_at"]);
}

#[tokio::test]
async fn test_create_folder_generates_id() {
    let app = helpers::TestApp::new();
    let response = app.request("POST", "/api/folders", None).await;

    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.data()["id"].as_str().expect("folder id");
    assert_eq!(id.len(), 8);

    let fetched = app
        .request("GET", &format!("/api/folders/{id}"), None)
        .await;
    assert_eq!(fetched.data()["name"], "Untitled Folder");
}

#[tokio::test]
async fn test_invalid_folder_id_is_rejected() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/folders/bad!id", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_rename_trims_and_ignores_blank_names() {
    let app = helpers::TestApp::new();
    app.request("GET", "/api/folders/board", None).await;

    let renamed = app
        .request(
            "PUT",
            "/api/folders/board",
            Some(json!({ "name": "  Groceries  " })),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.data()["name"], "Groceries");

    let blank = app
        .request("PUT", "/api/folders/board", Some(json!({ "name": "   " })))
        .await;
    assert_eq!(blank.status, StatusCode::OK);
    assert_eq!(blank.data()["name"], "Groceries");
}

#[tokio::test]
async fn test_update_missing_folder_is_not_found() {
    let app = helpers::TestApp::new();
    let response = app
        .request("PUT", "/api/folders/nobody", Some(json!({ "dark_mode": true })))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dark_mode_persists() {
    let app = helpers::TestApp::new();
    app.request("GET", "/api/folders/night", None).await;

    let response = app
        .request("PUT", "/api/folders/night", Some(json!({ "dark_mode": true })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["dark_mode"], true);

    let fetched = app.request("GET", "/api/folders/night", None).await;
    assert_eq!(fetched.data()["dark_mode"], true);
}

#[tokio::test]
async fn test_delete_folder_removes_stickers_then_folder() {
    let app = helpers::TestApp::new();
    app.request("GET", "/api/folders/doomed", None).await;
    app.add_sticker("doomed", "one").await;
    app.add_sticker("doomed", "two").await;

    let response = app.request("DELETE", "/api/folders/doomed", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["stickers_deleted"], 2);
    assert_eq!(response.data()["folder"]["status"], "removed");
    assert_eq!(app.store.sticker_count().await, 0);

    let again = app.request("DELETE", "/api/folders/doomed", None).await;
    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.data()["folder"]["status"], "already_gone");

    let reopened = app.request("GET", "/api/folders/doomed", None).await;
    assert_eq!(reopened.data()["name"], "Untitled Folder");
    assert!(app.contents("doomed").await.is_empty());
}
