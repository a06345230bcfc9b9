//! Integration tests for sticker create, list, color, and delete.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_created_stickers_list_oldest_first() {
    let app = helpers::TestApp::new();
    app.request("GET", "/api/folders/board", None).await;

    for content in ["A", "B", "C"] {
        app.add_sticker("board", content).await;
    }

    assert_eq!(app.contents("board").await, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_content_is_trimmed_and_color_defaults_to_yellow() {
    let app = helpers::TestApp::new();
    app.request("GET", "/api/folders/board", None).await;

    let response = app
        .request(
            "POST",
            "/api/folders/board/stickers",
            Some(json!({ "content": "  buy milk \n" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["content"], "buy milk");
    assert_eq!(response.data()["color_index"], 0);
    assert_eq!(response.data()["color"], "yellow");
}

#[tokio::test]
async fn test_blank_sticker_is_rejected_and_not_stored() {
    let app = helpers::TestApp::new();
    app.request("GET", "/api/folders/board", None).await;

    let response = app
        .request(
            "POST",
            "/api/folders/board/stickers",
            Some(json!({ "content": "   " })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.sticker_count().await, 0);
}

#[tokio::test]
async fn test_sticker_in_unknown_folder_is_not_found() {
    let app = helpers::TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/folders/nowhere/stickers",
            Some(json!({ "content": "lost" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_color_update_folds_into_palette() {
    let app = helpers::TestApp::new();
    app.request("GET", "/api/folders/board", None).await;
    let id = app.add_sticker("board", "tinted").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/stickers/{id}/color"),
            Some(json!({ "color_index": 7 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["color_index"], 2);
    assert_eq!(response.data()["color"], "blue");

    let listed = app.request("GET", "/api/folders/board/stickers", None).await;
    assert_eq!(listed.data()[0]["color_index"], 2);

    let negative = app
        .request(
            "PUT",
            &format!("/api/stickers/{id}/color"),
            Some(json!({ "color_index": -1 })),
        )
        .await;
    assert_eq!(negative.data()["color"], "purple");
}

#[tokio::test]
async fn test_color_update_on_missing_sticker_is_not_found() {
    let app = helpers::TestApp::new();
    let response = app
        .request(
            "PUT",
            "/api/stickers/0191f0a4-7c2e-7d1a-9b3e-2f4c5d6e7f80/color",
            Some(json!({ "color_index": 1 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_sticker_is_idempotent() {
    let app = helpers::TestApp::new();
    app.request("GET", "/api/folders/board", None).await;
    let keep = app.add_sticker("board", "keep").await;
    let drop = app.add_sticker("board", "drop").await;

    let first = app
        .request("DELETE", &format!("/api/stickers/{drop}"), None)
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.data()["deleted"], true);

    let second = app
        .request("DELETE", &format!("/api/stickers/{drop}"), None)
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.data()["deleted"], false);

    assert_eq!(app.contents("board").await, vec!["keep"]);
    assert!(!keep.is_empty());
}

#[tokio::test]
async fn test_malformed_sticker_id_is_rejected() {
    let app = helpers::TestApp::new();
    let response = app.request("DELETE", "/api/stickers/not-a-uuid", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
