//! API integration tests

use bookshelf_server::{api, AppConfig, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Spawn a server with a freshly seeded store on an ephemeral port and return its base URL
async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("No local address");
    let app = api::router(AppState::new(AppConfig::default()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{}", addr)
}

async fn list_ids(client: &Client, base: &str) -> Vec<i64> {
    let body: Value = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    body.as_array()
        .expect("Expected an array")
        .iter()
        .map(|b| b["id"].as_i64().expect("No book ID"))
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_check() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_list_seed_books() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!([
            { "id": 1, "title": "The Great Gatsby", "author": "F. Scott Fitzgerald" },
            { "id": 2, "title": "To Kill a Mockingbird", "author": "Harper Lee" },
            { "id": 3, "title": "1984", "author": "George Orwell" }
        ])
    );
}

#[tokio::test]
async fn test_create_book() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({ "title": "Dune", "author": "Frank Herbert", "id": 100 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "id": 4, "title": "Dune", "author": "Frank Herbert" }));
    assert_eq!(list_ids(&client, &base).await, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_create_book_missing_fields() {
    let base = spawn_server().await;
    let client = Client::new();

    for payload in [
        json!({ "title": "", "author": "Author" }),
        json!({ "title": "Title", "author": "" }),
        json!({}),
        json!({ "title": null, "author": "Author" }),
    ] {
        let response = client
            .post(format!("{}/books", base))
            .json(&payload)
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["message"], "Missing title or author in request body.");
    }

    assert_eq!(list_ids(&client, &base).await, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_create_book_malformed_body() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_update_book_partial() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/books/2", base))
        .json(&json!({ "author": "H. Lee", "id": 42 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({ "id": 2, "title": "To Kill a Mockingbird", "author": "H. Lee" })
    );
    assert_eq!(list_ids(&client, &base).await, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_update_book_not_found() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/books/999", base))
        .json(&json!({ "title": "X", "author": "Y" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book with ID 999 not found.");
}

#[tokio::test]
async fn test_update_non_numeric_id_is_not_found() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/books/abc", base))
        .json(&json!({ "title": "X" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_book_without_body_keeps_record() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({ "id": 1, "title": "The Great Gatsby", "author": "F. Scott Fitzgerald" })
    );
}

#[tokio::test]
async fn test_update_unknown_book_without_body_is_not_found() {
    let base = spawn_server().await;
    let client = Client::new();

    for id in ["999", "abc"] {
        let response = client
            .put(format!("{}/books/{}", base, id))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["message"], format!("Book with ID {} not found.", id));
    }
}

#[tokio::test]
async fn test_update_book_malformed_body() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/books/1", base))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_delete_book() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/2", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.bytes().await.expect("Failed to read body").is_empty());
    assert_eq!(list_ids(&client, &base).await, vec![1, 3]);

    // ids are never reused
    let response = client
        .post(format!("{}/books", base))
        .json(&json!({ "title": "Emma", "author": "Jane Austen" }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], 4);
}

#[tokio::test]
async fn test_delete_book_not_found() {
    let base = spawn_server().await;
    let client = Client::new();

    for id in ["999", "abc"] {
        let response = client
            .delete(format!("{}/books/{}", base, id))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["message"], format!("Book with ID {} not found.", id));
    }

    assert_eq!(list_ids(&client, &base).await.len(), 3);
}

#[tokio::test]
async fn test_openapi_document() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api-docs/openapi.json", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["paths"]["/books"].is_object());
    assert!(body["paths"]["/books/{id}"].is_object());
}
