//! API tests driving the router in-process against the in-memory store

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use library_server::{api, repository::MemoryRepository, AppState};

fn app() -> Router {
    let state = AppState::new(Arc::new(MemoryRepository::new()));
    api::create_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8"))
}

fn parse(body: &str) -> Value {
    serde_json::from_str(body).expect("Failed to parse response")
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["status"], "ready");
}

#[tokio::test]
async fn test_register_and_list_books() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"isbn": "111", "title": "Clean Code", "author": "R. Martin"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let book = parse(&body);
    assert_eq!(book["id"], 1);
    assert_eq!(book["title"], "Clean Code");
    assert_eq!(book["borrowed"], false);

    let (status, body) = send(&app, Method::GET, "/api/books", None).await;
    assert_eq!(status, StatusCode::OK);
    let books = parse(&body);
    assert_eq!(books.as_array().map(Vec::len), Some(1));
    assert_eq!(books[0]["isbn"], "111");
}

#[tokio::test]
async fn test_client_supplied_borrowed_flag_is_ignored() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"id": 7, "isbn": "111", "title": "Clean Code", "author": "R. Martin", "borrowed": true})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let book = parse(&body);
    assert_eq!(book["id"], 1);
    assert_eq!(book["borrowed"], false);
}

#[tokio::test]
async fn test_register_book_missing_field_is_bad_request() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"title": "Sample", "author": "Author"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["error"], "BadValue");
}

#[tokio::test]
async fn test_register_book_blank_field_is_bad_request() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"isbn": "111", "title": "", "author": "Author"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/api/books", None).await;
    assert_eq!(parse(&body), json!([]));
}

#[tokio::test]
async fn test_register_borrower() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api/borrowers", Some(json!({"name": "John"}))).await;
    assert_eq!(status, StatusCode::OK);
    let borrower = parse(&body);
    assert_eq!(borrower["id"], 1);
    assert_eq!(borrower["name"], "John");

    let (status, _) = send(&app, Method::POST, "/api/borrowers", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_borrow_and_return_scenario() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"isbn": "111", "title": "Clean Code", "author": "R. Martin"})),
    )
    .await;
    send(&app, Method::POST, "/api/borrowers", Some(json!({"name": "John"}))).await;

    let (status, body) = send(&app, Method::POST, "/api/borrowers/1/books/1/borrow", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Book borrowed successfully.");

    let (_, body) = send(&app, Method::GET, "/api/books", None).await;
    assert_eq!(parse(&body)[0]["borrowed"], true);

    let (status, body) = send(&app, Method::POST, "/api/borrowers/1/books/1/borrow", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(parse(&body)["error"], "BookAlreadyBorrowed");

    let (status, body) = send(&app, Method::POST, "/api/borrowers/1/books/1/return", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Book returned successfully.");

    let (_, body) = send(&app, Method::GET, "/api/books", None).await;
    assert_eq!(parse(&body)[0]["borrowed"], false);

    let (status, body) = send(&app, Method::POST, "/api/borrowers/1/books/1/return", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(parse(&body)["error"], "BookNotBorrowed");
}

#[tokio::test]
async fn test_borrow_unknown_ids_is_not_found() {
    let app = app();
    send(&app, Method::POST, "/api/borrowers", Some(json!({"name": "John"}))).await;

    let (status, body) = send(&app, Method::POST, "/api/borrowers/1/books/5/borrow", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse(&body)["message"], "Book not found with ID: 5");

    let (status, _) = send(&app, Method::POST, "/api/borrowers/9/books/5/borrow", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::POST, "/api/borrowers/1/books/5/return", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/borrowers/abc/books/1/borrow", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["error"], "BadValue");

    let (status, body) = send(&app, Method::POST, "/api/borrowers/1/books/x/return", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["error"], "BadValue");
}
