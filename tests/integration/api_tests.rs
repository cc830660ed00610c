//! API integration tests

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use literary_lens_server::{api::create_router, AppConfig, AppState};

const BASE_URL: &str = "/api/v1";

/// Router over the sample catalog
fn app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

fn empty_app() -> Router {
    let mut config = AppConfig::default();
    config.catalog.seed_sample_data = false;
    create_router(AppState::new(config))
}

async fn send(app: &Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(format!("{}{}", BASE_URL, path));
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    send(app, Method::GET, path, None).await
}

async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, path, Some(body)).await
}

fn ids(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("Expected an array")
        .iter()
        .map(|b| b["id"].as_str().expect("No id"))
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["books"], 6);
}

#[tokio::test]
async fn test_list_books() {
    let (status, body) = get(&app(), "/books").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(body[0]["title"], "Pride and Prejudice");
    assert_eq!(body[0]["coverImage"].as_str().map(|s| s.starts_with("https://")), Some(true));
    assert_eq!(body[0]["publicationYear"], 1813);
    assert_eq!(body[0]["rating"], 4.5);
}

#[tokio::test]
async fn test_empty_catalog() {
    let app = empty_app();

    let (_, body) = get(&app, "/books").await;
    assert_eq!(body, json!([]));
    let (_, body) = get(&app, "/genres").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_browse_by_genre() {
    let app = app();

    let (status, body) = get(&app, "/books?genre=Fantasy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["5", "6"]);

    // exact tag match only
    let (_, body) = get(&app, "/books?genre=Fiction").await;
    assert_eq!(ids(&body), vec!["3"]);

    let (_, body) = get(&app, "/books?genre=Historical%20Fiction").await;
    assert_eq!(ids(&body), vec!["2"]);
}

#[tokio::test]
async fn test_browse_by_author_and_priority() {
    let app = app();

    let (_, body) = get(&app, "/books?author=ROWLING").await;
    assert_eq!(ids(&body), vec!["6"]);

    let (_, body) = get(&app, "/books?genre=Dystopian&author=Rowling").await;
    assert_eq!(ids(&body), vec!["4"]);

    let (_, body) = get(&app, "/books?q=the").await;
    assert_eq!(ids(&body), vec!["3", "5", "6"]);
}

#[tokio::test]
async fn test_get_book() {
    let app = app();

    let (status, body) = get(&app, "/books/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"], "George Orwell");
    assert_eq!(body["genre"], json!(["Dystopian", "Science Fiction"]));

    let (_, again) = get(&app, "/books/4").await;
    assert_eq!(body, again);
}

#[tokio::test]
async fn test_get_book_not_found() {
    let (status, body) = get(&app(), "/books/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchBook");
    assert!(body["message"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn test_create_book() {
    let app = app();

    let (status, body) = post(
        &app,
        "/books",
        json!({
            "title": "Emma",
            "author": "Jane Austen",
            "genre": ["Classic", "Romance"],
            "coverImage": "https://example.com/emma.jpg",
            "publicationYear": 1815
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "7");
    assert_eq!(body["description"], "");
    assert!(body.get("rating").is_none());

    let (_, body) = get(&app, "/authors").await;
    assert_eq!(body.as_array().unwrap().len(), 6);

    // same author and both genres: the strongest match for Pride and Prejudice
    let (_, body) = get(&app, "/books/1/similar").await;
    assert_eq!(ids(&body), vec!["7", "2", "3"]);
}

#[tokio::test]
async fn test_create_book_validation() {
    let app = app();

    let (status, body) = post(
        &app,
        "/books",
        json!({
            "title": " ",
            "author": "Nobody",
            "genre": ["Classic"],
            "coverImage": "https://example.com/x.jpg"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please enter a book title");

    let (status, body) = post(
        &app,
        "/books",
        json!({
            "title": "Untitled",
            "author": "Nobody",
            "genre": [],
            "coverImage": "https://example.com/x.jpg"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please select at least one genre");

    let (_, body) = get(&app, "/books").await;
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_reviews_update_rating() {
    let app = app();

    let (status, body) = get(&app, "/books/1/reviews").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["1", "2"]);
    assert_eq!(body[0]["bookId"], "1");
    assert_eq!(body[0]["date"], "2023-01-15T00:00:00Z");

    let (status, body) = post(
        &app,
        "/books/1/reviews",
        json!({ "username": "Reader", "rating": 3 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "4");
    assert_eq!(body["comment"], "");
    assert!(body["date"].is_string());

    let (_, book) = get(&app, "/books/1").await;
    assert_eq!(book["rating"], 4.0);

    let (_, body) = get(&app, "/books/1/reviews").await;
    assert_eq!(ids(&body), vec!["1", "2", "4"]);
}

#[tokio::test]
async fn test_first_review_sets_rating() {
    let app = empty_app();

    let (_, book) = post(
        &app,
        "/books",
        json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "genre": ["Science Fiction"],
            "coverImage": "https://example.com/dune.jpg"
        }),
    )
    .await;
    assert_eq!(book["id"], "1");

    post(&app, "/books/1/reviews", json!({ "username": "a", "rating": 5 })).await;
    post(&app, "/books/1/reviews", json!({ "username": "b", "rating": 2 })).await;

    let (_, book) = get(&app, "/books/1").await;
    assert_eq!(book["rating"], 3.5);
}

#[tokio::test]
async fn test_review_validation_and_unknown_book() {
    let app = app();

    let (status, _) = post(
        &app,
        "/books/1/reviews",
        json!({ "username": "Reader", "rating": 6 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post(
        &app,
        "/books/1/reviews",
        json!({ "username": "", "rating": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please enter your name");

    let (status, _) = post(
        &app,
        "/books/999/reviews",
        json!({ "username": "Reader", "rating": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, book) = get(&app, "/books/1").await;
    assert_eq!(book["rating"], 4.5);
}

#[tokio::test]
async fn test_malformed_bodies_return_json_errors() {
    let app = app();

    let (status, body) = post(
        &app,
        "/books/1/reviews",
        json!({ "username": "a", "rating": 300 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert!(body["message"].as_str().unwrap().contains("rating"));

    let (status, body) = post(&app, "/books/1/reviews", json!({ "rating": 3 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3);
    assert!(body["message"].as_str().unwrap().contains("username"));

    let (status, body) = post(&app, "/books", json!({ "title": "Dune" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (_, book) = get(&app, "/books/1").await;
    assert_eq!(book["rating"], 4.5);
}

#[tokio::test]
async fn test_malformed_query_returns_json_error() {
    let (status, body) = get(&app(), "/books/1/similar?limit=lots").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_search() {
    let app = app();

    let (status, body) = get(&app, "/search?q=CLASSIC").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["1", "2", "3"]);

    let (_, body) = get(&app, "/search?q=tolkien").await;
    assert_eq!(ids(&body), vec!["5"]);

    let (_, body) = get(&app, "/search?q=%20%20").await;
    assert_eq!(body, json!([]));

    let (_, body) = get(&app, "/search").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_genres_and_authors() {
    let app = app();

    let (_, body) = get(&app, "/genres").await;
    let genres: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    let mut sorted = genres.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(genres, sorted);
    assert_eq!(genres.len(), 9);

    let (_, body) = get(&app, "/authors").await;
    assert_eq!(body[0], "F. Scott Fitzgerald");
    assert_eq!(body[4], "J.R.R. Tolkien");
    assert_eq!(body[5], "Jane Austen");
}

#[tokio::test]
async fn test_similar_books() {
    let app = app();

    let (status, body) = get(&app, "/books/1/similar").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["2", "3"]);

    let (_, body) = get(&app, "/books/1/similar?limit=1").await;
    assert_eq!(ids(&body), vec!["2"]);

    let (_, body) = get(&app, "/books/4/similar").await;
    assert_eq!(body, json!([]));

    let (status, _) = get(&app, "/books/999/similar").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_home() {
    let (status, body) = get(&app(), "/home").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["featuredBooks"]), vec!["2", "5", "6", "4", "1"]);
    assert_eq!(ids(&body["recentBooks"]), vec!["6", "2", "4", "5", "3"]);
    assert_eq!(body["popularGenres"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app();
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/books/{id}/similar"].is_object());
}
