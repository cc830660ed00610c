//! API handlers for the Literary Lens REST endpoints

pub mod books;
pub mod catalog;
pub mod extract;
pub mod health;
pub mod openapi;
pub mod reviews;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id/similar", get(books::similar_books))
        // Reviews
        .route(
            "/books/:id/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        // Catalog
        .route("/search", get(catalog::search))
        .route("/genres", get(catalog::list_genres))
        .route("/authors", get(catalog::list_authors))
        .route("/home", get(catalog::home))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
