//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, catalog, health, reviews};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Literary Lens API",
        version = "0.1.0",
        description = "Book catalog and review REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::similar_books,
        // Reviews
        reviews::list_reviews,
        reviews::create_review,
        // Catalog
        catalog::search,
        catalog::list_genres,
        catalog::list_authors,
        catalog::home,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::BrowseQuery,
            crate::models::book::SearchQuery,
            crate::models::book::SimilarQuery,
            // Reviews
            crate::models::review::Review,
            crate::models::review::CreateReview,
            // Catalog
            catalog::HomeResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog"),
        (name = "reviews", description = "Book reviews and ratings"),
        (name = "catalog", description = "Search, genres, authors and home page")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
