//! Review endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::extract::ApiJson;
use crate::{
    error::AppResult,
    models::review::{CreateReview, Review},
    AppState,
};

/// List reviews for a book
#[utoipa::path(
    get,
    path = "/books/{id}/reviews",
    tag = "reviews",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Reviews in submission order", body = Vec<Review>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = state.services.reviews.list_reviews(&book_id).await?;
    Ok(Json(reviews))
}

/// Submit a review; the book's average rating is recomputed
#[utoipa::path(
    post,
    path = "/books/{id}/reviews",
    tag = "reviews",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = CreateReview,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    ApiJson(review): ApiJson<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let created = state.services.reviews.add_review(&book_id, review).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
