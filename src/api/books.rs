//! Book (catalog) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::extract::{ApiJson, ApiQuery};
use crate::{
    error::AppResult,
    models::book::{Book, BrowseQuery, CreateBook, SimilarQuery},
    AppState,
};

/// List books, optionally filtered by genre, author or free text
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BrowseQuery),
    responses(
        (status = 200, description = "Books in catalog order", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BrowseQuery>,
) -> Json<Vec<Book>> {
    Json(state.services.catalog.browse(&query).await)
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&id).await?;
    Ok(Json(book))
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(book): ApiJson<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.catalog.create_book(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Books similar to the given one, best match first
#[utoipa::path(
    get,
    path = "/books/{id}/similar",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID"),
        SimilarQuery
    ),
    responses(
        (status = 200, description = "Similar books", body = Vec<Book>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn similar_books(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<SimilarQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.similar_books(&id, query.limit).await?;
    Ok(Json(books))
}
