//! Catalog-wide endpoints: search, facets and the home page

use axum::{
    extract::State,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::extract::ApiQuery;
use crate::{
    models::book::{Book, SearchQuery},
    services::catalog::HomeSelection,
    AppState,
};

/// Landing page content
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    /// Highest rated books
    pub featured_books: Vec<Book>,
    /// Most recently published books
    pub recent_books: Vec<Book>,
    /// First genres in alphabetical order
    pub popular_genres: Vec<String>,
}

impl From<HomeSelection> for HomeResponse {
    fn from(home: HomeSelection) -> Self {
        Self {
            featured_books: home.featured,
            recent_books: home.recent,
            popular_genres: home.genres,
        }
    }
}

/// Search books by title, author or genre
#[utoipa::path(
    get,
    path = "/search",
    tag = "catalog",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching books; empty for a blank query", body = Vec<Book>)
    )
)]
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Json<Vec<Book>> {
    let q = query.q.unwrap_or_default();
    Json(state.services.catalog.search(&q).await)
}

/// All genre tags, sorted
#[utoipa::path(
    get,
    path = "/genres",
    tag = "catalog",
    responses(
        (status = 200, description = "Distinct genres", body = Vec<String>)
    )
)]
pub async fn list_genres(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.services.catalog.genres().await)
}

/// All authors, sorted
#[utoipa::path(
    get,
    path = "/authors",
    tag = "catalog",
    responses(
        (status = 200, description = "Distinct authors", body = Vec<String>)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.services.catalog.authors().await)
}

/// Featured books, recent additions and popular genres
#[utoipa::path(
    get,
    path = "/home",
    tag = "catalog",
    responses(
        (status = 200, description = "Home page selection", body = HomeResponse)
    )
)]
pub async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
    Json(state.services.catalog.home().await.into())
}
