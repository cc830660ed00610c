//! Book model and related request types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A catalog entry.
///
/// `rating` is absent until the book has been reviewed (or seeded with an
/// editorial rating); after each review it holds the mean of all review
/// ratings rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Genre tags in display order
    pub genre: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub cover_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
}

/// Book fields as handed to the store, everything but the id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: Vec<String>,
    pub description: String,
    pub cover_image: String,
    pub rating: Option<f64>,
    pub publication_year: Option<i32>,
}

impl NewBook {
    pub(crate) fn into_book(self, id: String) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            description: self.description,
            cover_image: self.cover_image,
            rating: self.rating,
            publication_year: self.publication_year,
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Please enter a book title"))]
    pub title: String,
    #[validate(length(min = 1, message = "Please enter an author name"))]
    pub author: String,
    #[validate(length(min = 1, message = "Please select at least one genre"))]
    pub genre: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "Please enter a cover image URL"))]
    pub cover_image: String,
    pub publication_year: Option<i32>,
}

impl From<CreateBook> for NewBook {
    fn from(book: CreateBook) -> Self {
        Self {
            title: book.title,
            author: book.author,
            genre: book.genre,
            description: book.description,
            cover_image: book.cover_image,
            rating: None,
            publication_year: book.publication_year,
        }
    }
}

/// Browse filter parameters. At most one filter applies, checked in the
/// order `genre`, `author`, `q`.
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BrowseQuery {
    /// Exact genre tag
    pub genre: Option<String>,
    /// Case-insensitive author substring
    pub author: Option<String>,
    /// Free-text search over title, author and genre
    pub q: Option<String>,
}

/// Free-text search parameters
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Similar-books parameters
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SimilarQuery {
    /// Maximum number of recommendations
    pub limit: Option<usize>,
}
