//! Review model and related request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A star-rated review of a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub book_id: String,
    pub username: String,
    /// Star rating, 1 to 5
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    /// Set at insertion, never changed
    pub date: DateTime<Utc>,
}

/// Review fields as handed to the store, everything but id and date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewReview {
    pub book_id: String,
    pub username: String,
    pub rating: u8,
    pub comment: String,
}

/// Create review request. The book id comes from the path.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReview {
    #[validate(length(min = 1, message = "Please enter your name"))]
    pub username: String,
    #[validate(range(min = 1, max = 5, message = "Please select a rating"))]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}
