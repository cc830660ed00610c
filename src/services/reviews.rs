//! Review submission service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::review::{CreateReview, NewReview, Review},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Reviews for a book, oldest first
    pub async fn list_reviews(&self, book_id: &str) -> AppResult<Vec<Review>> {
        self.ensure_book_exists(book_id).await?;
        Ok(self.repository.reviews_list(book_id).await)
    }

    /// Validate and store a review, updating the book's average rating.
    ///
    /// Unknown books are rejected here; books are never removed, so the
    /// check cannot go stale before the insert.
    pub async fn add_review(&self, book_id: &str, mut review: CreateReview) -> AppResult<Review> {
        review.username = review.username.trim().to_string();
        review.validate()?;

        self.ensure_book_exists(book_id).await?;

        Ok(self
            .repository
            .reviews_create(NewReview {
                book_id: book_id.to_string(),
                username: review.username,
                rating: review.rating,
                comment: review.comment,
            })
            .await)
    }

    async fn ensure_book_exists(&self, book_id: &str) -> AppResult<()> {
        match self.repository.books_get(book_id).await {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("Book {} not found", book_id))),
        }
    }
}
