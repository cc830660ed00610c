//! Catalog browsing and management service

use chrono::{Datelike, Utc};
use validator::Validate;

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::book::{Book, BrowseQuery, CreateBook, NewBook},
    repository::Repository,
};

/// Books and genres shown on the landing page
#[derive(Debug, Clone)]
pub struct HomeSelection {
    pub featured: Vec<Book>,
    pub recent: Vec<Book>,
    pub genres: Vec<String>,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(repository: Repository, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    /// Apply the browse filter: genre first, then author, then free text.
    /// With no filter every book is returned.
    pub async fn browse(&self, query: &BrowseQuery) -> Vec<Book> {
        if let Some(genre) = non_blank(&query.genre) {
            return self.repository.books_by_genre(genre).await;
        }
        if let Some(author) = non_blank(&query.author) {
            return self.repository.books_by_author(author).await;
        }
        if let Some(q) = non_blank(&query.q) {
            return self.repository.books_search(q).await;
        }
        self.repository.books_list().await
    }

    /// Free-text search. A blank query finds nothing.
    pub async fn search(&self, query: &str) -> Vec<Book> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        self.repository.books_search(query).await
    }

    /// Get a book by id
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        tracing::debug!("Looking up book {}", id);
        self.repository
            .books_get(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Validate and store a new book
    pub async fn create_book(&self, mut book: CreateBook) -> AppResult<Book> {
        book.title = book.title.trim().to_string();
        book.author = book.author.trim().to_string();
        book.description = book.description.trim().to_string();
        book.cover_image = book.cover_image.trim().to_string();
        book.genre = book.genre.iter().map(|g| g.trim().to_string()).collect();

        book.validate()?;

        if book.genre.iter().any(String::is_empty) {
            return Err(AppError::Validation(
                "Genre tags must not be empty".to_string(),
            ));
        }
        if let Some(year) = book.publication_year {
            let current_year = Utc::now().year();
            if year > current_year {
                return Err(AppError::Validation(format!(
                    "Publication year {} is in the future",
                    year
                )));
            }
        }

        Ok(self.repository.books_create(NewBook::from(book)).await)
    }

    /// Books related to the given one. Uses the configured default limit
    /// when none is given.
    pub async fn similar_books(&self, id: &str, limit: Option<usize>) -> AppResult<Vec<Book>> {
        self.get_book(id).await?;
        let limit = limit.unwrap_or(self.config.similar_limit);
        Ok(self.repository.books_similar(id, limit).await)
    }

    pub async fn book_count(&self) -> usize {
        self.repository.books_count().await
    }

    pub async fn genres(&self) -> Vec<String> {
        self.repository.genres().await
    }

    pub async fn authors(&self) -> Vec<String> {
        self.repository.authors().await
    }

    /// Top rated books, latest publications and the first few genres
    pub async fn home(&self) -> HomeSelection {
        let mut genres = self.repository.genres().await;
        genres.truncate(self.config.home_genres);

        HomeSelection {
            featured: self.repository.books_top_rated(self.config.featured_limit).await,
            recent: self.repository.books_most_recent(self.config.recent_limit).await,
            genres,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
