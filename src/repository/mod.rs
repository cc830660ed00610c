//! Repository layer over the in-memory catalog

pub mod catalog;
pub mod seed;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Book, NewBook, NewReview, Review};
pub use catalog::CatalogStore;

/// Shared handle to the catalog store.
///
/// Reads take the shared lock; `books_create` and `reviews_create` hold the
/// exclusive lock for the whole insert, so a review is never visible before
/// its book's rating has been recomputed.
#[derive(Clone)]
pub struct Repository {
    catalog: Arc<RwLock<CatalogStore>>,
}

impl Repository {
    /// Create a repository owning the given store
    pub fn new(store: CatalogStore) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(store)),
        }
    }

    // =========================================================================
    // BOOKS
    // =========================================================================

    pub async fn books_list(&self) -> Vec<Book> {
        owned(self.catalog.read().await.list_books())
    }

    pub async fn books_count(&self) -> usize {
        self.catalog.read().await.book_count()
    }

    pub async fn books_get(&self, id: &str) -> Option<Book> {
        self.catalog.read().await.get_book(id).cloned()
    }

    pub async fn books_create(&self, book: NewBook) -> Book {
        let created = self.catalog.write().await.add_book(book);
        tracing::info!("Book added: id={} title={:?}", created.id, created.title);
        created
    }

    pub async fn books_by_genre(&self, genre: &str) -> Vec<Book> {
        owned(self.catalog.read().await.by_genre(genre))
    }

    pub async fn books_by_author(&self, author: &str) -> Vec<Book> {
        owned(self.catalog.read().await.by_author(author))
    }

    pub async fn books_search(&self, query: &str) -> Vec<Book> {
        owned(self.catalog.read().await.search(query))
    }

    pub async fn books_similar(&self, id: &str, limit: usize) -> Vec<Book> {
        owned(self.catalog.read().await.similar_books(id, limit))
    }

    pub async fn books_top_rated(&self, limit: usize) -> Vec<Book> {
        owned(self.catalog.read().await.top_rated(limit))
    }

    pub async fn books_most_recent(&self, limit: usize) -> Vec<Book> {
        owned(self.catalog.read().await.most_recent(limit))
    }

    pub async fn genres(&self) -> Vec<String> {
        self.catalog.read().await.genres()
    }

    pub async fn authors(&self) -> Vec<String> {
        self.catalog.read().await.authors()
    }

    // =========================================================================
    // REVIEWS
    // =========================================================================

    pub async fn reviews_list(&self, book_id: &str) -> Vec<Review> {
        owned(self.catalog.read().await.list_reviews(book_id))
    }

    pub async fn reviews_create(&self, review: NewReview) -> Review {
        let created = self.catalog.write().await.add_review(review);
        tracing::info!(
            "Review added: id={} book_id={} rating={}",
            created.id,
            created.book_id,
            created.rating
        );
        created
    }
}

fn owned<T: Clone>(records: Vec<&T>) -> Vec<T> {
    records.into_iter().cloned().collect()
}
