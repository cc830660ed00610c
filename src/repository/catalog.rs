//! In-memory catalog store
//!
//! Owns the book and review collections and implements every query the API
//! exposes. The store is synchronous and does no locking of its own; see
//! [`super::Repository`] for the shared handle used by the server.

use std::collections::{BTreeSet, HashSet};

use chrono::Utc;
use indexmap::IndexMap;

use crate::models::{Book, NewBook, NewReview, Review};

/// Default number of recommendations returned by [`CatalogStore::similar_books`]
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;

/// Bonus added to the similarity score when two books share an author
const SAME_AUTHOR_BONUS: u32 = 2;

#[derive(Debug)]
pub struct CatalogStore {
    books: IndexMap<String, Book>,
    reviews: Vec<Review>,
    next_book_id: u64,
    next_review_id: u64,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            books: IndexMap::new(),
            reviews: Vec::new(),
            next_book_id: 1,
            next_review_id: 1,
        }
    }

    /// Create a store holding existing records, kept in the given order.
    ///
    /// Book ratings are taken as-is. Id counters resume after the larger of
    /// the record count and the highest numeric id supplied.
    pub fn with_records(books: Vec<Book>, reviews: Vec<Review>) -> Self {
        let next_book_id = next_id(books.iter().map(|b| b.id.as_str()), books.len());
        let next_review_id = next_id(reviews.iter().map(|r| r.id.as_str()), reviews.len());

        Self {
            books: books.into_iter().map(|b| (b.id.clone(), b)).collect(),
            reviews,
            next_book_id,
            next_review_id,
        }
    }

    /// All books in storage order
    pub fn list_books(&self) -> Vec<&Book> {
        self.books.values().collect()
    }

    pub fn get_book(&self, id: &str) -> Option<&Book> {
        self.books.get(id)
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Store a new book under a fresh id. Fields are stored exactly as given.
    pub fn add_book(&mut self, new_book: NewBook) -> Book {
        let id = loop {
            let candidate = self.next_book_id.to_string();
            self.next_book_id += 1;
            if !self.books.contains_key(&candidate) {
                break candidate;
            }
        };

        let book = new_book.into_book(id.clone());
        self.books.insert(id, book.clone());
        book
    }

    /// Reviews for a book in insertion order
    pub fn list_reviews(&self, book_id: &str) -> Vec<&Review> {
        self.reviews.iter().filter(|r| r.book_id == book_id).collect()
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Store a review and recompute the parent book's rating.
    ///
    /// A review for an unknown book is still stored; only the rating update
    /// is skipped.
    pub fn add_review(&mut self, new_review: NewReview) -> Review {
        let review = Review {
            id: self.next_review_id.to_string(),
            book_id: new_review.book_id,
            username: new_review.username,
            rating: new_review.rating,
            comment: new_review.comment,
            date: Utc::now(),
        };
        self.next_review_id += 1;
        self.reviews.push(review.clone());

        let average = self.average_rating(&review.book_id);
        match self.books.get_mut(&review.book_id) {
            Some(book) => book.rating = average,
            None => tracing::warn!(
                "Review {} references unknown book {}",
                review.id,
                review.book_id
            ),
        }

        review
    }

    /// Distinct genre tags across all books, ascending
    pub fn genres(&self) -> Vec<String> {
        self.books
            .values()
            .flat_map(|b| b.genre.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Distinct authors, ascending
    pub fn authors(&self) -> Vec<String> {
        self.books
            .values()
            .map(|b| b.author.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Books carrying exactly this genre tag (case-sensitive)
    pub fn by_genre(&self, genre: &str) -> Vec<&Book> {
        self.books
            .values()
            .filter(|b| b.genre.iter().any(|g| g == genre))
            .collect()
    }

    /// Books whose author contains `author` (case-insensitive)
    pub fn by_author(&self, author: &str) -> Vec<&Book> {
        let needle = author.to_lowercase();
        self.books
            .values()
            .filter(|b| b.author.to_lowercase().contains(&needle))
            .collect()
    }

    /// Case-insensitive substring match on title, author or any genre tag.
    ///
    /// An empty query matches every book.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .values()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle)
                    || b.author.to_lowercase().contains(&needle)
                    || b.genre.iter().any(|g| g.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Books related to `book_id`, best match first.
    ///
    /// Score is the number of distinct shared genre tags, plus
    /// [`SAME_AUTHOR_BONUS`] for the same author. Books scoring zero are
    /// dropped; equal scores keep storage order.
    pub fn similar_books(&self, book_id: &str, limit: usize) -> Vec<&Book> {
        let Some(target) = self.books.get(book_id) else {
            return Vec::new();
        };
        let target_genres: HashSet<&str> = target.genre.iter().map(String::as_str).collect();

        let mut scored: Vec<(u32, &Book)> = self
            .books
            .values()
            .filter(|b| b.id != target.id)
            .map(|b| (similarity(&target_genres, &target.author, b), b))
            .filter(|(score, _)| *score > 0)
            .collect();

        // stable: ties stay in storage order
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().take(limit).map(|(_, b)| b).collect()
    }

    /// Highest rated books first; unrated books rank as 0
    pub fn top_rated(&self, limit: usize) -> Vec<&Book> {
        let mut books = self.list_books();
        books.sort_by(|a, b| b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0)));
        books.truncate(limit);
        books
    }

    /// Most recently published books first; unknown years rank as 0
    pub fn most_recent(&self, limit: usize) -> Vec<&Book> {
        let mut books = self.list_books();
        books.sort_by_key(|b| std::cmp::Reverse(b.publication_year.unwrap_or(0)));
        books.truncate(limit);
        books
    }

    fn average_rating(&self, book_id: &str) -> Option<f64> {
        let (sum, count) = self
            .reviews
            .iter()
            .filter(|r| r.book_id == book_id)
            .fold((0u32, 0u32), |(sum, count), r| (sum + u32::from(r.rating), count + 1));

        if count == 0 {
            return None;
        }
        Some(round_to_tenth(sum, count))
    }
}

fn similarity(target_genres: &HashSet<&str>, target_author: &str, other: &Book) -> u32 {
    let shared = other
        .genre
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .intersection(target_genres)
        .count() as u32;

    let author_bonus = if other.author == target_author {
        SAME_AUTHOR_BONUS
    } else {
        0
    };

    shared + author_bonus
}

/// Mean of `sum / count` rounded half-up to one decimal place
fn round_to_tenth(sum: u32, count: u32) -> f64 {
    (f64::from(sum) * 10.0 / f64::from(count)).round() / 10.0
}

fn next_id<'a>(ids: impl Iterator<Item = &'a str>, len: usize) -> u64 {
    let highest = ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
    highest.max(len as u64) + 1
}
