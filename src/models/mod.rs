//! Data models for the catalog

pub mod book;
pub mod review;

// Re-export commonly used types
pub use book::{Book, BrowseQuery, CreateBook, NewBook};
pub use review::{CreateReview, NewReview, Review};
