//! Sample catalog loaded at startup when `catalog.seed_sample_data` is set

use chrono::{TimeZone, Utc};

use super::catalog::CatalogStore;
use crate::models::{Book, Review};

struct SampleBook {
    title: &'static str,
    author: &'static str,
    genre: &'static [&'static str],
    description: &'static str,
    cover_image: &'static str,
    rating: f64,
    publication_year: i32,
}

const SAMPLE_BOOKS: &[SampleBook] = &[
    SampleBook {
        title: "Pride and Prejudice",
        author: "Jane Austen",
        genre: &["Classic", "Romance"],
        description: "Pride and Prejudice follows the turbulent relationship between Elizabeth Bennet, the daughter of a country gentleman, and Fitzwilliam Darcy, a rich aristocratic landowner. They must overcome the titular sins of pride and prejudice in order to fall in love and marry.",
        cover_image: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80&w=1000&auto=format&fit=crop",
        rating: 4.5,
        publication_year: 1813,
    },
    SampleBook {
        title: "To Kill a Mockingbird",
        author: "Harper Lee",
        genre: &["Classic", "Historical Fiction"],
        description: "To Kill a Mockingbird is a novel by Harper Lee published in 1960. It was immediately successful, winning the Pulitzer Prize, and has become a classic of modern American literature.",
        cover_image: "https://images.unsplash.com/photo-1541963463532-d68292c34b19?q=80&w=1000&auto=format&fit=crop",
        rating: 4.8,
        publication_year: 1960,
    },
    SampleBook {
        title: "The Great Gatsby",
        author: "F. Scott Fitzgerald",
        genre: &["Classic", "Fiction"],
        description: "The Great Gatsby is a 1925 novel by American writer F. Scott Fitzgerald. Set in the Jazz Age on Long Island, the novel depicts narrator Nick Carraway's interactions with mysterious millionaire Jay Gatsby and Gatsby's obsession to reunite with his former lover, Daisy Buchanan.",
        cover_image: "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?q=80&w=1000&auto=format&fit=crop",
        rating: 4.2,
        publication_year: 1925,
    },
    SampleBook {
        title: "1984",
        author: "George Orwell",
        genre: &["Dystopian", "Science Fiction"],
        description: "1984 is a dystopian novel by English novelist George Orwell. It was published on 8 June 1949 as Orwell's ninth and final book completed in his lifetime.",
        cover_image: "https://images.unsplash.com/photo-1532012197267-da84d127e765?q=80&w=1000&auto=format&fit=crop",
        rating: 4.6,
        publication_year: 1949,
    },
    SampleBook {
        title: "The Hobbit",
        author: "J.R.R. Tolkien",
        genre: &["Fantasy", "Adventure"],
        description: "The Hobbit, or There and Back Again is a children's fantasy novel by English author J. R. R. Tolkien. It was published on 21 September 1937 to wide critical acclaim, being nominated for the Carnegie Medal and awarded a prize from the New York Herald Tribune for best juvenile fiction.",
        cover_image: "https://images.unsplash.com/photo-1629992101753-56d196c8aabb?q=80&w=1000&auto=format&fit=crop",
        rating: 4.7,
        publication_year: 1937,
    },
    SampleBook {
        title: "Harry Potter and the Philosopher's Stone",
        author: "J.K. Rowling",
        genre: &["Fantasy", "Young Adult"],
        description: "Harry Potter and the Philosopher's Stone is a fantasy novel written by British author J. K. Rowling. The first novel in the Harry Potter series and Rowling's debut novel, it follows Harry Potter, a young wizard who discovers his magical heritage on his eleventh birthday.",
        cover_image: "https://images.unsplash.com/photo-1626618012641-bfbca5a31239?q=80&w=1000&auto=format&fit=crop",
        rating: 4.7,
        publication_year: 1997,
    },
];

/// (book index, username, rating, comment, (year, month, day))
const SAMPLE_REVIEWS: &[(usize, &str, u8, &str, (i32, u32, u32))] = &[
    (
        0,
        "BookLover42",
        5,
        "A timeless classic that never gets old. Elizabeth Bennet is one of the most relatable characters in literature.",
        (2023, 1, 15),
    ),
    (
        0,
        "LiteraryFan",
        4,
        "Jane Austen's wit and social commentary shine through in this novel.",
        (2023, 2, 20),
    ),
    (
        1,
        "ClassicReader",
        5,
        "This book changed my perspective on so many things. A must-read for everyone.",
        (2023, 3, 10),
    ),
];

/// Sample books, ids "1" through "6"
pub fn sample_books() -> Vec<Book> {
    SAMPLE_BOOKS
        .iter()
        .enumerate()
        .map(|(i, b)| Book {
            id: (i + 1).to_string(),
            title: b.title.to_string(),
            author: b.author.to_string(),
            genre: b.genre.iter().map(|g| g.to_string()).collect(),
            description: b.description.to_string(),
            cover_image: b.cover_image.to_string(),
            rating: Some(b.rating),
            publication_year: Some(b.publication_year),
        })
        .collect()
}

pub fn sample_reviews() -> Vec<Review> {
    SAMPLE_REVIEWS
        .iter()
        .enumerate()
        .map(|(i, (book, username, rating, comment, (y, m, d)))| Review {
            id: (i + 1).to_string(),
            book_id: (book + 1).to_string(),
            username: username.to_string(),
            rating: *rating,
            comment: comment.to_string(),
            date: Utc
                .with_ymd_and_hms(*y, *m, *d, 0, 0, 0)
                .single()
                .unwrap_or_default(),
        })
        .collect()
}

/// A store holding the sample books and reviews
pub fn sample_store() -> CatalogStore {
    CatalogStore::with_records(sample_books(), sample_reviews())
}
