//! Book record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bookstall_core::{BookId, CategoryId, Entity};

/// Physical/digital format of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookFormat {
    Hardcover,
    #[default]
    Paperback,
    Ebook,
}

impl core::fmt::Display for BookFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BookFormat::Hardcover => write!(f, "Hardcover"),
            BookFormat::Paperback => write!(f, "Paperback"),
            BookFormat::Ebook => write!(f, "Ebook"),
        }
    }
}

/// A catalog book as returned by the backend.
///
/// This is a read-only reference snapshot: identity, pricing, and stock are
/// all server-owned. A missing price is legal and treated as zero wherever
/// prices are summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub description: String,
    pub price: Option<f64>,
    pub cover_image: Option<String>,
    pub category: CategoryId,
    /// Denormalized category name, when the serializer includes it.
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub publication_date: Option<NaiveDate>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub format: BookFormat,
}

fn default_language() -> String {
    "English".to_string()
}

impl Book {
    /// Price for arithmetic: missing price counts as zero.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Rating for filtering: unrated books count as zero.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Whether the record is complete enough to show in the storefront.
    /// Books without a cover image are kept out of listings.
    pub fn is_displayable(&self) -> bool {
        self.cover_image.is_some()
    }
}

impl Entity for Book {
    type Id = BookId;

    fn id(&self) -> BookId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_book(id: i64, title: &str) -> Book {
        Book {
            id: BookId::new(id),
            title: title.to_string(),
            author: "Unknown".to_string(),
            isbn: format!("978-{id:010}"),
            description: String::new(),
            price: Some(10.0),
            cover_image: Some("https://cdn.example.com/cover.jpg".to_string()),
            category: bookstall_core::CategoryId::new(1),
            category_name: None,
            publisher: None,
            publication_date: None,
            language: "English".to_string(),
            pages: None,
            stock: 5,
            rating: None,
            format: BookFormat::Paperback,
        }
    }

    #[test]
    fn missing_price_counts_as_zero() {
        let mut book = sample_book(1, "Untitled");
        book.price = None;
        assert_eq!(book.price_or_zero(), 0.0);
    }

    #[test]
    fn out_of_stock_when_zero() {
        let mut book = sample_book(1, "Untitled");
        assert!(book.in_stock());
        book.stock = 0;
        assert!(!book.in_stock());
    }

    #[test]
    fn books_without_cover_are_not_displayable() {
        let mut book = sample_book(1, "Untitled");
        book.cover_image = None;
        assert!(!book.is_displayable());
    }
}
