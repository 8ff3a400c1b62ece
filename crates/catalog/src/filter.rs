//! Client-side catalog filtering.

use std::collections::HashSet;

use bookstall_core::CategoryId;

use crate::book::{Book, BookFormat};

/// Conjunctive filter over an already-fetched book list.
///
/// Every set criterion must hold for a book to pass; unset criteria are
/// ignored. Books without a cover image are always excluded, matching the
/// storefront listing rule. Input order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    search: Option<String>,
    category: Option<CategoryId>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    min_rating: Option<f64>,
    formats: HashSet<BookFormat>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match against title or author.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        };
        self
    }

    pub fn category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Inclusive price bounds. Missing prices count as zero.
    pub fn price_range(mut self, min: f64, max: f64) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }

    /// Minimum rating; unrated books count as zero.
    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Restrict to the given formats. An empty set means "any format".
    pub fn format(mut self, format: BookFormat) -> Self {
        self.formats.insert(format);
        self
    }

    pub fn matches(&self, book: &Book) -> bool {
        if !book.is_displayable() {
            return false;
        }

        if let Some(term) = &self.search {
            let hit = book.title.to_lowercase().contains(term)
                || book.author.to_lowercase().contains(term);
            if !hit {
                return false;
            }
        }

        if let Some(category) = self.category {
            if book.category != category {
                return false;
            }
        }

        let price = book.price_or_zero();
        if let Some(min) = self.min_price {
            if price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if price > max {
                return false;
            }
        }

        if let Some(min) = self.min_rating {
            if book.rating_or_zero() < min {
                return false;
            }
        }

        if !self.formats.is_empty() && !self.formats.contains(&book.format) {
            return false;
        }

        true
    }

    /// Filter a slice, preserving input order.
    pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books.iter().filter(|b| self.matches(b)).collect()
    }
}
