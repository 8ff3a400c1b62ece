//! The local cart mirror.

use serde::Serialize;

use bookstall_core::{BookId, CartItemId, Entity, ValueObject};

use crate::item::CartItem;

/// Insertion-ordered sequence of cart items, as returned by the server.
///
/// A snapshot is only ever replaced wholesale after a successful fetch,
/// never edited in place. There is at most one line per distinct book; the
/// dedup key is the book id, not the line id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartSnapshot {
    items: Vec<CartItem>,
}

impl CartSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line item for `book_id`, if the book is already in the cart.
    pub fn find_by_book(&self, book_id: BookId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.book().id == book_id)
    }

    pub fn get(&self, item_id: CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    /// Sum of `price * quantity` over all lines; missing prices count as 0.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(CartItem::quantity).sum()
    }
}

impl ValueObject for CartSnapshot {}
