//! Cart line item.

use serde::Serialize;

use bookstall_catalog::Book;
use bookstall_core::{CartItemId, DomainError, DomainResult, Entity};

/// One (book, quantity) pairing in the cart, identified by the server.
///
/// Quantity is always at least 1: a line whose quantity would reach zero is
/// removed, never kept at zero. Construction enforces this, which is why the
/// fields are not public.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    id: CartItemId,
    book: Book,
    quantity: u32,
}

impl CartItem {
    pub fn new(id: CartItemId, book: Book, quantity: u32) -> DomainResult<Self> {
        if quantity < 1 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        Ok(Self { id, book, quantity })
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Line subtotal; a book without a price contributes zero.
    pub fn subtotal(&self) -> f64 {
        self.book.price_or_zero() * f64::from(self.quantity)
    }

    /// Same line with a different quantity. The quantity floor still holds.
    pub fn with_quantity(&self, quantity: u32) -> DomainResult<Self> {
        Self::new(self.id, self.book.clone(), quantity)
    }
}

impl Entity for CartItem {
    type Id = CartItemId;

    fn id(&self) -> CartItemId {
        self.id
    }
}
