//! Cart-to-order mapping.

use serde::Serialize;

use bookstall_cart::CartSnapshot;
use bookstall_core::{BookId, DomainError, DomainResult, ValueObject};

/// One `{book_id, quantity}` pair submitted at order placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderLineRef {
    pub book_id: BookId,
    pub quantity: u32,
}

impl ValueObject for OrderLineRef {}

/// The order-placement request derived from the current cart snapshot.
///
/// The contract with the placement endpoint: each cart line maps to its
/// book id and quantity, nothing else; the backend re-reads prices and
/// identities itself. After a successful placement the caller must re-fetch
/// the cart; whether the backend cleared it is not assumed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDraft {
    items: Vec<OrderLineRef>,
}

impl OrderDraft {
    /// Build a draft from the snapshot. An empty cart cannot be placed.
    pub fn from_snapshot(snapshot: &CartSnapshot) -> DomainResult<Self> {
        if snapshot.is_empty() {
            return Err(DomainError::validation("cart is empty"));
        }

        let items = snapshot
            .items()
            .iter()
            .map(|item| OrderLineRef {
                book_id: item.book().id,
                quantity: item.quantity(),
            })
            .collect();

        Ok(Self { items })
    }

    pub fn items(&self) -> &[OrderLineRef] {
        &self.items
    }
}

impl ValueObject for OrderDraft {}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstall_cart::CartItem;
    use bookstall_catalog::{Book, BookFormat};
    use bookstall_core::{CartItemId, CategoryId};
    use proptest::prelude::*;

    fn book(id: i64, price: f64) -> Book {
        Book {
            id: BookId::new(id),
            title: format!("Book {id}"),
            author: "Author".to_string(),
            isbn: format!("isbn-{id}"),
            description: String::new(),
            price: Some(price),
            cover_image: Some("https://cdn.example.com/c.jpg".to_string()),
            category: CategoryId::new(1),
            category_name: None,
            publisher: None,
            publication_date: None,
            language: "English".to_string(),
            pages: None,
            stock: 10,
            rating: None,
            format: BookFormat::Paperback,
        }
    }

    #[test]
    fn empty_snapshot_cannot_be_placed() {
        let err = OrderDraft::from_snapshot(&CartSnapshot::empty()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    proptest! {
        // Every cart line yields exactly one draft line, in order, with the
        // same book id and quantity.
        #[test]
        fn draft_mirrors_the_snapshot(
            quantities in proptest::collection::vec(1u32..50, 1..20)
        ) {
            let items: Vec<CartItem> = quantities
                .iter()
                .enumerate()
                .map(|(i, quantity)| {
                    let line_id = CartItemId::new(i as i64 + 1);
                    CartItem::new(line_id, book(i as i64 + 1000, 1.0), *quantity).unwrap()
                })
                .collect();
            let snapshot = CartSnapshot::from_items(items);

            let draft = OrderDraft::from_snapshot(&snapshot).unwrap();

            prop_assert_eq!(draft.items().len(), snapshot.len());
            for (line, item) in draft.items().iter().zip(snapshot.items()) {
                prop_assert_eq!(line.book_id, item.book().id);
                prop_assert_eq!(line.quantity, item.quantity());
            }
        }
    }

    #[test]
    fn each_cart_line_maps_to_book_id_and_quantity() {
        let snapshot = CartSnapshot::from_items(vec![
            CartItem::new(CartItemId::new(1), book(10, 20.0), 2).unwrap(),
            CartItem::new(CartItemId::new(2), book(11, 5.0), 1).unwrap(),
        ]);

        let draft = OrderDraft::from_snapshot(&snapshot).unwrap();

        assert_eq!(
            draft.items(),
            &[
                OrderLineRef {
                    book_id: BookId::new(10),
                    quantity: 2
                },
                OrderLineRef {
                    book_id: BookId::new(11),
                    quantity: 1
                },
            ]
        );
    }
}
