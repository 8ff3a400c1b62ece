//! In-memory cart backend.
//!
//! Implements [`CartApi`] with the server's observable semantics: line ids
//! are assigned here, add merges per book, update/remove 404 on unknown
//! lines. Used by the manager's test suite and by offline tooling; failure
//! injection and a round-trip counter make the no-network properties
//! checkable.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};

use bookstall_catalog::Book;
use bookstall_core::{BookId, CartItemId, Entity, RemoteError, RemoteResult};

use crate::api::CartApi;
use crate::item::CartItem;
use crate::snapshot::CartSnapshot;

pub struct InMemoryCartApi {
    books: RwLock<HashMap<BookId, Book>>,
    items: RwLock<Vec<CartItem>>,
    next_item_id: AtomicI64,
    authenticated: AtomicBool,
    round_trips: AtomicU64,
    fail_next: Mutex<Vec<RemoteError>>,
}

impl InMemoryCartApi {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
            items: RwLock::new(Vec::new()),
            next_item_id: AtomicI64::new(1),
            authenticated: AtomicBool::new(true),
            round_trips: AtomicU64::new(0),
            fail_next: Mutex::new(Vec::new()),
        }
    }

    /// Make `book` known to the backend so it can be added to the cart.
    pub fn seed_book(&self, book: Book) {
        self.books.write().unwrap().insert(book.id, book);
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        self.authenticated.store(authenticated, Ordering::SeqCst);
    }

    /// Number of simulated network round trips performed so far.
    /// Locally rejected (unauthenticated) operations do not count.
    pub fn round_trips(&self) -> u64 {
        self.round_trips.load(Ordering::SeqCst)
    }

    /// Queue a failure for the next round trip (FIFO when queued repeatedly).
    pub fn fail_next(&self, error: RemoteError) {
        self.fail_next.lock().unwrap().push(error);
    }

    /// Server-side line items, for assertions.
    pub fn server_items(&self) -> Vec<CartItem> {
        self.items.read().unwrap().clone()
    }

    fn begin_round_trip(&self) -> RemoteResult<()> {
        if !self.authenticated.load(Ordering::SeqCst) {
            return Err(RemoteError::Unauthenticated);
        }
        self.round_trips.fetch_add(1, Ordering::SeqCst);
        let mut queue = self.fail_next.lock().unwrap();
        if queue.is_empty() {
            Ok(())
        } else {
            Err(queue.remove(0))
        }
    }
}

impl Default for InMemoryCartApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CartApi for InMemoryCartApi {
    async fn fetch_cart(&self) -> RemoteResult<CartSnapshot> {
        self.begin_round_trip()?;
        Ok(CartSnapshot::from_items(self.items.read().unwrap().clone()))
    }

    async fn add_item(&self, book_id: BookId, quantity: u32) -> RemoteResult<()> {
        self.begin_round_trip()?;
        if quantity < 1 {
            return Err(RemoteError::Status { status: 400 });
        }

        let book = self
            .books
            .read()
            .unwrap()
            .get(&book_id)
            .cloned()
            .ok_or(RemoteError::Status { status: 400 })?;

        let mut items = self.items.write().unwrap();
        if let Some(pos) = items.iter().position(|i| i.book().id == book_id) {
            // get_or_create semantics: merge into the existing line.
            let merged = items[pos]
                .with_quantity(items[pos].quantity() + quantity)
                .map_err(|_| RemoteError::Status { status: 400 })?;
            items[pos] = merged;
        } else {
            let id = CartItemId::new(self.next_item_id.fetch_add(1, Ordering::SeqCst));
            let item =
                CartItem::new(id, book, quantity).map_err(|_| RemoteError::Status { status: 400 })?;
            items.push(item);
        }
        Ok(())
    }

    async fn update_item(&self, item_id: CartItemId, quantity: u32) -> RemoteResult<()> {
        self.begin_round_trip()?;
        let mut items = self.items.write().unwrap();
        let pos = items
            .iter()
            .position(|i| i.id() == item_id)
            .ok_or(RemoteError::Status { status: 404 })?;
        let updated = items[pos]
            .with_quantity(quantity)
            .map_err(|_| RemoteError::Status { status: 400 })?;
        items[pos] = updated;
        Ok(())
    }

    async fn remove_item(&self, item_id: CartItemId) -> RemoteResult<()> {
        self.begin_round_trip()?;
        let mut items = self.items.write().unwrap();
        let pos = items
            .iter()
            .position(|i| i.id() == item_id)
            .ok_or(RemoteError::Status { status: 404 })?;
        items.remove(pos);
        Ok(())
    }
}
