//! Cart state manager: the single source of truth for "what is in the cart".
//!
//! Reconciliation policy: every mutation goes to the backend first; on
//! success the whole snapshot is re-fetched and replaced, on failure the
//! previous snapshot is kept untouched. Per mutating call the manager goes
//! `Idle -> Pending -> Idle`, landing either resynced or unchanged; callers
//! never observe a partially applied state.
//!
//! Concurrent mutations are not serialized here: a second call issued before
//! the first resolves works from whatever snapshot is current at call time,
//! and the last resync to land wins. Callers that need stricter ordering
//! must gate their own submissions.

use std::sync::RwLock;

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use bookstall_catalog::Book;
use bookstall_core::{CartItemId, Entity, RemoteError, ValueObject};

use crate::api::CartApi;
use crate::snapshot::CartSnapshot;

/// Uniform result of a cart operation.
///
/// Everything the remote layer can raise (`Unauthenticated`, a non-2xx
/// status, a transport failure) is flattened into this value at the manager
/// boundary; nothing is propagated past it. The consuming surface owns
/// user-visible messaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartOutcome {
    success: bool,
    message: Option<String>,
}

impl CartOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn ok_with(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl ValueObject for CartOutcome {}

/// Owner of the local cart mirror for the lifetime of the session.
pub struct CartManager<A: CartApi> {
    api: A,
    snapshot: RwLock<CartSnapshot>,
}

impl<A: CartApi> CartManager<A> {
    /// Start with an empty mirror; call [`CartManager::refresh`] to load the
    /// server cart.
    pub fn new(api: A) -> Self {
        Self {
            api,
            snapshot: RwLock::new(CartSnapshot::empty()),
        }
    }

    /// Current mirror. A clone: the authoritative copy is only ever replaced
    /// wholesale, never handed out for in-place edits.
    pub fn snapshot(&self) -> CartSnapshot {
        self.snapshot
            .read()
            .map(|snap| snap.clone())
            .unwrap_or_default()
    }

    pub fn total_price(&self) -> f64 {
        self.snapshot().total_price()
    }

    pub fn item_count(&self) -> u32 {
        self.snapshot().item_count()
    }

    /// Re-derive the mirror from server truth. On failure the previous
    /// snapshot is retained.
    pub async fn refresh(&self) -> CartOutcome {
        match self.api.fetch_cart().await {
            Ok(snapshot) => {
                self.replace(snapshot);
                CartOutcome::ok()
            }
            Err(e) => {
                warn!(error = %e, "cart fetch failed, keeping previous snapshot");
                CartOutcome::failed(e.to_string())
            }
        }
    }

    /// Add one copy of `book` to the cart.
    ///
    /// "Already in cart" is decided by the book id, never the line id: there
    /// is at most one line per distinct book, so an existing line is bumped
    /// by one instead of creating a second line.
    pub async fn add_to_cart(&self, book: &Book) -> CartOutcome {
        let existing = self
            .snapshot
            .read()
            .ok()
            .and_then(|snap| snap.find_by_book(book.id).map(|i| (i.id(), i.quantity())));

        let (result, message) = match existing {
            Some((item_id, quantity)) => {
                debug!(%item_id, quantity = quantity + 1, "bumping existing cart line");
                (
                    self.api.update_item(item_id, quantity + 1).await,
                    "Cart updated successfully",
                )
            }
            None => {
                debug!(book_id = %book.id, "adding new cart line");
                (self.api.add_item(book.id, 1).await, "Item added to cart")
            }
        };

        match result {
            Ok(()) => {
                self.resync("add_to_cart").await;
                CartOutcome::ok_with(message)
            }
            Err(e) => {
                warn!(book_id = %book.id, error = %e, "add to cart failed");
                CartOutcome::failed(e.to_string())
            }
        }
    }

    /// Set a line's quantity. Quantities below 1 are rejected locally with
    /// zero network calls; decrementing to zero must go through
    /// [`CartManager::remove_from_cart`].
    pub async fn update_quantity(&self, item_id: CartItemId, quantity: u32) -> CartOutcome {
        if quantity < 1 {
            debug!(%item_id, "rejected quantity below 1");
            return CartOutcome::failed("quantity must be at least 1");
        }

        match self.api.update_item(item_id, quantity).await {
            Ok(()) => {
                self.resync("update_quantity").await;
                CartOutcome::ok()
            }
            Err(e) => {
                warn!(%item_id, error = %e, "quantity update failed");
                CartOutcome::failed(e.to_string())
            }
        }
    }

    pub async fn remove_from_cart(&self, item_id: CartItemId) -> CartOutcome {
        match self.api.remove_item(item_id).await {
            Ok(()) => {
                self.resync("remove_from_cart").await;
                CartOutcome::ok_with("Item removed from cart")
            }
            Err(e) => {
                warn!(%item_id, error = %e, "remove failed");
                CartOutcome::failed(e.to_string())
            }
        }
    }

    /// Best-effort clear: one remove per line, awaited together with no
    /// ordering between them, then the mirror is emptied regardless of
    /// individual outcomes. The next refresh reconciles anything a failed
    /// remove left behind on the server.
    ///
    /// Exception: with no session token there are no remote sub-steps to be
    /// best-effort about, so the mirror is left untouched and the operation
    /// reports not authenticated like every other cart operation.
    pub async fn clear_cart(&self) -> CartOutcome {
        let ids: Vec<CartItemId> = self
            .snapshot()
            .items()
            .iter()
            .map(|item| item.id())
            .collect();

        if ids.is_empty() {
            return CartOutcome::ok_with("Cart cleared");
        }

        let results = join_all(ids.iter().map(|id| self.api.remove_item(*id))).await;

        if results
            .iter()
            .any(|r| matches!(r, Err(RemoteError::Unauthenticated)))
        {
            return CartOutcome::failed(RemoteError::Unauthenticated.to_string());
        }

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(
                failed,
                total = ids.len(),
                "some cart removals failed; clearing local snapshot anyway"
            );
        }

        self.replace(CartSnapshot::empty());
        CartOutcome::ok_with("Cart cleared")
    }

    /// Fetch-and-replace after a successful mutation. A failed resync keeps
    /// the previous snapshot; the mutation outcome is unaffected.
    async fn resync(&self, operation: &str) {
        match self.api.fetch_cart().await {
            Ok(snapshot) => self.replace(snapshot),
            Err(e) => {
                warn!(operation, error = %e, "resync failed, keeping previous snapshot");
            }
        }
    }

    fn replace(&self, snapshot: CartSnapshot) {
        if let Ok(mut slot) = self.snapshot.write() {
            info!(lines = snapshot.len(), count = snapshot.item_count(), "snapshot replaced");
            *slot = snapshot;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::in_memory::InMemoryCartApi;
    use crate::item::tests::sample_book;
    use bookstall_core::BookId;

    fn setup() -> (Arc<InMemoryCartApi>, CartManager<Arc<InMemoryCartApi>>) {
        let api = Arc::new(InMemoryCartApi::new());
        api.seed_book(sample_book(10, Some(20.0)));
        api.seed_book(sample_book(11, Some(5.0)));
        let manager = CartManager::new(api.clone());
        (api, manager)
    }

    #[tokio::test]
    async fn adding_the_same_book_twice_merges_into_one_line() {
        let (_, manager) = setup();
        let book = sample_book(10, Some(20.0));

        assert!(manager.add_to_cart(&book).await.is_success());
        assert!(manager.add_to_cart(&book).await.is_success());

        let snapshot = manager.snapshot();
        assert_eq!(snapshot.len(), 1);
        let line = snapshot.find_by_book(BookId::new(10)).unwrap();
        assert_eq!(line.quantity(), 2);
        assert_eq!(manager.total_price(), 40.0);
        assert_eq!(manager.item_count(), 2);
    }

    #[tokio::test]
    async fn add_without_session_fails_locally_with_zero_round_trips() {
        let (api, manager) = setup();
        api.set_authenticated(false);

        let outcome = manager.add_to_cart(&sample_book(10, Some(20.0))).await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), Some("not authenticated"));
        assert_eq!(api.round_trips(), 0);
        assert!(manager.snapshot().is_empty());
    }

    #[tokio::test]
    async fn quantity_below_one_is_rejected_without_a_network_call() {
        let (api, manager) = setup();
        manager.add_to_cart(&sample_book(10, Some(20.0))).await;
        let before_snapshot = manager.snapshot();
        let before_trips = api.round_trips();
        let line_id = before_snapshot.items()[0].id();

        // Negative quantities are unrepresentable (u32); zero is the only
        // below-floor value to reject at runtime.
        let outcome = manager.update_quantity(line_id, 0).await;
        assert!(!outcome.is_success());

        assert_eq!(api.round_trips(), before_trips);
        assert_eq!(manager.snapshot(), before_snapshot);
    }

    #[tokio::test]
    async fn failed_update_leaves_snapshot_byte_for_byte_unchanged() {
        let (api, manager) = setup();
        manager.add_to_cart(&sample_book(10, Some(20.0))).await;
        let before = manager.snapshot();
        let line_id = before.items()[0].id();

        api.fail_next(RemoteError::Status { status: 500 });
        let outcome = manager.update_quantity(line_id, 5).await;

        assert!(!outcome.is_success());
        assert_eq!(manager.snapshot(), before);
    }

    #[tokio::test]
    async fn successful_update_resyncs_from_server_truth() {
        let (_, manager) = setup();
        manager.add_to_cart(&sample_book(10, Some(20.0))).await;
        let line_id = manager.snapshot().items()[0].id();

        let outcome = manager.update_quantity(line_id, 4).await;

        assert!(outcome.is_success());
        assert_eq!(manager.item_count(), 4);
        assert_eq!(manager.total_price(), 80.0);
    }

    #[tokio::test]
    async fn removing_the_only_item_empties_the_snapshot() {
        let (_, manager) = setup();
        manager.add_to_cart(&sample_book(10, Some(20.0))).await;
        let line_id = manager.snapshot().items()[0].id();

        let outcome = manager.remove_from_cart(line_id).await;

        assert!(outcome.is_success());
        assert!(manager.snapshot().is_empty());
        assert_eq!(manager.total_price(), 0.0);
        assert_eq!(manager.item_count(), 0);
    }

    #[tokio::test]
    async fn refresh_twice_yields_identical_snapshots() {
        let (_, manager) = setup();
        manager.add_to_cart(&sample_book(10, Some(20.0))).await;
        manager.add_to_cart(&sample_book(11, Some(5.0))).await;

        assert!(manager.refresh().await.is_success());
        let first = manager.snapshot();
        assert!(manager.refresh().await.is_success());
        assert_eq!(manager.snapshot(), first);
    }

    #[tokio::test]
    async fn failed_refresh_retains_previous_snapshot() {
        let (api, manager) = setup();
        manager.add_to_cart(&sample_book(10, Some(20.0))).await;
        let before = manager.snapshot();

        api.fail_next(RemoteError::Network("connection reset".into()));
        let outcome = manager.refresh().await;

        assert!(!outcome.is_success());
        assert_eq!(manager.snapshot(), before);
    }

    #[tokio::test]
    async fn clear_cart_empties_locally_even_when_a_removal_fails() {
        let (api, manager) = setup();
        manager.add_to_cart(&sample_book(10, Some(20.0))).await;
        manager.add_to_cart(&sample_book(11, Some(5.0))).await;
        assert_eq!(manager.snapshot().len(), 2);

        api.fail_next(RemoteError::Status { status: 500 });
        let outcome = manager.clear_cart().await;

        assert!(outcome.is_success());
        assert!(manager.snapshot().is_empty());
        // One server-side line survived the failed removal; the
        // inconsistency lasts until the next refresh.
        assert_eq!(api.server_items().len(), 1);
    }

    #[tokio::test]
    async fn clear_cart_without_session_is_a_noop() {
        let (api, manager) = setup();
        manager.add_to_cart(&sample_book(10, Some(20.0))).await;
        let before = manager.snapshot();

        api.set_authenticated(false);
        let trips_before = api.round_trips();
        let outcome = manager.clear_cart().await;

        assert!(!outcome.is_success());
        assert_eq!(manager.snapshot(), before);
        assert_eq!(api.round_trips(), trips_before);
    }

    #[tokio::test]
    async fn clear_cart_on_empty_snapshot_makes_no_calls() {
        let (api, manager) = setup();
        let outcome = manager.clear_cart().await;

        assert!(outcome.is_success());
        assert_eq!(api.round_trips(), 0);
    }
}
