//! Port to the remote cart resource.

use std::sync::Arc;

use bookstall_core::{BookId, CartItemId, RemoteResult};

use crate::snapshot::CartSnapshot;

/// Remote cart operations.
///
/// Implementations attach the current session credential themselves; when no
/// credential is present they must return `RemoteError::Unauthenticated`
/// without attempting any network round trip.
#[async_trait::async_trait]
pub trait CartApi: Send + Sync {
    /// Fetch the full cart. On failure the caller keeps whatever snapshot it
    /// already had (or an empty one, if none existed).
    async fn fetch_cart(&self) -> RemoteResult<CartSnapshot>;

    /// Create a new line item for `book_id`.
    ///
    /// The backend merges on its side: adding a book that already has a line
    /// increments that line instead of creating a second one.
    async fn add_item(&self, book_id: BookId, quantity: u32) -> RemoteResult<()>;

    /// Set an existing line's quantity. `quantity` must be at least 1;
    /// removal is a separate operation, never an update to zero.
    async fn update_item(&self, item_id: CartItemId, quantity: u32) -> RemoteResult<()>;

    /// Delete a line item.
    async fn remove_item(&self, item_id: CartItemId) -> RemoteResult<()>;
}

#[async_trait::async_trait]
impl<T> CartApi for Arc<T>
where
    T: CartApi + ?Sized,
{
    async fn fetch_cart(&self) -> RemoteResult<CartSnapshot> {
        (**self).fetch_cart().await
    }

    async fn add_item(&self, book_id: BookId, quantity: u32) -> RemoteResult<()> {
        (**self).add_item(book_id, quantity).await
    }

    async fn update_item(&self, item_id: CartItemId, quantity: u32) -> RemoteResult<()> {
        (**self).update_item(item_id, quantity).await
    }

    async fn remove_item(&self, item_id: CartItemId) -> RemoteResult<()> {
        (**self).remove_item(item_id).await
    }
}
