//! HTTP implementation of the cart port.

use bookstall_cart::{CartApi, CartSnapshot};
use bookstall_core::{BookId, CartItemId, RemoteResult};
use tracing::debug;

use crate::dto::{AddItemRequest, CartDto, UpdateItemRequest};
use crate::transport::{Auth, Http};

/// [`CartApi`] over the backend cart resource.
///
/// All four operations require the session credential; the shared transport
/// rejects them locally when no token is present.
#[derive(Clone)]
pub struct HttpCartApi {
    http: Http,
}

impl HttpCartApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }
}

#[async_trait::async_trait]
impl CartApi for HttpCartApi {
    async fn fetch_cart(&self) -> RemoteResult<CartSnapshot> {
        let dto: CartDto = self.http.get("cart/cart/", Auth::Session).await?;
        dto.try_into()
    }

    async fn add_item(&self, book_id: BookId, quantity: u32) -> RemoteResult<()> {
        debug!(%book_id, quantity, "POST add_item");
        let body = AddItemRequest { book_id, quantity };
        self.http
            .post_no_content("cart/cart/add_item/", &body, Auth::Session)
            .await
    }

    async fn update_item(&self, item_id: CartItemId, quantity: u32) -> RemoteResult<()> {
        debug!(%item_id, quantity, "PATCH update_item");
        let body = UpdateItemRequest { quantity };
        self.http
            .patch_no_content(
                &format!("cart/cart/{item_id}/update_item/"),
                &body,
                Auth::Session,
            )
            .await
    }

    async fn remove_item(&self, item_id: CartItemId) -> RemoteResult<()> {
        debug!(%item_id, "DELETE remove_item");
        self.http
            .delete(&format!("cart/cart/{item_id}/remove_item/"), Auth::Session)
            .await
    }
}
