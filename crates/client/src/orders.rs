//! Order history and placement.

use bookstall_core::{OrderId, RemoteResult};
use bookstall_orders::{Order, OrderDraft, OrderStatus};
use tracing::info;

use crate::dto::{OrderDto, UpdateStatusRequest};
use crate::transport::{Auth, Http};

/// Client for the orders resource. All operations require a session; status
/// updates and deletion additionally require a staff account server-side.
#[derive(Clone)]
pub struct OrdersClient {
    http: Http,
}

impl OrdersClient {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    /// Orders visible to the current user (all orders for staff accounts).
    pub async fn list_orders(&self) -> RemoteResult<Vec<Order>> {
        let dtos: Vec<OrderDto> = self.http.get("orders/orders/", Auth::Session).await?;
        dtos.into_iter().map(Order::try_from).collect()
    }

    /// Place an order from a cart-derived draft.
    ///
    /// On success the backend may or may not have cleared the server cart;
    /// callers must follow up with a cart refresh rather than assume either.
    pub async fn place_order(&self, draft: &OrderDraft) -> RemoteResult<Order> {
        let dto: OrderDto = self
            .http
            .post("orders/orders/place_order/", draft, Auth::Session)
            .await?;
        let order = Order::try_from(dto)?;
        info!(order_id = %order.id, lines = order.items.len(), "order placed");
        Ok(order)
    }

    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> RemoteResult<Order> {
        let body = UpdateStatusRequest {
            status: status.as_str().to_string(),
        };
        let dto: OrderDto = self
            .http
            .patch(
                &format!("orders/orders/{id}/update_status/"),
                &body,
                Auth::Session,
            )
            .await?;
        dto.try_into()
    }

    pub async fn delete_order(&self, id: OrderId) -> RemoteResult<()> {
        self.http
            .delete(&format!("orders/orders/{id}/"), Auth::Session)
            .await
    }
}
