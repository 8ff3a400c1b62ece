//! Top-level wiring.

use std::sync::Arc;

use bookstall_cart::CartManager;
use bookstall_core::RemoteResult;
use bookstall_session::{Session, TokenStore};

use crate::accounts::AccountsClient;
use crate::cart::HttpCartApi;
use crate::catalog::CatalogClient;
use crate::config::ApiConfig;
use crate::orders::OrdersClient;
use crate::transport::Http;

/// The assembled storefront client.
///
/// Builds the session once and injects it into every resource client, so the
/// token has exactly one owner and one lifecycle: `accounts.login` sets it,
/// `accounts.logout` clears it, everything else only reads it.
pub struct Storefront {
    pub session: Arc<Session>,
    pub accounts: AccountsClient,
    pub catalog: CatalogClient,
    pub orders: OrdersClient,
    pub cart: CartManager<HttpCartApi>,
}

impl Storefront {
    pub fn new(config: ApiConfig, token_store: Arc<dyn TokenStore>) -> RemoteResult<Self> {
        let session = Arc::new(Session::new(token_store));
        let http = Http::new(&config, session.clone())?;

        Ok(Self {
            session,
            accounts: AccountsClient::new(http.clone()),
            catalog: CatalogClient::new(http.clone()),
            orders: OrdersClient::new(http.clone()),
            cart: CartManager::new(HttpCartApi::new(http)),
        })
    }
}
