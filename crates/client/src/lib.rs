//! `bookstall-client` — HTTP adapter for the book-store backend.
//!
//! One typed client per backend resource (accounts, catalog, cart, orders),
//! all sharing a single [`transport::Http`] that owns base-URL joining,
//! bearer attachment from the injected [`bookstall_session::Session`], the
//! request timeout, and the uniform non-2xx → [`bookstall_core::RemoteError`]
//! mapping. The wire quirks (decimal-as-string prices, defaulted fields)
//! stay in [`dto`]; domain crates never see them.
//!
//! [`Storefront`] wires the whole stack together from an [`ApiConfig`] and a
//! token store.

pub mod accounts;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod dto;
pub mod orders;
pub mod storefront;
pub mod transport;

pub use accounts::{AccountsClient, Registration};
pub use cart::HttpCartApi;
pub use catalog::CatalogClient;
pub use config::ApiConfig;
pub use orders::OrdersClient;
pub use storefront::Storefront;
pub use transport::{Auth, Http};
