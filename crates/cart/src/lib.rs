//! Cart synchronization module.
//!
//! The local cart is a mirror of a server-held resource. Every mutation goes
//! to the backend first and, on success, is followed by a full re-fetch that
//! replaces the mirror wholesale; on failure the previous mirror is kept
//! untouched. There is no partial or merged state in between.
//!
//! [`CartApi`] is the port to the remote cart resource; `bookstall-client`
//! provides the HTTP implementation and [`InMemoryCartApi`] a local one with
//! the backend's semantics for tests and offline tooling. [`CartManager`]
//! owns the mirror and the reconciliation policy.

pub mod api;
pub mod in_memory;
pub mod item;
pub mod manager;
pub mod pricing;
pub mod snapshot;

pub use api::CartApi;
pub use in_memory::InMemoryCartApi;
pub use item::CartItem;
pub use manager::{CartManager, CartOutcome};
pub use pricing::{CheckoutPricing, PriceBreakdown};
pub use snapshot::CartSnapshot;
