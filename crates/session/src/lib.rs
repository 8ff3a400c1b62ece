//! `bookstall-session` — authenticated-session ownership.
//!
//! One [`Session`] instance owns the bearer token for the life of the
//! process. It is created once at startup and handed by reference to every
//! component that signs requests; nothing else reads or writes the token.
//! Persistence is pluggable through [`TokenStore`].

pub mod profile;
pub mod reset;
pub mod session;
pub mod store;
pub mod token;

pub use profile::UserProfile;
pub use reset::PasswordReset;
pub use session::Session;
pub use store::{InMemoryTokenStore, TokenStore};
pub use token::SessionToken;
