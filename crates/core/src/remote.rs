//! Remote-error taxonomy shared by all API clients.
//!
//! This is the error contract between remote clients and their consumers,
//! independent of any particular HTTP library. Transports map their failures
//! into it; consumers (the cart manager in particular) flatten it into a
//! uniform outcome at their boundary and never propagate it further up.

use thiserror::Error;

/// Result type for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Failure of a remote operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// No session token is present. Raised locally, before any request is
    /// built; an unauthenticated operation must not touch the network.
    #[error("not authenticated")]
    Unauthenticated,

    /// The backend answered with a non-2xx status. All non-success statuses
    /// are treated uniformly; the status code is carried for logging only.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// Transport-level failure (unreachable host, aborted connection,
    /// timeout). Surfaced identically to [`RemoteError::Status`] by callers.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Whether the failure was raised locally, without a network round trip.
    pub fn is_local(&self) -> bool {
        matches!(self, RemoteError::Unauthenticated)
    }
}
