//! Failure kind for bike-list requests.

use thiserror::Error;

/// Why a bike-list request produced no usable `BikeList`.
///
/// Covers transport failures, non-2xx responses and bodies that do not decode
/// as a `BikeList`. It is logged where the request completes and never shown
/// to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RequestFailure {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}
