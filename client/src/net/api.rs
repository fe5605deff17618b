//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `RequestFailure::Unavailable` since the
//! bike list is only fetched in the browser when the modal opens.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::RequestFailure;
use super::types::BikeList;

/// Endpoint serving the bike list.
pub const BIKES_ENDPOINT: &str = "/get_bikes";

/// Form action receiving the selected bike ids.
pub const ADD_BIKES_ENDPOINT: &str = "/add_bikes";

#[cfg(any(test, feature = "hydrate"))]
fn status_failure(status: u16) -> Option<RequestFailure> {
    (!(200..300).contains(&status)).then_some(RequestFailure::Status(status))
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_bike_list(body: &str) -> Result<BikeList, RequestFailure> {
    serde_json::from_str(body).map_err(|e| RequestFailure::Decode(e.to_string()))
}

/// Fetch the bike list from `GET /get_bikes`.
///
/// # Errors
///
/// Returns a [`RequestFailure`] if the request cannot be sent, the server
/// answers with a non-2xx status, or the body is not a valid `BikeList`.
pub async fn fetch_bikes() -> Result<BikeList, RequestFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(BIKES_ENDPOINT)
            .send()
            .await
            .map_err(|e| RequestFailure::Network(e.to_string()))?;
        if let Some(failure) = status_failure(resp.status()) {
            return Err(failure);
        }
        let body = resp
            .text()
            .await
            .map_err(|e| RequestFailure::Network(e.to_string()))?;
        parse_bike_list(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(RequestFailure::Unavailable)
    }
}
