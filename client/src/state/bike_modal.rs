//! Bike-modal populator state.
//!
//! DESIGN
//! ======
//! Each "shown" transition of the modal issues a request ticket. A response
//! is committed only when it carries the latest ticket, so overlapping
//! requests resolve to the most recently issued one regardless of arrival
//! order. A failed request leaves the last committed list untouched.

#[cfg(test)]
#[path = "bike_modal_test.rs"]
mod bike_modal_test;

use crate::net::error::RequestFailure;
use crate::net::types::BikeList;

/// Sequence number identifying one bike-list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// Populator lifecycle: `Idle -> Fetching -> Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchPhase {
    #[default]
    Idle,
    Fetching,
}

/// Outcome of completing a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The response replaced the committed bike list.
    Applied,
    /// The latest request failed; the committed list is unchanged.
    Failed(RequestFailure),
    /// A newer request was issued after this one; the result was dropped.
    Stale,
}

/// State behind the bike modal's form.
#[derive(Clone, Debug, Default)]
pub struct BikeModalState {
    pub phase: FetchPhase,
    /// Last successfully fetched list. `None` until the first success.
    pub bikes: Option<BikeList>,
    latest: u64,
}

impl BikeModalState {
    /// Start a new request and return its ticket. Any request still in
    /// flight becomes stale.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.latest += 1;
        self.phase = FetchPhase::Fetching;
        RequestTicket(self.latest)
    }

    /// Complete the request identified by `ticket`.
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<BikeList, RequestFailure>) -> Completion {
        if ticket.0 != self.latest {
            return Completion::Stale;
        }
        self.phase = FetchPhase::Idle;
        match result {
            Ok(list) => {
                self.bikes = Some(list);
                Completion::Applied
            }
            Err(failure) => Completion::Failed(failure),
        }
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.phase == FetchPhase::Fetching
    }

    #[must_use]
    pub fn latest_ticket(&self) -> Option<RequestTicket> {
        (self.latest > 0).then_some(RequestTicket(self.latest))
    }
}
