//! Networking modules for the bike-list endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls, `error` names the single failure kind a
//! request can end in, and `types` defines the wire schema shared with the
//! server crate.

pub mod api;
pub mod error;
pub mod types;
