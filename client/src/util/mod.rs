//! Browser helpers used by components.

pub mod modal_events;
