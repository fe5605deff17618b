//! Route-level page components.

pub mod garage;
