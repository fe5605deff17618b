//! Domain services backing the HTTP routes.

pub mod bike;
pub mod seed;
