//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server crate serializes these same types from its `/get_bikes` route,
//! so the JSON shape is defined exactly once.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A bike record selectable from the bike modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bike {
    /// Server-assigned identifier, submitted back as the checkbox value.
    pub id: i64,
    /// Display name shown next to the checkbox.
    pub name: String,
}

/// Response payload of `GET /get_bikes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BikeList {
    /// Bikes in server order. Rendering never reorders them.
    pub bikes: Vec<Bike>,
}

impl BikeList {
    #[must_use]
    pub fn new(bikes: Vec<Bike>) -> Self {
        Self { bikes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bikes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bikes.is_empty()
    }
}
