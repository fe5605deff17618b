//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the bike repository behind a trait object so handlers are
//! independent of the storage backend.

use std::sync::Arc;

use crate::services::bike::BikeRepository;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub bikes: Arc<dyn BikeRepository>,
}

impl AppState {
    #[must_use]
    pub fn new(bikes: Arc<dyn BikeRepository>) -> Self {
        Self { bikes }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
