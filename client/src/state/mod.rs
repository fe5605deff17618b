//! Reactive UI state held in Leptos context signals.

pub mod bike_modal;
