//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bike modal reads the populator state from its parent and renders the
//! selection form declaratively from the last committed bike list.

pub mod bike_form;
pub mod bike_modal;
