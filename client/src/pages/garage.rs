//! Garage landing page with the bike selection modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The trigger button opens the modal through Bootstrap's data API. The page
//! hands the app-level populator state to the modal explicitly.

use leptos::prelude::*;

use crate::components::bike_modal::{BikeModal, modal_target_selector};
use crate::state::bike_modal::BikeModalState;

/// Garage page: heading, "Add Bikes" trigger and the bike modal.
#[component]
pub fn GaragePage() -> impl IntoView {
    let bike_modal = expect_context::<RwSignal<BikeModalState>>();

    view! {
        <main class="container py-4">
            <h1>"Garage"</h1>
            <p class="lead">"Pick the bikes whose parts you want to track."</p>
            <button
                type="button"
                class="btn btn-primary"
                data-bs-toggle="modal"
                data-bs-target=modal_target_selector()
            >
                "Add Bikes"
            </button>
            <BikeModal state=bike_modal/>
        </main>
    }
}
