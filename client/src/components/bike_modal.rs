//! Bootstrap modal listing every stored bike as a checkbox.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page provides the populator state signal. On hydration the
//! component binds Bootstrap's `shown.bs.modal` event on its own dialog
//! element, and every shown transition issues one `GET /get_bikes`. The form
//! is re-derived from whatever list the state last committed.
//!
//! ERROR HANDLING
//! ==============
//! Request failures are logged to the browser console only. The form keeps
//! its previous content.

#[cfg(test)]
#[path = "bike_modal_test.rs"]
mod bike_modal_test;

use leptos::prelude::*;

use crate::components::bike_form::{BikeForm, BikeFormView};
use crate::state::bike_modal::BikeModalState;
#[cfg(feature = "hydrate")]
use crate::state::bike_modal::Completion;

/// DOM id of the dialog element.
pub const BIKE_MODAL_ID: &str = "bikeModal";

/// CSS selector used by trigger buttons (`data-bs-target`).
#[must_use]
pub fn modal_target_selector() -> String {
    format!("#{BIKE_MODAL_ID}")
}

/// Fetch the bike list and commit it to `state` unless a newer request
/// supersedes it first.
#[cfg(feature = "hydrate")]
pub fn request_bikes(state: RwSignal<BikeModalState>) {
    let Some(ticket) = state.try_update(BikeModalState::begin_request) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_bikes().await;
        match state.try_update(|s| s.complete(ticket, result)) {
            Some(Completion::Failed(e)) => leptos::logging::warn!("Error: {e}"),
            Some(Completion::Stale) => {
                leptos::logging::debug_warn!("dropped stale bike list response #{}", ticket.seq());
            }
            Some(Completion::Applied) | None => {}
        }
    });
}

/// Bike selection modal.
#[component]
pub fn BikeModal(state: RwSignal<BikeModalState>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let bound = StoredValue::new(false);
        Effect::new(move || {
            let Some(dialog) = dialog_ref.get() else {
                return;
            };
            if bound.get_value() {
                return;
            }
            bound.set_value(true);
            if let Err(e) = crate::util::modal_events::bind_shown(&dialog, move || request_bikes(state)) {
                leptos::logging::warn!("failed to bind shown listener on #{BIKE_MODAL_ID}: {e:?}");
            }
        });
    }

    let form = Signal::derive(move || state.with(|s| s.bikes.as_ref().map(BikeForm::from_list)));

    view! {
        <div
            class="modal fade"
            id=BIKE_MODAL_ID
            tabindex="-1"
            aria-labelledby="bikeModalLabel"
            aria-hidden="true"
            node_ref=dialog_ref
        >
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title" id="bikeModalLabel">"Select Bikes"</h5>
                        <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
                    </div>
                    <div class="modal-body">
                        <BikeFormView form/>
                    </div>
                </div>
            </div>
        </div>
    }
}
