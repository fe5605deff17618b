//! Bootstrap modal event binding.
//!
//! Bootstrap's modal plugin dispatches `shown.bs.modal` on the dialog element
//! after its entrance transition completes. Components bind to the element
//! they own rather than looking it up by id.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Event fired on a modal element once it is fully shown.
pub const SHOWN_EVENT: &str = "shown.bs.modal";

/// Run `on_shown` every time `dialog` finishes opening.
///
/// The listener stays attached for the lifetime of the element.
///
/// # Errors
///
/// Returns the DOM exception if the listener cannot be registered.
#[cfg(feature = "hydrate")]
pub fn bind_shown(dialog: &web_sys::EventTarget, on_shown: impl Fn() + 'static) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| on_shown()) as Box<dyn FnMut(web_sys::Event)>);
    dialog.add_event_listener_with_callback(SHOWN_EVENT, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
