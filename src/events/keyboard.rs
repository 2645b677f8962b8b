//! Keyboard shortcuts, bound on the document.

use super::Shared;
use crate::core::keys;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(shared: &Shared) {
    let s = shared.clone();
    let on_keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::HtmlElement>().ok()) {
            if keys::is_text_input_target(&target.tag_name(), target.is_content_editable()) {
                return;
            }
        }
        s.note_activity();
        let Some(action) = keys::action_for_code(&ev.code()) else {
            return;
        };
        // Only decoded shortcuts swallow the event; everything else keeps
        // its browser default.
        ev.prevent_default();
        super::dispatch(&s, action);
    }) as Box<dyn FnMut(_)>);
    _ = shared
        .document
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}
