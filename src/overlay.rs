//! DOM visibility for the control chrome: controls bar, shortcut panel,
//! scene indicator, one-time mobile instructions.

use web_sys as web;

pub const CONTROLS_ID: &str = "controls";
pub const SHORTCUTS_ID: &str = "shortcuts-panel";
pub const INDICATOR_ID: &str = "scene-indicator";
pub const INSTRUCTIONS_ID: &str = "mobile-instructions";
pub const SPLASH_ID: &str = "splash";

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .map(|el| el.class_list().contains("hidden"))
        .unwrap_or(true)
}

#[inline]
pub fn toggle(document: &web::Document, id: &str) {
    if is_hidden(document, id) {
        show(document, id);
    } else {
        hide(document, id);
    }
}

/// Update the indicator text to "name · n / total".
pub fn set_scene_indicator(document: &web::Document, name: &str, index: usize, total: usize) {
    if let Some(el) = document.get_element_by_id(INDICATOR_ID) {
        el.set_text_content(Some(&format!("{} · {} / {}", name, index + 1, total)));
    }
}

/// Reflect play/mute state onto the control buttons via data attributes so
/// styling stays in CSS.
pub fn set_playback_state(document: &web::Document, playing: bool, muted: bool) {
    if let Some(el) = document.get_element_by_id(CONTROLS_ID) {
        _ = el.set_attribute("data-playing", if playing { "true" } else { "false" });
        _ = el.set_attribute("data-muted", if muted { "true" } else { "false" });
    }
}

pub fn set_volume_slider(document: &web::Document, volume: f32) {
    use wasm_bindgen::JsCast;
    if let Some(el) = document.get_element_by_id("volume-slider") {
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_value(&format!("{volume:.2}"));
        }
    }
}
