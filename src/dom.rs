//! Small DOM helpers shared by the wiring modules.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a click handler to an element by id; silently does nothing when
/// the element is absent so optional UI can be omitted from the page.
pub fn add_click_listener(document: &web::Document, id: &str, mut f: impl FnMut() + 'static) {
    if let Some(el) = document.get_element_by_id(id) {
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| f()) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Keep the canvas backing store matched to the viewport.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as u32;
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as u32;
        if canvas.width() != w {
            canvas.set_width(w);
        }
        if canvas.height() != h {
            canvas.set_height(h);
        }
    }
}

/// Device capabilities, queried once at startup and passed around instead
/// of re-derived per component.
#[derive(Clone, Copy, Debug)]
pub struct Capabilities {
    pub is_touch: bool,
}

pub fn detect_capabilities() -> Capabilities {
    let is_touch = web::window()
        .map(|w| w.navigator().max_touch_points() > 0)
        .unwrap_or(false);
    Capabilities { is_touch }
}

/// The reduced-motion media query, if the platform supports it.
pub fn reduced_motion_query() -> Option<web::MediaQueryList> {
    web::window()?
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
}

/// Enter or leave fullscreen. Rejections are logged and change no state.
pub fn toggle_fullscreen(document: &web::Document) {
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
    } else if let Some(root) = document.document_element() {
        if let Err(e) = root.request_fullscreen() {
            log::error!("fullscreen request rejected: {:?}", e);
        }
    }
}

pub fn reload_page() {
    if let Some(window) = web::window() {
        if let Err(e) = window.location().reload() {
            log::error!("reload failed: {:?}", e);
        }
    }
}
