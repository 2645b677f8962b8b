//! Scene media: swap the full-screen image/video to match the current
//! scene, honoring video mode and falling back to the image on video
//! errors.

use crate::core::catalog::Scene;
use crate::core::video::VideoMode;
use crate::overlay;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const IMAGE_ID: &str = "scene-image";
pub const VIDEO_ID: &str = "scene-video";

fn image_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(IMAGE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn video_element(document: &web::Document) -> Option<web::HtmlVideoElement> {
    document
        .get_element_by_id(VIDEO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok())
}

/// Point the image layer at the scene's asset (mobile variant on touch
/// devices) and apply its object-position hint.
fn apply_image(document: &web::Document, scene: &Scene, is_touch: bool) {
    if let Some(img) = image_element(document) {
        let src = match (is_touch, scene.mobile_image) {
            (true, Some(mobile)) => mobile,
            _ => scene.image,
        };
        let style = img.style();
        _ = style.set_property("background-image", &format!("url('{src}')"));
        _ = style.set_property(
            "background-position",
            scene.object_position.unwrap_or("center"),
        );
    }
}

/// Show the scene. Video only plays when the combined gate allows it;
/// otherwise the element is hidden and unloaded so it holds no resources.
pub fn apply_scene(document: &web::Document, scene: &Scene, index: usize, video: &VideoMode) {
    apply_image(document, scene, video.is_touch());

    let Some(vid) = video_element(document) else {
        return;
    };
    if video.should_show_video(index) {
        if let Some(src) = scene.video {
            if vid.src() != src {
                vid.set_src(src);
                vid.set_loop(true);
                vid.set_muted(true);
            }
            overlay::show(document, VIDEO_ID);
            if let Ok(promise) = vid.play() {
                let doc = document.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                        log::error!("[media] video playback refused, showing image");
                        overlay::hide(&doc, VIDEO_ID);
                    }
                });
            }
            return;
        }
    }
    overlay::hide(document, VIDEO_ID);
    vid.set_src("");
}

/// Video decode/fetch failures fall back to the static image; logged,
/// never fatal.
pub fn wire_video_fallback(document: &web::Document) {
    if let Some(vid) = video_element(document) {
        let doc = document.clone();
        let on_error = Closure::wrap(Box::new(move |_ev: web::Event| {
            log::error!("[media] video failed to load, falling back to image");
            overlay::hide(&doc, VIDEO_ID);
        }) as Box<dyn FnMut(_)>);
        _ = vid.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_error.forget();
    }
}
