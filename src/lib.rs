#![cfg(target_arch = "wasm32")]
//! Browser entry point: builds the ambient engine and scene state, wires
//! the DOM controls and input handlers, and starts the frame loop.

use crate::audio::WebAudioBackend;
use crate::core::catalog::AMBIENT_SOUNDS;
use crate::core::fx::{FxId, FxSelection};
use crate::core::idle::IdleDetector;
use crate::core::keys::Action;
use crate::core::video::VideoMode;
use crate::core::{prefs, AmbientEngine, SceneNavigator};
use crate::storage::LocalStore;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod core;
mod dom;
mod events;
mod frame;
mod media;
mod overlay;
mod render;
mod storage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lumen starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn fx_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id("fx-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #fx-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn canvas_context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Wire every `sound-{id}` selector button. Choosing a sound clears any
/// manual scene override so the scene follows again.
fn wire_sound_buttons(shared: &events::Shared) {
    for sound in AMBIENT_SOUNDS {
        let s = shared.clone();
        let id = sound.id;
        dom::add_click_listener(&shared.document, &format!("sound-{id}"), move || {
            s.note_activity();
            s.navigator.borrow_mut().select_sound();
            s.engine.borrow_mut().set_current_sound(id);
        });
    }
}

fn wire_fx_buttons(shared: &events::Shared) {
    for fx in [FxId::None, FxId::Bokeh, FxId::Fireflies, FxId::Particles] {
        let s = shared.clone();
        dom::add_click_listener(&shared.document, &format!("fx-{}", fx.as_str()), move || {
            s.note_activity();
            s.fx.borrow_mut().set_selected(fx);
            let engine = s.engine.borrow();
            prefs::save_fx(engine.store(), fx);
        });
    }
}

fn wire_control_buttons(shared: &events::Shared) {
    const BUTTONS: &[(&str, Action)] = &[
        ("btn-prev", Action::PrevScene),
        ("btn-next", Action::NextScene),
        ("btn-play", Action::TogglePlay),
        ("btn-mute", Action::ToggleMute),
        ("btn-video", Action::ToggleVideo),
        ("btn-fullscreen", Action::ToggleFullscreen),
        ("btn-shortcuts", Action::ToggleShortcuts),
        ("btn-reset", Action::ResetPrefs),
    ];
    for &(id, action) in BUTTONS {
        let s = shared.clone();
        dom::add_click_listener(&shared.document, id, move || {
            s.note_activity();
            events::dispatch(&s, action);
        });
    }
}

fn wire_volume_slider(shared: &events::Shared) {
    let Some(el) = shared.document.get_element_by_id("volume-slider") else {
        return;
    };
    let Ok(input) = el.dyn_into::<web::HtmlInputElement>() else {
        return;
    };
    let s = shared.clone();
    let input_for_read = input.clone();
    let on_input = Closure::wrap(Box::new(move |_ev: web::Event| {
        s.note_activity();
        if let Ok(volume) = input_for_read.value().parse::<f32>() {
            s.engine.borrow_mut().set_volume(volume);
        }
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref());
    on_input.forget();
}

/// The splash screen doubles as the first user gesture: dismissing it
/// resumes the audio context and retries a sound the autoplay policy
/// refused at load time.
fn wire_splash(shared: &events::Shared) {
    let s = shared.clone();
    dom::add_click_listener(&shared.document, "splash-enter", move || {
        {
            let mut engine = s.engine.borrow_mut();
            engine.backend_mut().resume();
            engine.restart_current();
        }
        overlay::hide(&s.document, overlay::SPLASH_ID);
    });
}

/// Live reduced-motion updates; the stored FX choice is untouched, only
/// rendering is gated.
fn wire_reduced_motion(fx: &Rc<RefCell<FxSelection>>) {
    let Some(query) = dom::reduced_motion_query() else {
        return;
    };
    let fx = fx.clone();
    let on_change = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
        fx.borrow_mut().set_reduced_motion(ev.matches());
    }) as Box<dyn FnMut(_)>);
    _ = query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();
}

/// Show the gesture instructions on first touch visit only.
fn show_instructions_once(shared: &events::Shared) {
    if !shared.capabilities.is_touch {
        return;
    }
    let seen = {
        let engine = shared.engine.borrow();
        prefs::load_instructions_seen(engine.store())
    };
    if !seen {
        overlay::show(&shared.document, overlay::INSTRUCTIONS_ID);
        let engine = shared.engine.borrow();
        prefs::mark_instructions_seen(engine.store());
    }
    let s = shared.clone();
    dom::add_click_listener(&shared.document, "instructions-dismiss", move || {
        overlay::hide(&s.document, overlay::INSTRUCTIONS_ID);
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = fx_canvas(&document)?;
    let ctx2d = canvas_context_2d(&canvas)?;
    dom::sync_canvas_backing_size(&canvas);

    let capabilities = dom::detect_capabilities();
    let store = LocalStore::new();
    let video_enabled = prefs::load_video_enabled(&store);
    let fx_choice = prefs::load_fx(&store);

    let backend = WebAudioBackend::new().map_err(|e| anyhow::anyhow!("{e}"))?;
    let engine = Rc::new(RefCell::new(AmbientEngine::new(backend, store)));

    let mut navigator = SceneNavigator::new();
    navigator.sync_to_sound(engine.borrow().current_sound());
    let navigator = Rc::new(RefCell::new(navigator));

    let reduced = dom::reduced_motion_query().map_or(false, |q| q.matches());
    let fx = Rc::new(RefCell::new(FxSelection::new(fx_choice, reduced)));
    wire_reduced_motion(&fx);

    let video = Rc::new(RefCell::new(VideoMode::new(
        video_enabled,
        capabilities.is_touch,
    )));

    // Touch devices keep the controls visible; idle hiding is pointer-only.
    let mut idle = IdleDetector::default();
    if capabilities.is_touch {
        _ = idle.set_enabled(false);
    }
    let idle = Rc::new(RefCell::new(idle));

    let shared = events::Shared {
        engine: engine.clone(),
        navigator: navigator.clone(),
        fx: fx.clone(),
        video: video.clone(),
        idle: idle.clone(),
        document: document.clone(),
        capabilities,
    };

    events::keyboard::wire(&shared);
    events::pointer::wire(&shared);
    wire_sound_buttons(&shared);
    wire_fx_buttons(&shared);
    wire_control_buttons(&shared);
    wire_volume_slider(&shared);
    wire_splash(&shared);
    show_instructions_once(&shared);
    media::wire_video_fallback(&document);

    shared.sync_volume_slider();

    let initial_sound = engine.borrow().current_sound().to_string();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        navigator,
        fx,
        video,
        idle,
        document,
        canvas,
        ctx2d,
        sim: None,
        last_instant: Instant::now(),
        last_sound: initial_sound,
        last_scene: None,
        last_video_on: false,
        last_playing: None,
        last_muted: None,
    }));
    frame::start_loop(frame_ctx);

    log::info!("lumen ready");
    Ok(())
}
