//! Pointer and touch gestures: tap zones, double tap, horizontal swipes,
//! vertical volume drags. Decoding lives in `core::gesture`; this module
//! only feeds it event coordinates.

use super::Shared;
use crate::core::gesture::{
    classify_tap, DoubleTapDetector, SwipeGesture, SwipeTracker, TapZone, VolumeSwipeTracker,
};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A press that travels further than this is a drag, not a tap.
const TAP_MOVE_TOLERANCE_PX: f32 = 10.0;

#[derive(Default)]
struct PointerState {
    down: Option<(f32, f32)>,
    double_tap: DoubleTapDetector,
    swipe: SwipeTracker,
    volume_swipe: VolumeSwipeTracker,
}

fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

fn on_tap(shared: &Shared, state: &mut PointerState, x: f32, timestamp_ms: f64) {
    match classify_tap(x, viewport_width()) {
        TapZone::Left => shared.navigator.borrow_mut().previous(),
        TapZone::Right => shared.navigator.borrow_mut().next(),
        TapZone::Center => {
            if state.double_tap.tap(timestamp_ms) {
                shared.engine.borrow_mut().toggle_play();
            } else {
                overlay::toggle(&shared.document, overlay::CONTROLS_ID);
            }
        }
    }
}

pub fn wire(shared: &Shared) {
    let state = Rc::new(RefCell::new(PointerState::default()));

    // Any pointer motion counts as activity for the idle countdown.
    {
        let s = shared.clone();
        let on_move = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            s.note_activity();
        }) as Box<dyn FnMut(_)>);
        _ = shared
            .document
            .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
        on_move.forget();
    }
    {
        let s = shared.clone();
        let on_wheel = Closure::wrap(Box::new(move |_ev: web::WheelEvent| {
            s.note_activity();
        }) as Box<dyn FnMut(_)>);
        _ = shared
            .document
            .add_event_listener_with_callback("wheel", on_wheel.as_ref().unchecked_ref());
        on_wheel.forget();
    }

    {
        let s = shared.clone();
        let st = state.clone();
        let on_down = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            s.note_activity();
            st.borrow_mut().down = Some((ev.client_x() as f32, ev.client_y() as f32));
        }) as Box<dyn FnMut(_)>);
        _ = shared
            .document
            .add_event_listener_with_callback("pointerdown", on_down.as_ref().unchecked_ref());
        on_down.forget();
    }

    // Tap zones are a touch affordance; desktop has buttons and keys.
    if shared.capabilities.is_touch {
        let s = shared.clone();
        let st = state.clone();
        let on_up = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut state = st.borrow_mut();
            let Some((dx, dy)) = state.down.take() else {
                return;
            };
            let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
            if (x - dx).abs() > TAP_MOVE_TOLERANCE_PX || (y - dy).abs() > TAP_MOVE_TOLERANCE_PX {
                return;
            }
            // Interactive chrome handles its own clicks
            if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) {
                if target.closest("button, input, a, #controls").ok().flatten().is_some() {
                    return;
                }
            }
            on_tap(&s, &mut state, x, ev.time_stamp());
        }) as Box<dyn FnMut(_)>);
        _ = shared
            .document
            .add_event_listener_with_callback("pointerup", on_up.as_ref().unchecked_ref());
        on_up.forget();

        wire_touch(shared, &state);
    }
}

/// Touch-only trackers: horizontal scene swipes and the vertical volume
/// drag. The volume drag wins once it activates; a resolved drag never also
/// counts as a swipe.
fn wire_touch(shared: &Shared, state: &Rc<RefCell<PointerState>>) {
    {
        let s = shared.clone();
        let st = state.clone();
        let on_start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                let (x, y) = (touch.client_x() as f32, touch.client_y() as f32);
                let volume = s.engine.borrow().volume();
                let mut state = st.borrow_mut();
                state.swipe.begin(x, y);
                state.volume_swipe.begin(x, y, volume);
            }
        }) as Box<dyn FnMut(_)>);
        _ = shared
            .document
            .add_event_listener_with_callback("touchstart", on_start.as_ref().unchecked_ref());
        on_start.forget();
    }

    {
        let s = shared.clone();
        let st = state.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                let update = st
                    .borrow_mut()
                    .volume_swipe
                    .update(touch.client_x() as f32, touch.client_y() as f32);
                if let Some((volume, _activated)) = update {
                    s.engine.borrow_mut().set_volume(volume);
                    s.sync_volume_slider();
                }
            }
        }) as Box<dyn FnMut(_)>);
        _ = shared
            .document
            .add_event_listener_with_callback("touchmove", on_move.as_ref().unchecked_ref());
        on_move.forget();
    }

    {
        let s = shared.clone();
        let st = state.clone();
        let on_end = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let Some(touch) = ev.changed_touches().get(0) else {
                return;
            };
            let mut state = st.borrow_mut();
            if state.volume_swipe.is_active() {
                state.volume_swipe.end();
                state.swipe.cancel();
                return;
            }
            state.volume_swipe.end();
            match state
                .swipe
                .end(touch.client_x() as f32, touch.client_y() as f32)
            {
                Some(SwipeGesture::Left) => s.navigator.borrow_mut().next(),
                Some(SwipeGesture::Right) => s.navigator.borrow_mut().previous(),
                None => {}
            }
        }) as Box<dyn FnMut(_)>);
        _ = shared
            .document
            .add_event_listener_with_callback("touchend", on_end.as_ref().unchecked_ref());
        on_end.forget();
    }
}
