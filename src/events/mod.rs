//! Input wiring: browser events in, core state changes out.

pub mod keyboard;
pub mod pointer;

use crate::core::fx::FxSelection;
use crate::core::idle::{IdleDetector, IdleTransition};
use crate::core::video::VideoMode;
use crate::core::{constants, prefs, SceneNavigator};
use crate::dom::Capabilities;
use crate::frame::Engine;
use crate::{dom, overlay, storage};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Handles every event closure needs. Cloning is cheap; everything inside
/// is an `Rc` or a small copy.
#[derive(Clone)]
pub struct Shared {
    pub engine: Rc<RefCell<Engine>>,
    pub navigator: Rc<RefCell<SceneNavigator>>,
    pub fx: Rc<RefCell<FxSelection>>,
    pub video: Rc<RefCell<VideoMode>>,
    pub idle: Rc<RefCell<IdleDetector>>,
    pub document: web::Document,
    pub capabilities: Capabilities,
}

impl Shared {
    /// Register user activity; leaving the idle state brings the controls
    /// back.
    pub fn note_activity(&self) {
        if let Some(IdleTransition::BecameActive) = self.idle.borrow_mut().activity() {
            overlay::show(&self.document, overlay::CONTROLS_ID);
        }
    }

    pub fn sync_volume_slider(&self) {
        let volume = self.engine.borrow().volume();
        overlay::set_volume_slider(&self.document, volume);
    }
}

/// Single dispatch point for player actions, shared by the keyboard map and
/// the on-screen buttons.
pub fn dispatch(shared: &Shared, action: crate::core::keys::Action) {
    use crate::core::keys::Action;
    match action {
        Action::PrevScene => shared.navigator.borrow_mut().previous(),
        Action::NextScene => shared.navigator.borrow_mut().next(),
        Action::TogglePlay => shared.engine.borrow_mut().toggle_play(),
        Action::ToggleMute => shared.engine.borrow_mut().toggle_mute(),
        Action::ToggleFullscreen => dom::toggle_fullscreen(&shared.document),
        Action::VolumeUp => {
            shared.engine.borrow_mut().step_volume(constants::VOLUME_STEP);
            shared.sync_volume_slider();
        }
        Action::VolumeDown => {
            shared
                .engine
                .borrow_mut()
                .step_volume(-constants::VOLUME_STEP);
            shared.sync_volume_slider();
        }
        Action::ToggleVideo => {
            let enabled = shared.video.borrow_mut().toggle();
            let engine = shared.engine.borrow();
            prefs::save_video_enabled(engine.store(), enabled);
        }
        Action::ToggleFx => {
            let fx = shared.fx.borrow_mut().toggle();
            let engine = shared.engine.borrow();
            prefs::save_fx(engine.store(), fx);
        }
        Action::ToggleShortcuts => overlay::toggle(&shared.document, overlay::SHORTCUTS_ID),
        Action::ResetPrefs => {
            let engine = shared.engine.borrow();
            storage::reset_preferences(engine.store());
        }
        Action::CloseOverlays => {
            overlay::hide(&shared.document, overlay::SHORTCUTS_ID);
            overlay::hide(&shared.document, overlay::INSTRUCTIONS_ID);
        }
    }
}
