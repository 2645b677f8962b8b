//! Per-frame driver: steps the FX simulation, ticks the idle and
//! auto-advance countdowns, pumps audio signals, and keeps the visible
//! scene synced to the ambient engine.

use crate::audio::WebAudioBackend;
use crate::core::fx::{BokehSim, FirefliesSim, FxId, FxSelection, ParticlesSim};
use crate::core::idle::{IdleDetector, IdleTransition};
use crate::core::video::VideoMode;
use crate::core::{catalog, AmbientEngine, SceneNavigator};
use crate::storage::LocalStore;
use crate::{dom, media, overlay, render};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Engine = AmbientEngine<WebAudioBackend, LocalStore>;

/// The one active overlay simulation, if any.
pub enum ActiveSim {
    Bokeh(BokehSim),
    Fireflies(FirefliesSim),
    Particles(ParticlesSim),
}

impl ActiveSim {
    fn create(kind: FxId, width: f32, height: f32) -> Option<ActiveSim> {
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        match kind {
            FxId::None => None,
            FxId::Bokeh => Some(ActiveSim::Bokeh(BokehSim::new(width, height, seed))),
            FxId::Fireflies => Some(ActiveSim::Fireflies(FirefliesSim::new(width, height, seed))),
            FxId::Particles => Some(ActiveSim::Particles(ParticlesSim::new(width, height, seed))),
        }
    }

    fn kind(&self) -> FxId {
        match self {
            ActiveSim::Bokeh(_) => FxId::Bokeh,
            ActiveSim::Fireflies(_) => FxId::Fireflies,
            ActiveSim::Particles(_) => FxId::Particles,
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        match self {
            ActiveSim::Bokeh(s) => s.resize(width, height),
            ActiveSim::Fireflies(s) => s.resize(width, height),
            ActiveSim::Particles(s) => s.resize(width, height),
        }
    }

    fn step(&mut self, dt: Duration) {
        match self {
            ActiveSim::Bokeh(s) => s.step(dt),
            ActiveSim::Fireflies(s) => s.step(dt),
            ActiveSim::Particles(s) => s.step(dt),
        }
    }

    fn draw(&self, ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) {
        match self {
            ActiveSim::Bokeh(s) => render::draw_bokeh(ctx, canvas, s),
            ActiveSim::Fireflies(s) => render::draw_fireflies(ctx, canvas, s),
            ActiveSim::Particles(s) => render::draw_particles(ctx, canvas, s),
        }
    }
}

pub struct FrameContext {
    pub engine: Rc<RefCell<Engine>>,
    pub navigator: Rc<RefCell<SceneNavigator>>,
    pub fx: Rc<RefCell<FxSelection>>,
    pub video: Rc<RefCell<VideoMode>>,
    pub idle: Rc<RefCell<IdleDetector>>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,

    pub sim: Option<ActiveSim>,
    pub last_instant: Instant,
    pub last_sound: String,
    pub last_scene: Option<usize>,
    pub last_video_on: bool,
    pub last_playing: Option<bool>,
    pub last_muted: Option<bool>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        // Deliver asynchronous audio outcomes to the state machine first so
        // this frame sees the settled truth.
        self.engine.borrow_mut().pump();

        self.follow_engine();
        _ = self.navigator.borrow_mut().tick(dt);
        self.apply_scene_if_changed();

        if let Some(IdleTransition::BecameIdle) = self.idle.borrow_mut().tick(dt) {
            overlay::hide(&self.document, overlay::CONTROLS_ID);
        }

        self.reconcile_fx();
        self.resize_if_needed();
        if let Some(sim) = &mut self.sim {
            sim.step(dt);
            sim.draw(&self.ctx2d, &self.canvas);
        }
    }

    /// Mirror engine state: scene sync on sound changes, control-bar
    /// play/mute attributes.
    fn follow_engine(&mut self) {
        let (sound, playing, muted) = {
            let engine = self.engine.borrow();
            (
                engine.current_sound().to_string(),
                engine.is_playing(),
                engine.is_muted(),
            )
        };
        if sound != self.last_sound {
            self.navigator.borrow_mut().sync_to_sound(&sound);
            self.last_sound = sound;
        }
        if self.last_playing != Some(playing) || self.last_muted != Some(muted) {
            overlay::set_playback_state(&self.document, playing, muted);
            self.last_playing = Some(playing);
            self.last_muted = Some(muted);
        }
    }

    fn apply_scene_if_changed(&mut self) {
        let index = self.navigator.borrow().current_index();
        let video = *self.video.borrow();
        let video_on = video.should_show_video(index);
        if self.last_scene == Some(index) && self.last_video_on == video_on {
            return;
        }
        if let Some(scene) = catalog::scene_at(index) {
            media::apply_scene(&self.document, scene, index, &video);
            overlay::set_scene_indicator(&self.document, scene.name, index, catalog::scene_count());
        }
        self.last_scene = Some(index);
        self.last_video_on = video_on;
    }

    /// Keep the live simulation matched to the effective FX selection
    /// (reduced motion forces none without touching the stored choice).
    fn reconcile_fx(&mut self) {
        let desired = self.fx.borrow().active();
        let current = self.sim.as_ref().map(|s| s.kind()).unwrap_or(FxId::None);
        if desired == current {
            return;
        }
        self.sim = ActiveSim::create(
            desired,
            self.canvas.width() as f32,
            self.canvas.height() as f32,
        );
        if self.sim.is_none() {
            self.ctx2d.clear_rect(
                0.0,
                0.0,
                self.canvas.width() as f64,
                self.canvas.height() as f64,
            );
        }
    }

    /// On viewport changes the backing store is resynced and the ensemble
    /// recreated at the new dimensions (no position migration).
    fn resize_if_needed(&mut self) {
        let (prev_w, prev_h) = (self.canvas.width(), self.canvas.height());
        dom::sync_canvas_backing_size(&self.canvas);
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if (w, h) != (prev_w, prev_h) {
            if let Some(sim) = &mut self.sim {
                sim.resize(w as f32, h as f32);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
