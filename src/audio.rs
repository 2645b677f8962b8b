//! WebAudio backend for the ambient engine.
//!
//! Each handle is an `<audio>` element routed through its own `GainNode`
//! into the shared `AudioContext` destination. Crossfades are linear gain
//! ramps; releases are scheduled with `setTimeout` so a fading-out track
//! keeps sounding until the ramp lands on zero.

use crate::core::ambient::{AudioBackend, AudioError, AudioSignal};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct WebAudioHandle {
    element: web::HtmlAudioElement,
    source: web::MediaElementAudioSourceNode,
    gain: web::GainNode,
}

impl WebAudioHandle {
    /// Stop playback and detach from the graph. Consumes the handle so a
    /// released resource can never produce sound again.
    fn shutdown(self) {
        _ = self.element.pause();
        self.element.set_src("");
        self.source.disconnect().ok();
        self.gain.disconnect().ok();
    }
}

pub struct WebAudioBackend {
    ctx: web::AudioContext,
    signals: Rc<RefCell<Vec<AudioSignal>>>,
}

impl WebAudioBackend {
    pub fn new() -> Result<Self, AudioError> {
        let ctx = web::AudioContext::new().map_err(|e| {
            log::error!("AudioContext error: {:?}", e);
            AudioError::Load {
                src: "<audio context>".to_string(),
            }
        })?;
        Ok(Self {
            ctx,
            signals: Rc::new(RefCell::new(Vec::new())),
        })
    }

    /// Resume the context after a user gesture (autoplay policy).
    pub fn resume(&self) {
        _ = self.ctx.resume();
    }

    fn push_signal(signals: &Rc<RefCell<Vec<AudioSignal>>>, signal: AudioSignal) {
        signals.borrow_mut().push(signal);
    }

    fn wire_element_events(&self, element: &web::HtmlAudioElement, id: &str) {
        let signals = self.signals.clone();
        let id_err = id.to_string();
        let on_error = Closure::wrap(Box::new(move |_ev: web::Event| {
            Self::push_signal(&signals, AudioSignal::LoadFailed(id_err.clone()));
        }) as Box<dyn FnMut(_)>);
        _ = element.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_error.forget();

        let signals = self.signals.clone();
        let id_ok = id.to_string();
        let on_ready = Closure::wrap(Box::new(move |_ev: web::Event| {
            Self::push_signal(&signals, AudioSignal::Loaded(id_ok.clone()));
        }) as Box<dyn FnMut(_)>);
        _ = element
            .add_event_listener_with_callback("canplaythrough", on_ready.as_ref().unchecked_ref());
        on_ready.forget();
    }

    fn now(&self) -> f64 {
        self.ctx.current_time()
    }
}

impl AudioBackend for WebAudioBackend {
    type Handle = WebAudioHandle;

    fn load(&mut self, id: &str, src: &str) -> Result<WebAudioHandle, AudioError> {
        let element = web::HtmlAudioElement::new_with_src(src).map_err(|e| {
            log::error!("audio element error: {:?}", e);
            AudioError::Load {
                src: src.to_string(),
            }
        })?;
        element.set_loop(true);
        element.set_preload("auto");
        self.wire_element_events(&element, id);

        let source = self
            .ctx
            .create_media_element_source(&element)
            .map_err(|e| {
                log::error!("media source error: {:?}", e);
                AudioError::Load {
                    src: src.to_string(),
                }
            })?;
        let gain = web::GainNode::new(&self.ctx).map_err(|e| {
            log::error!("GainNode error: {:?}", e);
            AudioError::Load {
                src: src.to_string(),
            }
        })?;
        gain.gain().set_value(0.0);
        _ = source.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&self.ctx.destination());

        Ok(WebAudioHandle {
            element,
            source,
            gain,
        })
    }

    fn play(&mut self, handle: &WebAudioHandle) -> Result<(), AudioError> {
        let id = handle.element.src();
        match handle.element.play() {
            Ok(promise) => {
                // Autoplay refusals surface as a rejected promise; report
                // them through the signal queue rather than failing here.
                let signals = self.signals.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if JsFuture::from(promise).await.is_err() {
                        Self::push_signal(&signals, AudioSignal::PlayFailed(id));
                    }
                });
                Ok(())
            }
            Err(e) => {
                log::error!("play() error: {:?}", e);
                Err(AudioError::PlaybackStart {
                    id: handle.element.src(),
                })
            }
        }
    }

    fn fade(&mut self, handle: &WebAudioHandle, to: f32, duration_ms: u32) {
        let gain = handle.gain.gain();
        let now = self.now();
        let current = gain.value();
        _ = gain.cancel_scheduled_values(now);
        _ = gain.set_value_at_time(current, now);
        _ = gain.linear_ramp_to_value_at_time(to, now + duration_ms as f64 / 1000.0);
    }

    fn set_gain(&mut self, handle: &WebAudioHandle, value: f32) {
        let gain = handle.gain.gain();
        _ = gain.cancel_scheduled_values(self.now());
        gain.set_value(value);
    }

    fn release(&mut self, handle: WebAudioHandle, after_ms: u32) {
        let cb = Closure::once_into_js(move || {
            handle.shutdown();
        });
        if let Some(window) = web::window() {
            if window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.unchecked_ref(),
                    after_ms as i32,
                )
                .is_err()
            {
                log::error!("failed to schedule audio release");
            }
        }
    }

    fn release_now(&mut self, handle: WebAudioHandle) {
        handle.shutdown();
    }

    fn take_signals(&mut self) -> Vec<AudioSignal> {
        std::mem::take(&mut *self.signals.borrow_mut())
    }
}
