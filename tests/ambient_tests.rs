// Host-side tests for the ambient crossfade engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod catalog {
    include!("../src/core/catalog.rs");
}
mod fx {
    include!("../src/core/fx.rs");
}
mod prefs {
    include!("../src/core/prefs.rs");
}
mod ambient {
    include!("../src/core/ambient.rs");
}

use ambient::{AmbientEngine, AudioBackend, AudioError, AudioSignal};
use constants::{CROSSFADE_MS, DEFAULT_RESUME_SOUND, DEFAULT_VOLUME};
use prefs::KeyValueStore;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
struct MemStore {
    map: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }
    fn set(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }
    fn remove(&self, key: &str) {
        self.map.borrow_mut().remove(key);
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Load(String),
    Play(u32),
    Fade(u32, f32, u32),
    SetGain(u32, f32),
    Release(u32, u32),
    ReleaseNow(u32),
}

#[derive(Default)]
struct MockBackend {
    calls: Vec<Call>,
    next_handle: u32,
    live: Vec<u32>,
    fail_load_ids: Vec<String>,
    fail_play: bool,
    queued: Vec<AudioSignal>,
}

impl AudioBackend for MockBackend {
    type Handle = u32;

    fn load(&mut self, id: &str, src: &str) -> Result<u32, AudioError> {
        if self.fail_load_ids.iter().any(|f| f == id) {
            return Err(AudioError::Load {
                src: src.to_string(),
            });
        }
        let handle = self.next_handle;
        self.next_handle += 1;
        self.live.push(handle);
        self.calls.push(Call::Load(id.to_string()));
        Ok(handle)
    }

    fn play(&mut self, handle: &u32) -> Result<(), AudioError> {
        if self.fail_play {
            return Err(AudioError::PlaybackStart {
                id: handle.to_string(),
            });
        }
        self.calls.push(Call::Play(*handle));
        Ok(())
    }

    fn fade(&mut self, handle: &u32, to: f32, duration_ms: u32) {
        self.calls.push(Call::Fade(*handle, to, duration_ms));
    }

    fn set_gain(&mut self, handle: &u32, gain: f32) {
        self.calls.push(Call::SetGain(*handle, gain));
    }

    fn release(&mut self, handle: u32, after_ms: u32) {
        self.live.retain(|&h| h != handle);
        self.calls.push(Call::Release(handle, after_ms));
    }

    fn release_now(&mut self, handle: u32) {
        self.live.retain(|&h| h != handle);
        self.calls.push(Call::ReleaseNow(handle));
    }

    fn take_signals(&mut self) -> Vec<AudioSignal> {
        std::mem::take(&mut self.queued)
    }
}

fn engine_with(backend: MockBackend) -> AmbientEngine<MockBackend, MemStore> {
    AmbientEngine::new(backend, MemStore::default())
}

#[test]
fn starts_silent_with_empty_store() {
    let mut engine = engine_with(MockBackend::default());
    assert_eq!(engine.current_sound(), "none");
    assert!(!engine.is_playing());
    assert_eq!(engine.volume(), DEFAULT_VOLUME);
    assert!(engine.backend_mut().calls.is_empty());
}

#[test]
fn restores_persisted_sound_and_volume() {
    let store = MemStore::default();
    store.set(prefs::KEY_SOUND, "ocean-waves");
    store.set(prefs::KEY_VOLUME, "0.4");
    let mut engine = AmbientEngine::new(MockBackend::default(), store);

    assert_eq!(engine.current_sound(), "ocean-waves");
    assert_eq!(engine.volume(), 0.4);
    let calls = &engine.backend_mut().calls;
    assert_eq!(calls[0], Call::Load("ocean-waves".to_string()));
    assert_eq!(calls[1], Call::Play(0));
    assert_eq!(calls[2], Call::Fade(0, 0.4, CROSSFADE_MS));
}

#[test]
fn switching_crossfades_old_out_and_new_in() {
    let mut engine = engine_with(MockBackend::default());
    engine.set_current_sound("rain-light");
    engine.set_current_sound("ocean-waves");

    let calls = &engine.backend_mut().calls;
    assert!(calls.contains(&Call::Fade(0, 0.0, CROSSFADE_MS)));
    assert!(calls.contains(&Call::Release(0, CROSSFADE_MS)));
    assert!(calls.contains(&Call::Load("ocean-waves".to_string())));
    assert!(calls.contains(&Call::Fade(1, DEFAULT_VOLUME, CROSSFADE_MS)));
    assert_eq!(engine.current_sound(), "ocean-waves");
}

#[test]
fn selecting_the_current_sound_is_a_no_op() {
    let mut engine = engine_with(MockBackend::default());
    engine.set_current_sound("stream");
    let before = engine.backend_mut().calls.len();
    engine.set_current_sound("stream");
    assert_eq!(engine.backend_mut().calls.len(), before);
}

#[test]
fn rapid_switches_never_leave_two_resources_live() {
    let mut engine = engine_with(MockBackend::default());
    engine.set_current_sound("rain-light");
    engine.set_current_sound("ocean-waves");
    engine.set_current_sound("fireplace");

    // Every superseded handle was faded to zero and released
    let calls = &engine.backend_mut().calls;
    assert!(calls.contains(&Call::Fade(0, 0.0, CROSSFADE_MS)));
    assert!(calls.contains(&Call::Release(0, CROSSFADE_MS)));
    assert!(calls.contains(&Call::Fade(1, 0.0, CROSSFADE_MS)));
    assert!(calls.contains(&Call::Release(1, CROSSFADE_MS)));
    assert_eq!(engine.backend_mut().live, vec![2]);
}

#[test]
fn unknown_sound_falls_back_to_none() {
    let mut engine = engine_with(MockBackend::default());
    engine.set_current_sound("rain-light");
    engine.set_current_sound("volcano");
    assert_eq!(engine.current_sound(), "none");
    assert_eq!(engine.store().get(prefs::KEY_SOUND).as_deref(), Some("none"));
    assert!(engine.backend_mut().live.is_empty());
}

#[test]
fn load_failure_falls_back_to_none() {
    let backend = MockBackend {
        fail_load_ids: vec!["stream".to_string()],
        ..Default::default()
    };
    let mut engine = engine_with(backend);
    engine.set_current_sound("stream");
    assert_eq!(engine.current_sound(), "none");
    assert!(!engine.is_playing());
}

#[test]
fn play_refusal_keeps_selection_and_restart_retries() {
    let backend = MockBackend {
        fail_play: true,
        ..Default::default()
    };
    let mut engine = engine_with(backend);
    engine.set_current_sound("rain-light");

    // Selected but silent; the failed handle was dropped immediately
    assert_eq!(engine.current_sound(), "rain-light");
    assert!(engine.backend_mut().calls.contains(&Call::ReleaseNow(0)));
    assert!(engine.backend_mut().live.is_empty());

    engine.backend_mut().fail_play = false;
    engine.restart_current();
    assert_eq!(engine.current_sound(), "rain-light");
    assert!(engine.backend_mut().calls.contains(&Call::Play(1)));
    assert_eq!(engine.backend_mut().live, vec![1]);
}

#[test]
fn restart_is_a_no_op_while_audio_is_live() {
    let mut engine = engine_with(MockBackend::default());
    engine.set_current_sound("rain-light");
    let before = engine.backend_mut().calls.len();
    engine.restart_current();
    assert_eq!(engine.backend_mut().calls.len(), before);
}

#[test]
fn volume_changes_apply_and_persist() {
    let mut engine = engine_with(MockBackend::default());
    engine.set_current_sound("night");
    engine.set_volume(0.5);
    assert!(engine.backend_mut().calls.contains(&Call::SetGain(0, 0.5)));
    assert_eq!(engine.store().get(prefs::KEY_VOLUME).as_deref(), Some("0.5"));

    engine.set_volume(f32::NAN);
    assert_eq!(engine.volume(), 0.5);
}

#[test]
fn step_volume_clamps_to_unit_range() {
    let mut engine = engine_with(MockBackend::default());
    engine.step_volume(0.4);
    assert_eq!(engine.volume(), 1.0);
    for _ in 0..20 {
        engine.step_volume(-0.1);
    }
    assert_eq!(engine.volume(), 0.0);
}

#[test]
fn unmute_restores_the_exact_premute_volume() {
    let mut engine = engine_with(MockBackend::default());
    engine.set_current_sound("wind");
    engine.set_volume(0.33);

    engine.toggle_mute();
    assert!(engine.is_muted());
    assert!(engine.backend_mut().calls.contains(&Call::SetGain(0, 0.0)));

    engine.toggle_mute();
    assert!(!engine.is_muted());
    assert_eq!(engine.volume(), 0.33);
    assert!(engine.backend_mut().calls.contains(&Call::SetGain(0, 0.33)));
}

#[test]
fn volume_changes_while_muted_do_not_touch_the_gain() {
    let mut engine = engine_with(MockBackend::default());
    engine.set_current_sound("wind");
    engine.toggle_mute();
    let before = engine.backend_mut().calls.len();
    engine.set_volume(0.9);
    // Persisted but not applied; only the fade-in/set_gain history grows on unmute
    assert!(!engine.backend_mut().calls[before..].contains(&Call::SetGain(0, 0.9)));
}

#[test]
fn toggle_play_pauses_and_resumes_the_same_sound() {
    let mut engine = engine_with(MockBackend::default());
    engine.set_current_sound("ocean-waves");
    engine.toggle_play();
    assert_eq!(engine.current_sound(), "none");
    engine.toggle_play();
    assert_eq!(engine.current_sound(), "ocean-waves");
}

#[test]
fn toggle_play_from_fresh_silence_uses_the_default_sound() {
    let mut engine = engine_with(MockBackend::default());
    engine.toggle_play();
    assert_eq!(engine.current_sound(), DEFAULT_RESUME_SOUND);
}

#[test]
fn stale_load_failure_changes_nothing() {
    let mut engine = engine_with(MockBackend::default());
    engine.set_current_sound("rain-light");
    engine.handle_signal(AudioSignal::LoadFailed("ocean-waves".to_string()));
    assert_eq!(engine.current_sound(), "rain-light");
}

#[test]
fn load_failure_for_the_current_sound_silences_it() {
    let mut engine = engine_with(MockBackend::default());
    engine.set_current_sound("rain-light");
    engine.handle_signal(AudioSignal::LoadFailed("rain-light".to_string()));
    assert_eq!(engine.current_sound(), "none");
    assert!(engine.backend_mut().live.is_empty());
}

#[test]
fn pump_drains_the_backend_queue() {
    let mut engine = engine_with(MockBackend::default());
    engine.set_current_sound("handpan");
    engine
        .backend_mut()
        .queued
        .push(AudioSignal::LoadFailed("handpan".to_string()));
    engine.pump();
    assert_eq!(engine.current_sound(), "none");
    assert!(engine.backend_mut().queued.is_empty());
}

#[test]
fn dispose_releases_immediately() {
    let mut engine = engine_with(MockBackend::default());
    engine.set_current_sound("white-noise");
    engine.dispose();
    assert!(engine.backend_mut().calls.contains(&Call::ReleaseNow(0)));
    assert!(engine.backend_mut().live.is_empty());
}
