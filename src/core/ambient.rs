// Ambient audio engine: a single-layer crossfade state machine.
//
// The engine owns at most one live audio resource. Changing sounds fades
// the outgoing resource to zero and the incoming one up to the effective
// volume over the same 300 ms window, so transitions overlap instead of
// gapping. All platform access goes through [`AudioBackend`], which keeps
// the state machine host-testable; persistence goes through
// [`KeyValueStore`].

use super::catalog::{ambient_by_id, SOUND_NONE};
use super::constants::{CROSSFADE_MS, DEFAULT_RESUME_SOUND};
use super::prefs::{self, KeyValueStore};

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("failed to load audio source {src}")]
    Load { src: String },
    #[error("playback start refused for {id}")]
    PlaybackStart { id: String },
}

/// Asynchronous failure notifications from the backend, delivered to
/// [`AmbientEngine::handle_signal`] by whoever pumps the backend queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioSignal {
    Loaded(String),
    LoadFailed(String),
    PlayFailed(String),
}

/// Platform seam for the engine. Handles are exclusively owned by the
/// engine; `release` consumes them so a released resource can never be
/// touched again.
pub trait AudioBackend {
    type Handle;

    /// Construct a looping resource at gain zero. May fail synchronously;
    /// asynchronous failures arrive later as [`AudioSignal::LoadFailed`]
    /// tagged with `id`.
    fn load(&mut self, id: &str, src: &str) -> Result<Self::Handle, AudioError>;
    fn play(&mut self, handle: &Self::Handle) -> Result<(), AudioError>;
    /// Timed linear gain ramp from the resource's current level.
    fn fade(&mut self, handle: &Self::Handle, to: f32, duration_ms: u32);
    /// Instantaneous gain change (slider drags rely on UI-side smoothing).
    fn set_gain(&mut self, handle: &Self::Handle, gain: f32);
    /// Schedule stop-and-drop once a fade-out has finished.
    fn release(&mut self, handle: Self::Handle, after_ms: u32);
    /// Stop and drop immediately, skipping any fade.
    fn release_now(&mut self, handle: Self::Handle);
    /// Drain queued asynchronous signals.
    fn take_signals(&mut self) -> Vec<AudioSignal>;
}

pub struct AmbientEngine<B: AudioBackend, S: KeyValueStore> {
    backend: B,
    store: S,
    current: String,
    previous: String,
    volume: f32,
    muted: bool,
    volume_before_mute: f32,
    active: Option<B::Handle>,
}

impl<B: AudioBackend, S: KeyValueStore> AmbientEngine<B, S> {
    /// Restore sound and volume from the store; unparseable or unknown
    /// persisted values silently fall back to defaults.
    pub fn new(backend: B, store: S) -> Self {
        let volume = prefs::load_volume(&store);
        let initial = prefs::load_sound(&store);
        let mut engine = Self {
            backend,
            store,
            current: SOUND_NONE.to_string(),
            previous: SOUND_NONE.to_string(),
            volume,
            muted: false,
            volume_before_mute: volume,
            active: None,
        };
        if initial != SOUND_NONE {
            engine.set_current_sound(&initial);
        }
        engine
    }

    pub fn current_sound(&self) -> &str {
        &self.current
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Derived: audible whenever a real sound is selected.
    pub fn is_playing(&self) -> bool {
        self.current != SOUND_NONE
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Begin fading out whatever is active and schedule its release. Always
    /// called before a new resource starts, so at most one resource is ever
    /// audible past the crossfade window.
    fn fade_out_active(&mut self) {
        if let Some(handle) = self.active.take() {
            self.backend.fade(&handle, 0.0, CROSSFADE_MS);
            self.backend.release(handle, CROSSFADE_MS);
        }
    }

    /// Switch to a new ambient sound with a 300 ms crossfade. A call that
    /// lands mid-crossfade supersedes it: the still-fading-in resource is
    /// faded back out like any other.
    pub fn set_current_sound(&mut self, id: &str) {
        if id == self.current {
            return;
        }
        self.fade_out_active();

        let sound = match ambient_by_id(id) {
            Some(s) => s,
            None => {
                log::error!("[ambient] unknown sound id {id:?}, falling back to none");
                self.current = SOUND_NONE.to_string();
                prefs::save_sound(&self.store, SOUND_NONE);
                return;
            }
        };

        let Some(src) = sound.src else {
            self.current = SOUND_NONE.to_string();
            prefs::save_sound(&self.store, SOUND_NONE);
            return;
        };

        let handle = match self.backend.load(sound.id, src) {
            Ok(h) => h,
            Err(e) => {
                log::error!("[ambient] {e}");
                self.current = SOUND_NONE.to_string();
                prefs::save_sound(&self.store, SOUND_NONE);
                return;
            }
        };

        // Playback refusal (autoplay policy) is non-fatal: the sound stays
        // selected so a later user gesture can retry via restart_current.
        match self.backend.play(&handle) {
            Ok(()) => {
                self.backend.fade(&handle, self.effective_volume(), CROSSFADE_MS);
                self.active = Some(handle);
            }
            Err(e) => {
                log::error!("[ambient] {e}");
                self.backend.release_now(handle);
            }
        }

        self.current = sound.id.to_string();
        prefs::save_sound(&self.store, sound.id);
        log::info!("[ambient] now playing {}", sound.name);
    }

    /// Store and persist the volume as given (any finite number is
    /// tolerated) and apply it to the live resource when audible.
    pub fn set_volume(&mut self, volume: f32) {
        if !volume.is_finite() {
            return;
        }
        self.volume = volume;
        prefs::save_volume(&self.store, volume);
        if !self.muted {
            if let Some(handle) = &self.active {
                self.backend.set_gain(handle, volume);
            }
        }
    }

    pub fn step_volume(&mut self, delta: f32) {
        let v = (self.volume + delta).clamp(0.0, 1.0);
        self.set_volume(v);
    }

    /// Mute forces the live gain to zero and remembers the pre-mute volume;
    /// unmute restores exactly that remembered level. The `volume` field
    /// itself is untouched.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if self.muted {
            self.volume_before_mute = self.volume;
            if let Some(handle) = &self.active {
                self.backend.set_gain(handle, 0.0);
            }
        } else if let Some(handle) = &self.active {
            self.backend.set_gain(handle, self.volume_before_mute);
        }
        log::info!(
            "[ambient] {}",
            if self.muted { "muted" } else { "unmuted" }
        );
    }

    /// Pause/resume sugar over `set_current_sound`. Pause remembers the
    /// sound and fades to silence; resume restores it, defaulting to the
    /// first real catalog entry when nothing was remembered.
    pub fn toggle_play(&mut self) {
        if self.current != SOUND_NONE {
            self.previous = self.current.clone();
            self.set_current_sound(SOUND_NONE);
        } else {
            let resume = if self.previous != SOUND_NONE {
                self.previous.clone()
            } else {
                DEFAULT_RESUME_SOUND.to_string()
            };
            self.set_current_sound(&resume);
        }
    }

    /// Retry a selected-but-silent sound, typically after the first user
    /// gesture unlocks playback. No-op when audio is already live.
    pub fn restart_current(&mut self) {
        if self.active.is_none() && self.current != SOUND_NONE {
            let id = std::mem::replace(&mut self.current, SOUND_NONE.to_string());
            self.set_current_sound(&id);
        }
    }

    /// Drain backend signals and apply them to the state machine.
    pub fn pump(&mut self) {
        for signal in self.backend.take_signals() {
            self.handle_signal(signal);
        }
    }

    /// Single decision point for asynchronous backend outcomes. A stale
    /// failure (for a sound no longer selected) changes nothing.
    pub fn handle_signal(&mut self, signal: AudioSignal) {
        match signal {
            AudioSignal::Loaded(id) => {
                log::info!("[ambient] loaded {id}");
            }
            AudioSignal::LoadFailed(id) => {
                log::error!("[ambient] failed to load {id}");
                if id == self.current {
                    self.set_current_sound(SOUND_NONE);
                }
            }
            AudioSignal::PlayFailed(id) => {
                log::error!("[ambient] playback error for {id}");
            }
        }
    }

    /// Release the live resource immediately. Used on every exit path;
    /// leaves the engine silent but otherwise consistent.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.active.take() {
            self.backend.release_now(handle);
        }
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<B: AudioBackend, S: KeyValueStore> Drop for AmbientEngine<B, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
