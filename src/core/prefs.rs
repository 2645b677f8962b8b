// Persisted preferences: flat string key-value entries, no versioning.
//
// Every entry is a single scalar that is independently readable and
// writable. Invalid persisted values are never an error; the default wins.

use super::catalog::{ambient_by_id, SOUND_NONE};
use super::constants::DEFAULT_VOLUME;
use super::fx::FxId;

pub const KEY_SOUND: &str = "ambient-sound";
pub const KEY_VOLUME: &str = "ambient-volume";
pub const KEY_VIDEO: &str = "video-enabled";
pub const KEY_FX: &str = "visual-fx";
pub const KEY_INSTRUCTIONS_SEEN: &str = "instructions-seen";

pub const ALL_KEYS: &[&str] = &[
    KEY_SOUND,
    KEY_VOLUME,
    KEY_VIDEO,
    KEY_FX,
    KEY_INSTRUCTIONS_SEEN,
];

/// Storage seam: localStorage on the web, a plain map in tests.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Persisted sound id, validated against the catalog.
pub fn load_sound(store: &impl KeyValueStore) -> String {
    match store.get(KEY_SOUND) {
        Some(id) if ambient_by_id(&id).is_some() => id,
        _ => SOUND_NONE.to_string(),
    }
}

pub fn save_sound(store: &impl KeyValueStore, id: &str) {
    store.set(KEY_SOUND, id);
}

/// Persisted volume; anything that does not parse to a finite float in
/// [0, 1] falls back to the default.
pub fn load_volume(store: &impl KeyValueStore) -> f32 {
    store
        .get(KEY_VOLUME)
        .and_then(|v| v.parse::<f32>().ok())
        .filter(|v| v.is_finite() && (0.0..=1.0).contains(v))
        .unwrap_or(DEFAULT_VOLUME)
}

pub fn save_volume(store: &impl KeyValueStore, volume: f32) {
    store.set(KEY_VOLUME, &volume.to_string());
}

pub fn load_video_enabled(store: &impl KeyValueStore) -> bool {
    store.get(KEY_VIDEO).as_deref() == Some("true")
}

pub fn save_video_enabled(store: &impl KeyValueStore, enabled: bool) {
    store.set(KEY_VIDEO, if enabled { "true" } else { "false" });
}

/// Persisted FX selection; unknown ids fall back to the default.
pub fn load_fx(store: &impl KeyValueStore) -> FxId {
    store
        .get(KEY_FX)
        .and_then(|v| FxId::parse(&v))
        .unwrap_or_default()
}

pub fn save_fx(store: &impl KeyValueStore, fx: FxId) {
    store.set(KEY_FX, fx.as_str());
}

pub fn load_instructions_seen(store: &impl KeyValueStore) -> bool {
    store.get(KEY_INSTRUCTIONS_SEEN).as_deref() == Some("true")
}

pub fn mark_instructions_seen(store: &impl KeyValueStore) {
    store.set(KEY_INSTRUCTIONS_SEEN, "true");
}

/// Clear every preference. The caller reloads the application afterwards so
/// all components come back up on defaults.
pub fn reset(store: &impl KeyValueStore) {
    for key in ALL_KEYS {
        store.remove(key);
    }
}
