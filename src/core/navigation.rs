// Scene navigation: index, manual override, and sound synchronization.
//
// While no manual override is active, the visible scene follows the
// ambient engine's current sound (first matching scene in catalog order;
// cycling within one sound group is done manually with left/right). Any
// direct navigation suspends the sync until a sound is explicitly chosen
// again.

use super::catalog::{scene_count, scene_index_for_sound, scene_indices_for_sound};
use super::constants::SCENE_DURATION_MS;
use smallvec::SmallVec;
use std::time::Duration;

pub struct SceneNavigator {
    current_index: usize,
    manual_override: bool,
    auto_elapsed: Duration,
}

impl Default for SceneNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneNavigator {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            manual_override: false,
            auto_elapsed: Duration::ZERO,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn manual_override(&self) -> bool {
        self.manual_override
    }

    /// Advance to the next scene, wrapping. Marks the override and restarts
    /// the auto-advance interval.
    pub fn next(&mut self) {
        self.manual_override = true;
        self.auto_elapsed = Duration::ZERO;
        self.current_index = (self.current_index + 1) % scene_count();
    }

    /// Retreat to the previous scene, wrapping.
    pub fn previous(&mut self) {
        self.manual_override = true;
        self.auto_elapsed = Duration::ZERO;
        let n = scene_count();
        self.current_index = (self.current_index + n - 1) % n;
    }

    /// Follow the engine's sound while no override is active. Picks the
    /// first matching scene deterministically; no-op when the catalog has
    /// no scene for this sound.
    pub fn sync_to_sound(&mut self, sound_id: &str) {
        if self.manual_override {
            return;
        }
        if let Some(index) = scene_index_for_sound(sound_id) {
            self.current_index = index;
        }
    }

    /// Called from the sound selector before delegating to the engine, so
    /// the next sync re-establishes automatic following.
    pub fn select_sound(&mut self) {
        self.manual_override = false;
    }

    /// Accumulate frame time; fires `next()` every two minutes. Returns
    /// true when the scene advanced.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.auto_elapsed += dt;
        if self.auto_elapsed >= Duration::from_millis(SCENE_DURATION_MS) {
            self.next();
            return true;
        }
        false
    }

    /// Scene indices sharing the current scene's sound group.
    pub fn group_indices(&self, sound_id: &str) -> SmallVec<[usize; 4]> {
        scene_indices_for_sound(sound_id)
    }
}
