// Video mode: whether a scene's looping video should replace its image.
//
// The enabled flag persists across reloads, but touch devices never show
// video regardless of it.

use super::catalog::scene_at;

#[derive(Clone, Copy, Debug)]
pub struct VideoMode {
    enabled: bool,
    is_touch: bool,
}

impl VideoMode {
    pub fn new(enabled: bool, is_touch: bool) -> Self {
        Self {
            enabled: enabled && !is_touch,
            is_touch,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_touch(&self) -> bool {
        self.is_touch
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn scene_has_video(&self, index: usize) -> bool {
        scene_at(index).map_or(false, |s| s.video.is_some())
    }

    /// Combined gate: enabled flag, touch capability, per-scene asset.
    pub fn should_show_video(&self, index: usize) -> bool {
        !self.is_touch && self.enabled && self.scene_has_video(index)
    }
}
