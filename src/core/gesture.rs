// Pointer/touch gesture decoding: tap zones, double tap, swipes.
//
// All decoding is pure over (x, y, time) samples so it can be tested
// host-side; the web wiring feeds it raw event coordinates.

use super::constants::{
    DOUBLE_TAP_MS, SWIPE_THRESHOLD_PX, TAP_ZONE_FRACTION, VOLUME_SWIPE_ACTIVATE_PX,
    VOLUME_SWIPE_RANGE_PX,
};

/// Where a tap landed: outer 20% bands navigate, the center toggles the
/// controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapZone {
    Left,
    Center,
    Right,
}

#[inline]
pub fn classify_tap(x: f32, viewport_width: f32) -> TapZone {
    if viewport_width <= 0.0 {
        return TapZone::Center;
    }
    let frac = x / viewport_width;
    if frac < TAP_ZONE_FRACTION {
        TapZone::Left
    } else if frac > 1.0 - TAP_ZONE_FRACTION {
        TapZone::Right
    } else {
        TapZone::Center
    }
}

/// Two taps within the window count as a double tap; the second tap
/// resolves immediately and resets the detector.
#[derive(Default)]
pub struct DoubleTapDetector {
    last_tap_ms: Option<f64>,
}

impl DoubleTapDetector {
    pub fn tap(&mut self, now_ms: f64) -> bool {
        match self.last_tap_ms {
            Some(prev) if now_ms - prev <= DOUBLE_TAP_MS => {
                self.last_tap_ms = None;
                true
            }
            _ => {
                self.last_tap_ms = Some(now_ms);
                false
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeGesture {
    Left,
    Right,
}

/// Horizontal swipe tracker: resolves on release, ignoring short or
/// vertically-dominated drags.
#[derive(Default)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Drop the in-progress gesture without resolving it.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn end(&mut self, x: f32, y: f32) -> Option<SwipeGesture> {
        let (sx, sy) = self.start.take()?;
        let dx = x - sx;
        let dy = y - sy;
        if dx.abs() < SWIPE_THRESHOLD_PX || dy.abs() > dx.abs() {
            return None;
        }
        Some(if dx > 0.0 {
            SwipeGesture::Right
        } else {
            SwipeGesture::Left
        })
    }
}

/// Vertical-drag volume control. Activates after 20 px of clearly vertical
/// travel, then maps further travel linearly onto [0, 1] relative to the
/// volume captured at touch start (upward drag raises volume).
#[derive(Default)]
pub struct VolumeSwipeTracker {
    start: Option<(f32, f32)>,
    start_volume: f32,
    active: bool,
}

impl VolumeSwipeTracker {
    pub fn begin(&mut self, x: f32, y: f32, current_volume: f32) {
        self.start = Some((x, y));
        self.start_volume = current_volume;
        self.active = false;
    }

    /// Returns the new volume once the gesture is active; `None` while the
    /// drag is still ambiguous. The first activating move also reports
    /// `activated = true` so the UI can surface a volume indicator.
    pub fn update(&mut self, x: f32, y: f32) -> Option<(f32, bool)> {
        let (sx, sy) = self.start?;
        let dy = sy - y; // upward is positive
        let dx = x - sx;
        if !self.active {
            if dy.abs() > VOLUME_SWIPE_ACTIVATE_PX && dy.abs() > dx.abs() * 2.0 {
                self.active = true;
                let volume = (self.start_volume + dy / VOLUME_SWIPE_RANGE_PX).clamp(0.0, 1.0);
                return Some((volume, true));
            }
            return None;
        }
        let volume = (self.start_volume + dy / VOLUME_SWIPE_RANGE_PX).clamp(0.0, 1.0);
        Some((volume, false))
    }

    pub fn end(&mut self) {
        self.start = None;
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
