// Timing, audio and gesture tuning constants shared by the core modules.

// Crossfade window for ambient sound changes (milliseconds)
pub const CROSSFADE_MS: u32 = 300;

// Scene auto-advance interval
pub const SCENE_DURATION_MS: u64 = 120_000;

// Idle countdown before the controls hide
pub const IDLE_TIMEOUT_MS: u64 = 3_000;

// Volume defaults
pub const DEFAULT_VOLUME: f32 = 0.7;
pub const VOLUME_STEP: f32 = 0.1;

// Sound resumed by toggle_play when nothing was remembered
pub const DEFAULT_RESUME_SOUND: &str = "rain-light";

// FX ensemble sizes
pub const ORB_COUNT: usize = 20;
pub const FIREFLY_COUNT: usize = 35;
pub const PARTICLE_COUNT: usize = 60;

// Bokeh orb size range (css px)
pub const ORB_MIN_SIZE: f32 = 40.0;
pub const ORB_MAX_SIZE: f32 = 160.0;

// Per-step chance that a firefly picks a new wander target
pub const FIREFLY_RETARGET_CHANCE: f32 = 0.005;

// Reference frame rate the simulations were tuned at; step(dt) scales
// motion by dt relative to this.
pub const FX_REFERENCE_FPS: f32 = 60.0;

// Tap zones: outer fraction of the viewport width that navigates
pub const TAP_ZONE_FRACTION: f32 = 0.2;

// Double-tap window (milliseconds)
pub const DOUBLE_TAP_MS: f64 = 300.0;

// Horizontal swipe: minimum travel before a navigation fires (css px)
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

// Volume swipe: vertical travel mapping to the full [0,1] range, and the
// activation gate before a drag is treated as a volume gesture
pub const VOLUME_SWIPE_RANGE_PX: f32 = 500.0;
pub const VOLUME_SWIPE_ACTIVATE_PX: f32 = 20.0;
