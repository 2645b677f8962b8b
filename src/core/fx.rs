// Decorative FX overlays: three independent particle simulations.
//
// Each simulation owns a fixed-size ensemble of records, recreated from
// scratch on resize. `step(dt)` is pure numeric update over the ensemble;
// drawing happens elsewhere, so the update logic is testable without a
// canvas. Motion was tuned at 60 Hz and is scaled by the frame delta.

use super::constants::{
    FIREFLY_COUNT, FIREFLY_RETARGET_CHANCE, FX_REFERENCE_FPS, ORB_COUNT, ORB_MAX_SIZE,
    ORB_MIN_SIZE, PARTICLE_COUNT,
};
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

/// Which overlay is selected. Exactly one (or none) renders at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FxId {
    #[default]
    None,
    Bokeh,
    Fireflies,
    Particles,
}

impl FxId {
    pub fn as_str(self) -> &'static str {
        match self {
            FxId::None => "none",
            FxId::Bokeh => "bokeh",
            FxId::Fireflies => "fireflies",
            FxId::Particles => "particles",
        }
    }

    pub fn parse(s: &str) -> Option<FxId> {
        match s {
            "none" => Some(FxId::None),
            "bokeh" => Some(FxId::Bokeh),
            "fireflies" => Some(FxId::Fireflies),
            "particles" => Some(FxId::Particles),
            _ => None,
        }
    }
}

/// Stored FX choice plus the live reduced-motion preference. The stored
/// selection survives a reduced-motion phase; only rendering is suppressed.
#[derive(Clone, Copy, Debug, Default)]
pub struct FxSelection {
    selected: FxId,
    reduced_motion: bool,
}

impl FxSelection {
    pub fn new(selected: FxId, reduced_motion: bool) -> Self {
        Self {
            selected,
            reduced_motion,
        }
    }

    pub fn selected(&self) -> FxId {
        self.selected
    }

    pub fn set_selected(&mut self, fx: FxId) {
        self.selected = fx;
    }

    /// Quick keyboard toggle between nothing and the dust particles.
    pub fn toggle(&mut self) -> FxId {
        self.selected = match self.selected {
            FxId::None => FxId::Particles,
            _ => FxId::None,
        };
        self.selected
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Effective overlay: forced to none while reduced motion is on.
    pub fn active(&self) -> FxId {
        if self.reduced_motion {
            FxId::None
        } else {
            self.selected
        }
    }
}

fn step_scale(dt: Duration) -> f32 {
    dt.as_secs_f32() * FX_REFERENCE_FPS
}

// ---------------- Bokeh ----------------

/// Warm-tinted color palette as (r, g, b); alpha is applied per draw.
pub const ORB_COLORS: &[(u8, u8, u8)] = &[
    (255, 200, 120),
    (255, 180, 100),
    (255, 220, 150),
    (255, 160, 80),
    (255, 240, 200),
];

#[derive(Clone, Debug)]
pub struct Orb {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: (u8, u8, u8),
    pub opacity: f32,
    pub pulse_offset: f32,
    pub pulse_speed: f32,
}

impl Orb {
    /// Current pulsed diameter: a gentle ±10% sinusoidal breathing.
    pub fn pulsed_size(&self, tick: f32) -> f32 {
        self.size * (1.0 + 0.1 * (tick * self.pulse_speed + self.pulse_offset).sin())
    }
}

pub struct BokehSim {
    width: f32,
    height: f32,
    tick: f32,
    rng: StdRng,
    orbs: Vec<Orb>,
}

impl BokehSim {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut sim = Self {
            width,
            height,
            tick: 0.0,
            rng: StdRng::seed_from_u64(seed),
            orbs: Vec::new(),
        };
        sim.populate();
        sim
    }

    fn populate(&mut self) {
        self.orbs = (0..ORB_COUNT)
            .map(|_| Orb {
                pos: Vec2::new(
                    self.rng.gen::<f32>() * self.width,
                    self.rng.gen::<f32>() * self.height,
                ),
                vel: Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * 0.25,
                    (self.rng.gen::<f32>() - 0.5) * 0.25,
                ),
                size: ORB_MIN_SIZE + self.rng.gen::<f32>() * (ORB_MAX_SIZE - ORB_MIN_SIZE),
                color: ORB_COLORS[self.rng.gen_range(0..ORB_COLORS.len())],
                opacity: 0.06 + self.rng.gen::<f32>() * 0.1,
                pulse_offset: self.rng.gen::<f32>() * std::f32::consts::TAU,
                pulse_speed: 0.004 + self.rng.gen::<f32>() * 0.008,
            })
            .collect();
        // Draw small orbs first so large ones layer on top
        self.orbs
            .sort_by(|a, b| a.size.total_cmp(&b.size));
    }

    /// Discard and recreate the ensemble at the new dimensions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    pub fn step(&mut self, dt: Duration) {
        let scale = step_scale(dt);
        self.tick += scale;
        for orb in &mut self.orbs {
            orb.pos += orb.vel * scale;
            let half = orb.size / 2.0;
            if orb.pos.x < -half {
                orb.pos.x = self.width + half;
            }
            if orb.pos.x > self.width + half {
                orb.pos.x = -half;
            }
            if orb.pos.y < -half {
                orb.pos.y = self.height + half;
            }
            if orb.pos.y > self.height + half {
                orb.pos.y = -half;
            }
        }
    }

    pub fn tick_count(&self) -> f32 {
        self.tick
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }
}

// ---------------- Fireflies ----------------

#[derive(Clone, Debug)]
pub struct Firefly {
    pub pos: Vec2,
    pub target: Vec2,
    pub size: f32,
    pub glow_radius: f32,
    pub phase: f32,
    pub phase_speed: f32,
    pub brightness: f32,
    pub hue: f32,
    pub speed: f32,
}

impl Firefly {
    /// Pulsing glow in [0, brightness]; negative sine halves are dark so
    /// each firefly fades fully out between blinks.
    pub fn glow(&self) -> f32 {
        self.phase.sin().max(0.0) * self.brightness
    }
}

pub struct FirefliesSim {
    width: f32,
    height: f32,
    rng: StdRng,
    fireflies: Vec<Firefly>,
}

impl FirefliesSim {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut sim = Self {
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
            fireflies: Vec::new(),
        };
        sim.populate();
        sim
    }

    fn populate(&mut self) {
        self.fireflies = (0..FIREFLY_COUNT)
            .map(|_| Firefly {
                pos: Vec2::new(
                    self.rng.gen::<f32>() * self.width,
                    self.rng.gen::<f32>() * self.height,
                ),
                target: Vec2::new(
                    self.rng.gen::<f32>() * self.width,
                    self.rng.gen::<f32>() * self.height,
                ),
                size: 1.5 + self.rng.gen::<f32>() * 2.0,
                glow_radius: 8.0 + self.rng.gen::<f32>() * 16.0,
                phase: self.rng.gen::<f32>() * std::f32::consts::TAU,
                phase_speed: 0.01 + self.rng.gen::<f32>() * 0.025,
                brightness: 0.5 + self.rng.gen::<f32>() * 0.5,
                hue: 40.0 + self.rng.gen::<f32>() * 25.0,
                speed: 0.3 + self.rng.gen::<f32>() * 0.7,
            })
            .collect();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    pub fn step(&mut self, dt: Duration) {
        let scale = step_scale(dt);
        let (w, h) = (self.width, self.height);
        for f in &mut self.fireflies {
            f.phase += f.phase_speed * scale;

            // Lazy steering toward the wander target
            let delta = f.target - f.pos;
            let dist = delta.length();
            if dist > 1.0 {
                f.pos += delta / dist * f.speed * scale;
            }

            // Occasionally (or on arrival) pick a new nearby target,
            // clamped to the visible bounds
            if self.rng.gen::<f32>() < FIREFLY_RETARGET_CHANCE * scale || dist < 2.0 {
                f.target = Vec2::new(
                    (f.pos.x + (self.rng.gen::<f32>() - 0.5) * 300.0).clamp(0.0, w),
                    (f.pos.y + (self.rng.gen::<f32>() - 0.5) * 200.0).clamp(0.0, h),
                );
            }
        }
    }

    pub fn fireflies(&self) -> &[Firefly] {
        &self.fireflies
    }
}

// ---------------- Particles ----------------

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub pulse: f32,
    pub pulse_speed: f32,
}

impl Particle {
    /// Opacity modulated by a per-particle phase so the field shimmers
    /// instead of pulsing in lockstep.
    pub fn glow(&self) -> f32 {
        self.opacity * (0.6 + 0.4 * self.pulse.sin())
    }
}

pub struct ParticlesSim {
    width: f32,
    height: f32,
    rng: StdRng,
    particles: Vec<Particle>,
}

impl ParticlesSim {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut sim = Self {
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
            particles: Vec::new(),
        };
        sim.populate();
        sim
    }

    fn populate(&mut self) {
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                pos: Vec2::new(
                    self.rng.gen::<f32>() * self.width,
                    self.rng.gen::<f32>() * self.height,
                ),
                vel: Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * 0.3,
                    -0.1 - self.rng.gen::<f32>() * 0.3,
                ),
                size: 1.0 + self.rng.gen::<f32>() * 2.5,
                opacity: 0.2 + self.rng.gen::<f32>() * 0.5,
                pulse: self.rng.gen::<f32>() * std::f32::consts::TAU,
                pulse_speed: 0.005 + self.rng.gen::<f32>() * 0.015,
            })
            .collect();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    pub fn step(&mut self, dt: Duration) {
        let scale = step_scale(dt);
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.pulse += p.pulse_speed * scale;
            p.pos += p.vel * scale;

            // Drifted off the top: respawn along the bottom edge
            if p.pos.y < -10.0 {
                p.pos.y = h + 10.0;
                p.pos.x = self.rng.gen::<f32>() * w;
            }
            if p.pos.x < -10.0 {
                p.pos.x = w + 10.0;
            }
            if p.pos.x > w + 10.0 {
                p.pos.x = -10.0;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
