// Host-side tests for the FX simulations and selection gating.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod fx {
    include!("../src/core/fx.rs");
}

use constants::{FIREFLY_COUNT, ORB_COUNT, PARTICLE_COUNT};
use fx::{BokehSim, FirefliesSim, FxId, FxSelection, ParticlesSim};
use std::time::Duration;

const DT: Duration = Duration::from_millis(16);

#[test]
fn ensembles_have_their_fixed_sizes() {
    assert_eq!(BokehSim::new(800.0, 600.0, 1).orbs().len(), ORB_COUNT);
    assert_eq!(
        FirefliesSim::new(800.0, 600.0, 1).fireflies().len(),
        FIREFLY_COUNT
    );
    assert_eq!(
        ParticlesSim::new(800.0, 600.0, 1).particles().len(),
        PARTICLE_COUNT
    );
}

#[test]
fn the_same_seed_reproduces_the_same_ensemble() {
    let a = BokehSim::new(800.0, 600.0, 42);
    let b = BokehSim::new(800.0, 600.0, 42);
    for (x, y) in a.orbs().iter().zip(b.orbs()) {
        assert_eq!(x.pos, y.pos);
        assert_eq!(x.size, y.size);
    }
    let c = BokehSim::new(800.0, 600.0, 43);
    assert!(a.orbs().iter().zip(c.orbs()).any(|(x, y)| x.pos != y.pos));
}

#[test]
fn orbs_are_sorted_small_to_large_for_layering() {
    let sim = BokehSim::new(800.0, 600.0, 7);
    let sizes: Vec<f32> = sim.orbs().iter().map(|o| o.size).collect();
    assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn orbs_wrap_instead_of_escaping() {
    let mut sim = BokehSim::new(200.0, 150.0, 5);
    for _ in 0..10_000 {
        sim.step(DT);
    }
    for orb in sim.orbs() {
        let half = orb.size / 2.0;
        assert!(orb.pos.x >= -half - 1.0 && orb.pos.x <= 200.0 + half + 1.0);
        assert!(orb.pos.y >= -half - 1.0 && orb.pos.y <= 150.0 + half + 1.0);
    }
}

#[test]
fn resize_recreates_the_ensemble_inside_the_new_bounds() {
    let mut sim = FirefliesSim::new(2000.0, 1500.0, 9);
    sim.resize(100.0, 80.0);
    for f in sim.fireflies() {
        assert!(f.pos.x >= 0.0 && f.pos.x <= 100.0);
        assert!(f.pos.y >= 0.0 && f.pos.y <= 80.0);
    }
}

#[test]
fn firefly_targets_stay_inside_the_bounds() {
    let mut sim = FirefliesSim::new(300.0, 200.0, 11);
    for _ in 0..5_000 {
        sim.step(DT);
    }
    for f in sim.fireflies() {
        assert!(f.target.x >= 0.0 && f.target.x <= 300.0);
        assert!(f.target.y >= 0.0 && f.target.y <= 200.0);
        assert!(f.glow() >= 0.0 && f.glow() <= 1.0);
    }
}

#[test]
fn particles_drift_up_and_respawn_at_the_bottom() {
    let mut sim = ParticlesSim::new(300.0, 200.0, 13);
    for _ in 0..20_000 {
        sim.step(DT);
    }
    for p in sim.particles() {
        assert!(p.pos.y >= -10.5, "escaped off the top: {}", p.pos.y);
        assert!(p.vel.y < 0.0);
    }
}

#[test]
fn fx_ids_round_trip_through_strings() {
    for fx in [FxId::None, FxId::Bokeh, FxId::Fireflies, FxId::Particles] {
        assert_eq!(FxId::parse(fx.as_str()), Some(fx));
    }
    assert_eq!(FxId::parse("sparkles"), None);
}

#[test]
fn reduced_motion_suppresses_rendering_but_keeps_the_choice() {
    let mut sel = FxSelection::new(FxId::Fireflies, false);
    assert_eq!(sel.active(), FxId::Fireflies);

    sel.set_reduced_motion(true);
    assert_eq!(sel.active(), FxId::None);
    assert_eq!(sel.selected(), FxId::Fireflies);

    sel.set_reduced_motion(false);
    assert_eq!(sel.active(), FxId::Fireflies);
}

#[test]
fn toggle_flips_between_none_and_particles() {
    let mut sel = FxSelection::default();
    assert_eq!(sel.toggle(), FxId::Particles);
    assert_eq!(sel.toggle(), FxId::None);

    let mut sel = FxSelection::new(FxId::Bokeh, false);
    assert_eq!(sel.toggle(), FxId::None);
}
