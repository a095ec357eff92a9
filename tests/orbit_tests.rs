// Host-side tests for the orbit model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod orbit {
    include!("../src/orbit.rs");
}

use constants::*;
use orbit::*;
use std::f32::consts::TAU;

#[test]
fn initial_phases_are_evenly_spaced() {
    let phases: Vec<f32> = (0..5).map(|i| initial_phase(i, 5)).collect();
    assert_eq!(phases[0], 0.0);
    for w in phases.windows(2) {
        assert!((w[1] - w[0] - TAU / 5.0).abs() < 1e-6);
    }
}

#[test]
fn initial_phase_with_no_entries_is_zero() {
    assert_eq!(initial_phase(0, 0), 0.0);
}

#[test]
fn phase_after_n_frames() {
    let o = OrbitState::new(1, 4, 1.5, 0.42);
    let start = o.phase;
    let after = o.advance(1000);
    let expected = start + 0.42 * ORBIT_STEP * 1000.0;
    assert!((after.phase - expected).abs() < 1e-5);
    assert_eq!(after.radius, 1.5);
    assert_eq!(after.speed, 0.42);
}

#[test]
fn stepping_one_frame_at_a_time_matches_a_single_advance() {
    let mut o = OrbitState::new(0, 3, 2.0, 0.5);
    for _ in 0..100 {
        o = o.advance(1);
    }
    let direct = OrbitState::new(0, 3, 2.0, 0.5).advance(100);
    assert!((o.phase - direct.phase).abs() < 1e-5);
}

#[test]
fn position_at_phase_zero_is_on_the_x_axis() {
    let p = orbit_position(0.0, 1.7);
    assert_eq!(p, glam::Vec3::new(1.7, 0.0, 0.0));
}

#[test]
fn horizontal_projection_stays_on_the_radius() {
    let mut o = OrbitState::new(2, 5, 1.9, 0.6);
    for _ in 0..2000 {
        o = o.advance(1);
        let p = o.position();
        let r = (p.x * p.x + p.z * p.z).sqrt();
        assert!((r - 1.9).abs() < 1e-4, "radius drifted to {r}");
        assert!((p.y - p.z * ORBIT_VERTICAL_SQUASH).abs() < 1e-5);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_constants_are_sane() {
    assert!(ORBIT_STEP > 0.0);
    assert!(SATELLITE_SPEED_BASE > 0.0);
    assert!(SATELLITE_SPEED_JITTER > 0.0);
    assert!(ORBIT_VERTICAL_SQUASH > 0.0 && ORBIT_VERTICAL_SQUASH <= 1.0);
}
