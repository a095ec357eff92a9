// Frame-count driven orbit model for satellites.

use super::constants::{ORBIT_STEP, ORBIT_VERTICAL_SQUASH};
use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    /// Angle along the orbit in radians. Grows without bound; only ever read
    /// through `sin`/`cos`.
    pub phase: f32,
    pub radius: f32,
    pub speed: f32,
}

impl OrbitState {
    /// Orbit for entry `index` of `count`, starting at its evenly spaced angle.
    pub fn new(index: usize, count: usize, radius: f32, speed: f32) -> Self {
        Self {
            phase: initial_phase(index, count),
            radius,
            speed,
        }
    }

    pub fn advance(self, ticks: u32) -> Self {
        Self {
            phase: self.phase + self.speed * ORBIT_STEP * ticks as f32,
            ..self
        }
    }

    /// Position on the tilted ellipse. The x–z projection is a circle of `radius`.
    pub fn position(&self) -> Vec3 {
        orbit_position(self.phase, self.radius)
    }
}

#[inline]
pub fn initial_phase(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    (index as f32 / count as f32) * TAU
}

#[inline]
pub fn orbit_position(phase: f32, radius: f32) -> Vec3 {
    let (s, c) = phase.sin_cos();
    Vec3::new(radius * c, radius * s * ORBIT_VERTICAL_SQUASH, radius * s)
}
