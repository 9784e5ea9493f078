//! Circular orbits in the XZ plane (electrons, orbiting markers).

use std::f32::consts::TAU;

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPath {
    pub radius: f32,
    /// Radians per second.
    pub angular_speed: f32,
    pub phase: f32,
    pub height: f32,
}

impl OrbitPath {
    pub fn new(radius: f32, angular_speed: f32, phase: f32) -> Self {
        Self {
            radius,
            angular_speed,
            phase,
            height: 0.0,
        }
    }

    /// Offset from the orbit center at time `t`.
    pub fn position(&self, t: f32) -> Vec3 {
        let angle = self.angular_speed * t + self.phase;
        Vec3::new(
            self.radius * angle.sin(),
            self.height,
            self.radius * angle.cos(),
        )
    }

    pub fn period(&self) -> f32 {
        TAU / self.angular_speed.abs()
    }
}

/// `count` phases spread evenly around the circle.
pub fn evenly_spaced_phases(count: usize) -> Vec<f32> {
    (0..count)
        .map(|i| TAU * i as f32 / count as f32)
        .collect()
}

/// Phases grouped in pairs: pair slots are evenly spread and the two members
/// of a pair sit `spread` radians apart around their slot.
pub fn paired_phases(count: usize, spread: f32) -> Vec<f32> {
    let slots = count.div_ceil(2).max(1);
    (0..count)
        .map(|i| {
            let slot = TAU * (i / 2) as f32 / slots as f32;
            if i % 2 == 0 {
                slot - spread / 2.0
            } else {
                slot + spread / 2.0
            }
        })
        .collect()
}
