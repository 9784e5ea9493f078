//! Procedural layouts: pure functions mapping an index (and optionally time)
//! to a position in scene space.
//!
//! Nothing here touches the ECS. Scenes call these while building and the
//! animators call the orbit helpers every frame.

mod chain;
mod helix;
mod lattice;
mod orbit;
mod ring;
mod vsepr;

use bevy::prelude::*;

pub use chain::zigzag_chain;
pub use helix::{helix, helix_rung, HelixParams, HelixRung, Strands};
pub use lattice::{cubic_lattice, lattice_species, LatticeSite, Species};
pub use orbit::{evenly_spaced_phases, paired_phases, OrbitPath};
pub use ring::{ring_bonds, ring_position, ring_positions};
pub use vsepr::{bond_angle_degrees, Geometry};

/// A straight connector between two points, e.g. a bond or a helix rung.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

impl Segment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    pub fn midpoint(&self) -> Vec3 {
        (self.start + self.end) / 2.0
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Rotation taking a Y-up cylinder onto the segment's direction.
    pub fn rotation(&self) -> Quat {
        let dir = self.end - self.start;
        if dir.length_squared() <= f32::EPSILON {
            return Quat::IDENTITY;
        }
        Quat::from_rotation_arc(Vec3::Y, dir.normalize())
    }

    /// Transform for a unit-height primitive stretched along the segment.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.midpoint()).with_rotation(self.rotation())
    }

    /// Copy of this segment shifted by `offset`, used for double bonds.
    pub fn offset(&self, offset: Vec3) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    /// Copy trimmed to the middle `fraction` of its length.
    pub fn shortened(&self, fraction: f32) -> Self {
        let mid = self.midpoint();
        let half = (self.end - self.start) * fraction.clamp(0.0, 1.0) / 2.0;
        Self::new(mid - half, mid + half)
    }
}

/// Absolute tolerance shared by the layout tests.
#[cfg(test)]
pub(crate) const EPS: f32 = 1e-4;
