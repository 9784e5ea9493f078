//! Helical placement for nucleic acid backbones.

use std::f32::consts::PI;

use bevy::prelude::*;

use super::Segment;

/// Single strand (RNA) or two antiparallel strands (DNA).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strands {
    Single,
    Double,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixParams {
    pub rungs: usize,
    /// Vertical rise per rung.
    pub rise: f32,
    /// Angular twist per rung in radians.
    pub twist: f32,
    pub radius: f32,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            rungs: 20,
            rise: 0.34,
            twist: 36f32.to_radians(),
            radius: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixRung {
    pub index: usize,
    pub height: f32,
    pub angle: f32,
    pub strand_a: Vec3,
    /// Mirrored backbone point at `angle + π`, present for double strands.
    pub strand_b: Option<Vec3>,
}

impl HelixRung {
    /// Connector across the helix; single strands reach the axis instead.
    pub fn rung(&self) -> Segment {
        let end = self
            .strand_b
            .unwrap_or(Vec3::new(0.0, self.height, 0.0));
        Segment::new(self.strand_a, end)
    }
}

fn backbone_point(radius: f32, angle: f32, height: f32) -> Vec3 {
    Vec3::new(radius * angle.sin(), height, radius * angle.cos())
}

pub fn helix_rung(index: usize, params: &HelixParams, strands: Strands) -> HelixRung {
    let height = (index as f32 - params.rungs as f32 / 2.0) * params.rise;
    let angle = index as f32 * params.twist;
    let strand_a = backbone_point(params.radius, angle, height);
    let strand_b = match strands {
        Strands::Single => None,
        Strands::Double => Some(backbone_point(params.radius, angle + PI, height)),
    };
    HelixRung {
        index,
        height,
        angle,
        strand_a,
        strand_b,
    }
}

pub fn helix(params: &HelixParams, strands: Strands) -> Vec<HelixRung> {
    (0..params.rungs)
        .map(|i| helix_rung(i, params, strands))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::EPS;

    #[test]
    fn vertical_offset_is_linear_in_index() {
        let params = HelixParams::default();
        let rungs = helix(&params, Strands::Double);
        for pair in rungs.windows(2) {
            assert!((pair[1].height - pair[0].height - params.rise).abs() < EPS);
        }
        assert!((rungs[params.rungs / 2].height).abs() < EPS);
    }

    #[test]
    fn double_strand_points_are_diametrically_opposite() {
        let params = HelixParams {
            radius: 1.3,
            ..HelixParams::default()
        };
        for rung in helix(&params, Strands::Double) {
            let b = rung.strand_b.expect("double strand has a partner");
            let axis = Vec3::new(0.0, rung.height, 0.0);
            let (da, db) = (rung.strand_a - axis, b - axis);
            assert!((da + db).length() < EPS);
            assert!((da.angle_between(db) - PI).abs() < 1e-3);
        }
    }

    #[test]
    fn single_strand_rung_reaches_the_axis() {
        let rung = helix_rung(3, &HelixParams::default(), Strands::Single);
        assert!(rung.strand_b.is_none());
        let segment = rung.rung();
        assert!(segment.end.distance(Vec3::new(0.0, rung.height, 0.0)) < EPS);
    }
}
