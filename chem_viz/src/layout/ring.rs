//! Planar ring placement in the XZ plane (benzene, equatorial ligands).

use std::f32::consts::TAU;

use bevy::prelude::*;

use super::Segment;

/// Position of member `index` of an `count`-member ring of `radius`.
pub fn ring_position(index: usize, count: usize, radius: f32) -> Vec3 {
    let theta = TAU * index as f32 / count as f32;
    Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin())
}

pub fn ring_positions(count: usize, radius: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| ring_position(i, count, radius))
        .collect()
}

/// Bonds between consecutive members; the last one closes back to member 0.
pub fn ring_bonds(count: usize, radius: f32) -> Vec<Segment> {
    (0..count)
        .map(|i| {
            Segment::new(
                ring_position(i, count, radius),
                ring_position((i + 1) % count, count, radius),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::EPS;

    #[test]
    fn six_member_ring_matches_reference_points() {
        let first = ring_position(0, 6, 2.5);
        let opposite = ring_position(3, 6, 2.5);
        assert!(first.distance(Vec3::new(2.5, 0.0, 0.0)) < EPS);
        assert!(opposite.distance(Vec3::new(-2.5, 0.0, 0.0)) < EPS);
    }

    #[test]
    fn members_lie_on_the_circle() {
        for n in 3..=12 {
            for (i, p) in ring_positions(n, 1.7).iter().enumerate() {
                assert!(
                    (p.length() - 1.7).abs() < EPS,
                    "member {i} of {n} off radius: {p:?}"
                );
                assert_eq!(p.y, 0.0);
            }
        }
    }

    #[test]
    fn consecutive_members_are_spaced_by_central_angle() {
        for n in 3..=10 {
            let expected = TAU / n as f32;
            let positions = ring_positions(n, 2.0);
            for i in 0..n {
                let a = positions[i];
                let b = positions[(i + 1) % n];
                assert!((a.angle_between(b) - expected).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn closing_bond_wraps_to_first_member() {
        let bonds = ring_bonds(6, 1.4);
        assert_eq!(bonds.len(), 6);
        let closing = bonds[5];
        assert!(closing.start.distance(ring_position(5, 6, 1.4)) < EPS);
        assert!(closing.end.distance(ring_position(0, 6, 1.4)) < EPS);
        // all hexagon edges equal the radius
        for bond in &bonds {
            assert!((bond.length() - 1.4).abs() < EPS);
        }
    }
}
