//! Ideal VSEPR directions around a central atom.

use bevy::prelude::*;

use super::ring_positions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Geometry {
    Linear,
    TrigonalPlanar,
    Bent,
    TrigonalPyramidal,
    #[default]
    Tetrahedral,
    TrigonalBipyramidal,
    Octahedral,
}

fn tetrahedral_directions() -> [Vec3; 4] {
    [
        Vec3::new(1.0, 1.0, 1.0).normalize(),
        Vec3::new(1.0, -1.0, -1.0).normalize(),
        Vec3::new(-1.0, 1.0, -1.0).normalize(),
        Vec3::new(-1.0, -1.0, 1.0).normalize(),
    ]
}

impl Geometry {
    pub const ALL: [Geometry; 7] = [
        Geometry::Linear,
        Geometry::TrigonalPlanar,
        Geometry::Bent,
        Geometry::TrigonalPyramidal,
        Geometry::Tetrahedral,
        Geometry::TrigonalBipyramidal,
        Geometry::Octahedral,
    ];

    /// Unit vectors from the central atom to each bonded ligand.
    pub fn bond_directions(self) -> Vec<Vec3> {
        match self {
            Geometry::Linear => vec![Vec3::X, Vec3::NEG_X],
            Geometry::TrigonalPlanar => ring_positions(3, 1.0),
            Geometry::Bent => tetrahedral_directions()[..2].to_vec(),
            Geometry::TrigonalPyramidal => tetrahedral_directions()[1..].to_vec(),
            Geometry::Tetrahedral => tetrahedral_directions().to_vec(),
            Geometry::TrigonalBipyramidal => {
                let mut dirs = vec![Vec3::Y, Vec3::NEG_Y];
                dirs.extend(ring_positions(3, 1.0));
                dirs
            }
            Geometry::Octahedral => vec![
                Vec3::X,
                Vec3::NEG_X,
                Vec3::Y,
                Vec3::NEG_Y,
                Vec3::Z,
                Vec3::NEG_Z,
            ],
        }
    }

    /// Unit vectors of non-bonding electron pairs.
    pub fn lone_pair_directions(self) -> Vec<Vec3> {
        match self {
            Geometry::Bent => tetrahedral_directions()[2..].to_vec(),
            Geometry::TrigonalPyramidal => tetrahedral_directions()[..1].to_vec(),
            _ => Vec::new(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Geometry::Linear => "Linear",
            Geometry::TrigonalPlanar => "Trigonal planar",
            Geometry::Bent => "Bent",
            Geometry::TrigonalPyramidal => "Trigonal pyramidal",
            Geometry::Tetrahedral => "Tetrahedral",
            Geometry::TrigonalBipyramidal => "Trigonal bipyramidal",
            Geometry::Octahedral => "Octahedral",
        }
    }

    pub fn example(self) -> &'static str {
        match self {
            Geometry::Linear => "CO₂",
            Geometry::TrigonalPlanar => "BF₃",
            Geometry::Bent => "H₂O",
            Geometry::TrigonalPyramidal => "NH₃",
            Geometry::Tetrahedral => "CH₄",
            Geometry::TrigonalBipyramidal => "PCl₅",
            Geometry::Octahedral => "SF₆",
        }
    }

    /// Textbook bond angle(s); lone pairs compress bent and pyramidal angles.
    pub fn angle_label(self) -> &'static str {
        match self {
            Geometry::Linear => "180°",
            Geometry::TrigonalPlanar => "120°",
            Geometry::Bent => "≈104.5°",
            Geometry::TrigonalPyramidal => "≈107°",
            Geometry::Tetrahedral => "109.5°",
            Geometry::TrigonalBipyramidal => "90° / 120°",
            Geometry::Octahedral => "90°",
        }
    }
}

pub fn bond_angle_degrees(a: Vec3, b: Vec3) -> f32 {
    a.angle_between(b).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_are_unit_vectors() {
        for geometry in Geometry::ALL {
            for dir in geometry
                .bond_directions()
                .into_iter()
                .chain(geometry.lone_pair_directions())
            {
                assert!((dir.length() - 1.0).abs() < 1e-5, "{geometry:?}: {dir:?}");
            }
        }
    }

    #[test]
    fn tetrahedral_angle_is_109_5() {
        let dirs = Geometry::Tetrahedral.bond_directions();
        for i in 0..dirs.len() {
            for j in (i + 1)..dirs.len() {
                assert!((bond_angle_degrees(dirs[i], dirs[j]) - 109.47).abs() < 0.05);
            }
        }
    }

    #[test]
    fn electron_domains_add_up() {
        let domains = |g: Geometry| g.bond_directions().len() + g.lone_pair_directions().len();
        assert_eq!(domains(Geometry::Bent), 4);
        assert_eq!(domains(Geometry::TrigonalPyramidal), 4);
        assert_eq!(domains(Geometry::TrigonalBipyramidal), 5);
        assert_eq!(domains(Geometry::Octahedral), 6);
    }

    #[test]
    fn trigonal_planar_is_120_degrees() {
        let dirs = Geometry::TrigonalPlanar.bond_directions();
        assert!((bond_angle_degrees(dirs[0], dirs[1]) - 120.0).abs() < 0.01);
    }
}
