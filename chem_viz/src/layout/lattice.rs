//! Cubic lattice placement with alternating-parity species (rock salt).

use bevy::prelude::*;

/// Which of the two sublattices a site belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    A,
    B,
}

impl Species {
    pub fn flipped(self) -> Self {
        match self {
            Species::A => Species::B,
            Species::B => Species::A,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeSite {
    pub coords: IVec3,
    pub position: Vec3,
    pub species: Species,
}

impl LatticeSite {
    /// Chebyshev distance from the origin cell; 0 is the center site.
    pub fn shell(&self) -> i32 {
        self.coords.abs().max_element()
    }
}

/// Even `x + y + z` is species A, odd is B.
pub fn lattice_species(coords: IVec3) -> Species {
    if (coords.x + coords.y + coords.z).rem_euclid(2) == 0 {
        Species::A
    } else {
        Species::B
    }
}

/// All sites with coordinates in `[-half_extent, half_extent]³`.
pub fn cubic_lattice(half_extent: i32, spacing: f32) -> Vec<LatticeSite> {
    let k = half_extent.max(0);
    let side = (2 * k + 1) as usize;
    let mut sites = Vec::with_capacity(side * side * side);
    for x in -k..=k {
        for y in -k..=k {
            for z in -k..=k {
                let coords = IVec3::new(x, y, z);
                sites.push(LatticeSite {
                    coords,
                    position: coords.as_vec3() * spacing,
                    species: lattice_species(coords),
                });
            }
        }
    }
    sites
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_differ_in_species() {
        assert_ne!(
            lattice_species(IVec3::ZERO),
            lattice_species(IVec3::new(1, 0, 0))
        );
    }

    #[test]
    fn flipping_one_coordinate_flips_species() {
        for x in -3..=3 {
            for y in -3..=3 {
                for z in -3..=3 {
                    let here = lattice_species(IVec3::new(x, y, z));
                    for step in [IVec3::X, IVec3::Y, IVec3::Z] {
                        let base = IVec3::new(x, y, z);
                        assert_eq!(lattice_species(base + step), here.flipped());
                        assert_eq!(lattice_species(base - step), here.flipped());
                    }
                }
            }
        }
    }

    #[test]
    fn lattice_has_expected_site_count_and_spacing() {
        let sites = cubic_lattice(2, 1.5);
        assert_eq!(sites.len(), 125);
        let corner = sites
            .iter()
            .find(|s| s.coords == IVec3::new(2, -2, 1))
            .expect("corner site present");
        assert_eq!(corner.position, Vec3::new(3.0, -3.0, 1.5));
        assert_eq!(corner.shell(), 2);
        assert_eq!(corner.species, Species::B);
    }

    #[test]
    fn zero_extent_is_a_single_site() {
        let sites = cubic_lattice(0, 1.0);
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].species, Species::A);
    }
}
