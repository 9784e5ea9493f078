//! Element table: symbols, CPK colors, display radii and Bohr shells.

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Element {
    #[default]
    H,
    He,
    Li,
    B,
    C,
    N,
    O,
    F,
    Ne,
    Na,
    Mg,
    P,
    S,
    Cl,
    Ar,
    K,
    Ca,
    Cu,
    Zn,
    Br,
    Ag,
}

impl Element {
    pub fn symbol(self) -> &'static str {
        match self {
            Element::H => "H",
            Element::He => "He",
            Element::Li => "Li",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Ne => "Ne",
            Element::Na => "Na",
            Element::Mg => "Mg",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Ar => "Ar",
            Element::K => "K",
            Element::Ca => "Ca",
            Element::Cu => "Cu",
            Element::Zn => "Zn",
            Element::Br => "Br",
            Element::Ag => "Ag",
        }
    }

    pub fn atomic_number(self) -> u32 {
        match self {
            Element::H => 1,
            Element::He => 2,
            Element::Li => 3,
            Element::B => 5,
            Element::C => 6,
            Element::N => 7,
            Element::O => 8,
            Element::F => 9,
            Element::Ne => 10,
            Element::Na => 11,
            Element::Mg => 12,
            Element::P => 15,
            Element::S => 16,
            Element::Cl => 17,
            Element::Ar => 18,
            Element::K => 19,
            Element::Ca => 20,
            Element::Cu => 29,
            Element::Zn => 30,
            Element::Br => 35,
            Element::Ag => 47,
        }
    }

    /// CPK / Jmol color.
    pub fn color(self) -> Color {
        match self {
            Element::H => Color::srgb(0.95, 0.95, 0.95),
            Element::He | Element::Ne | Element::Ar => Color::srgb(0.55, 0.85, 0.95),
            Element::Li | Element::Na | Element::K => Color::srgb(0.67, 0.36, 0.95),
            Element::B => Color::srgb(1.0, 0.71, 0.71),
            Element::C => Color::srgb(0.25, 0.25, 0.25),
            Element::N => Color::srgb(0.19, 0.31, 0.97),
            Element::O => Color::srgb(1.0, 0.05, 0.05),
            Element::F | Element::Cl => Color::srgb(0.12, 0.94, 0.12),
            Element::Mg | Element::Ca => Color::srgb(0.54, 1.0, 0.0),
            Element::P => Color::srgb(1.0, 0.5, 0.0),
            Element::S => Color::srgb(1.0, 1.0, 0.19),
            Element::Cu => Color::srgb(0.78, 0.5, 0.2),
            Element::Zn => Color::srgb(0.49, 0.5, 0.69),
            Element::Br => Color::srgb(0.65, 0.16, 0.16),
            Element::Ag => Color::srgb(0.75, 0.75, 0.75),
        }
    }

    /// Sphere radius for ball-and-stick views, loosely following covalent radii.
    pub fn display_radius(self) -> f32 {
        match self {
            Element::H => 0.22,
            Element::He | Element::Ne => 0.26,
            Element::B | Element::C | Element::N | Element::O | Element::F => 0.34,
            Element::Li | Element::Na | Element::Mg | Element::Ar => 0.42,
            Element::P | Element::S | Element::Cl => 0.4,
            Element::K | Element::Ca => 0.5,
            Element::Cu | Element::Zn | Element::Ag => 0.46,
            Element::Br => 0.44,
        }
    }
}

/// Electrons per shell in the simple 2-8-8-2 Bohr filling order.
pub fn shell_occupancy(atomic_number: u32) -> Vec<u32> {
    const CAPACITY: [u32; 4] = [2, 8, 8, 2];
    let mut remaining = atomic_number;
    let mut shells = Vec::new();
    for capacity in CAPACITY {
        if remaining == 0 {
            break;
        }
        let filled = remaining.min(capacity);
        shells.push(filled);
        remaining -= filled;
    }
    shells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shells_fill_in_bohr_order() {
        assert_eq!(shell_occupancy(1), vec![1]);
        assert_eq!(shell_occupancy(11), vec![2, 8, 1]);
        assert_eq!(shell_occupancy(20), vec![2, 8, 8, 2]);
        assert!(shell_occupancy(0).is_empty());
    }

    #[test]
    fn occupancy_sums_to_atomic_number_up_to_calcium() {
        for z in 1..=20 {
            assert_eq!(shell_occupancy(z).iter().sum::<u32>(), z);
        }
    }
}
