//! Rock-salt crystal: two interpenetrating cubic sublattices.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::animation::Spin;
use crate::catalog::SimulationId;
use crate::layout::{cubic_lattice, Segment, Species};
use crate::render::{ChemScene, SceneBuilder};
use crate::scene::elements::Element;
use crate::switcher::{clamp_slider, variant_selector, SceneVariant};

const SPACING: f32 = 1.1;
const MIN_HALF_EXTENT: i32 = 1;
const MAX_HALF_EXTENT: i32 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compound {
    #[default]
    NaCl,
    KCl,
    MgO,
}

impl Compound {
    pub fn ions(self) -> (Element, Element) {
        match self {
            Compound::NaCl => (Element::Na, Element::Cl),
            Compound::KCl => (Element::K, Element::Cl),
            Compound::MgO => (Element::Mg, Element::O),
        }
    }

    /// Ionic radii relative to the lattice spacing (cation, anion).
    pub fn radii(self) -> (f32, f32) {
        match self {
            Compound::NaCl => (0.22, 0.38),
            Compound::KCl => (0.3, 0.38),
            Compound::MgO => (0.2, 0.32),
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            Compound::NaCl => "Na⁺ Cl⁻",
            Compound::KCl => "K⁺ Cl⁻",
            Compound::MgO => "Mg²⁺ O²⁻",
        }
    }
}

impl SceneVariant for Compound {
    const ALL: &'static [Self] = &[Compound::NaCl, Compound::KCl, Compound::MgO];

    fn label(self) -> &'static str {
        match self {
            Compound::NaCl => "NaCl",
            Compound::KCl => "KCl",
            Compound::MgO => "MgO",
        }
    }
}

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct LatticeControls {
    pub compound: Compound,
    pub half_extent: i32,
    pub show_bonds: bool,
}

impl Default for LatticeControls {
    fn default() -> Self {
        Self {
            compound: Compound::NaCl,
            half_extent: 1,
            show_bonds: true,
        }
    }
}

/// Ion counts per species for a lattice of the given half extent.
pub fn ion_counts(half_extent: i32) -> (usize, usize) {
    cubic_lattice(half_extent, SPACING)
        .iter()
        .fold((0, 0), |(a, b), site| match site.species {
            Species::A => (a + 1, b),
            Species::B => (a, b + 1),
        })
}

pub struct IonicLattice;

impl ChemScene for IonicLattice {
    const ID: SimulationId = SimulationId::IonicLattice;
    type Controls = LatticeControls;

    fn camera_start() -> Option<Vec3> {
        Some(Vec3::new(5.0, 4.0, 7.0))
    }

    fn build(builder: &mut SceneBuilder, controls: &LatticeControls) {
        let spin = Spin::about_y(0.2);
        let (cation, anion) = controls.compound.ions();
        let (cation_radius, anion_radius) = controls.compound.radii();
        let half_extent = clamp_slider(controls.half_extent, MIN_HALF_EXTENT, MAX_HALF_EXTENT);

        for site in cubic_lattice(half_extent, SPACING) {
            let (element, radius) = match site.species {
                Species::A => (cation, cation_radius),
                Species::B => (anion, anion_radius),
            };
            builder
                .atom(site.position, radius, element.color())
                .insert(spin);

            if !controls.show_bonds {
                continue;
            }
            // +x/+y/+z neighbours only, so each edge is drawn once
            for step in [IVec3::X, IVec3::Y, IVec3::Z] {
                let next = site.coords + step;
                if next.max_element() > half_extent {
                    continue;
                }
                let segment = Segment::new(site.position, next.as_vec3() * SPACING);
                builder
                    .bond(segment, 0.025, Color::srgba(0.8, 0.8, 0.8, 0.6))
                    .insert(spin);
            }
        }
    }

    fn controls_ui(ui: &mut egui::Ui, controls: &mut LatticeControls) {
        variant_selector(ui, &mut controls.compound);
        ui.add(
            egui::Slider::new(&mut controls.half_extent, MIN_HALF_EXTENT..=MAX_HALF_EXTENT)
                .text("Unit cells from center"),
        );
        ui.checkbox(&mut controls.show_bonds, "Show lattice edges");
        ui.separator();

        let (cations, anions) = ion_counts(controls.half_extent);
        ui.label(controls.compound.formula());
        ui.label(format!("{cations} cations, {anions} anions"));
        ui.label("Coordination number: 6");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_cover_the_whole_cube() {
        let (a, b) = ion_counts(1);
        assert_eq!(a + b, 27);
        // center plus the 12 edge midpoints are even, corners and face centers odd
        assert_eq!(a, 13);
        assert_eq!(b, 14);
    }

    #[test]
    fn compounds_pair_metal_with_nonmetal() {
        for &compound in Compound::ALL {
            let (cation, anion) = compound.ions();
            assert_ne!(cation, anion);
            let (rc, ra) = compound.radii();
            assert!(rc < ra);
        }
    }
}
