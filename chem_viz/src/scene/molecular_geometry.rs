//! VSEPR shapes: a central atom, its ligands and optional lone-pair lobes.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::animation::Spin;
use crate::catalog::SimulationId;
use crate::layout::{bond_angle_degrees, Geometry, Segment};
use crate::render::{ChemScene, SceneBuilder};
use crate::scene::elements::Element;
use crate::switcher::{variant_selector, SceneVariant};

const BOND_LENGTH: f32 = 1.6;
const BOND_RADIUS: f32 = 0.07;
const LONE_PAIR_DISTANCE: f32 = 0.85;
const SPIN_SPEED: f32 = 0.3;

impl SceneVariant for Geometry {
    const ALL: &'static [Self] = &Geometry::ALL;

    fn label(self) -> &'static str {
        Geometry::label(self)
    }
}

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct GeometryControls {
    pub geometry: Geometry,
    pub show_lone_pairs: bool,
}

impl Default for GeometryControls {
    fn default() -> Self {
        Self {
            geometry: Geometry::Tetrahedral,
            show_lone_pairs: true,
        }
    }
}

/// Central atom and ligand of the textbook example for each shape.
pub fn example_atoms(geometry: Geometry) -> (Element, Element) {
    match geometry {
        Geometry::Linear => (Element::C, Element::O),
        Geometry::TrigonalPlanar => (Element::B, Element::F),
        Geometry::Bent => (Element::O, Element::H),
        Geometry::TrigonalPyramidal => (Element::N, Element::H),
        Geometry::Tetrahedral => (Element::C, Element::H),
        Geometry::TrigonalBipyramidal => (Element::P, Element::Cl),
        Geometry::Octahedral => (Element::S, Element::F),
    }
}

pub fn ligand_positions(geometry: Geometry) -> Vec<Vec3> {
    geometry
        .bond_directions()
        .into_iter()
        .map(|dir| dir * BOND_LENGTH)
        .collect()
}

pub struct MolecularGeometry;

impl ChemScene for MolecularGeometry {
    const ID: SimulationId = SimulationId::MolecularGeometry;
    type Controls = GeometryControls;

    fn camera_start() -> Option<Vec3> {
        Some(Vec3::new(0.0, 2.5, 6.0))
    }

    fn build(builder: &mut SceneBuilder, controls: &GeometryControls) {
        let spin = Spin::about_y(SPIN_SPEED);
        let (center, ligand) = example_atoms(controls.geometry);

        builder
            .atom(Vec3::ZERO, center.display_radius() * 1.3, center.color())
            .insert(spin);

        for position in ligand_positions(controls.geometry) {
            let bond = Segment::new(Vec3::ZERO, position);
            builder
                .bond(bond, BOND_RADIUS, Color::srgb(0.7, 0.7, 0.72))
                .insert(spin);
            builder
                .atom(position, ligand.display_radius(), ligand.color())
                .insert(spin);
        }

        if !controls.show_lone_pairs {
            return;
        }
        for dir in controls.geometry.lone_pair_directions() {
            let lobe = builder.translucent(Color::srgba(0.95, 0.85, 0.3, 0.4));
            let transform = Transform::from_translation(dir * LONE_PAIR_DISTANCE)
                .with_rotation(Quat::from_rotation_arc(Vec3::Y, dir))
                .with_scale(Vec3::new(0.35, 0.7, 0.35));
            builder.spawn(Sphere::new(0.5), lobe, transform).insert(spin);
        }
    }

    fn controls_ui(ui: &mut egui::Ui, controls: &mut GeometryControls) {
        variant_selector(ui, &mut controls.geometry);
        ui.checkbox(&mut controls.show_lone_pairs, "Show lone pairs");
        ui.separator();

        let geometry = controls.geometry;
        ui.label(format!("Example: {}", geometry.example()));
        ui.label(format!("Bond angle: {}", geometry.angle_label()));
        let dirs = geometry.bond_directions();
        if let [a, b, ..] = dirs.as_slice() {
            ui.label(format!("Model angle: {:.1}°", bond_angle_degrees(*a, *b)));
        }
        let lone_pairs = geometry.lone_pair_directions().len();
        if lone_pairs > 0 {
            ui.label(format!("Lone pairs: {lone_pairs}"));
        }
    }
}
