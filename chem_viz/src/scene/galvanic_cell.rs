//! Galvanic cell: two half-cells joined by a wire and a salt bridge.

use bevy::prelude::*;
use bevy_egui::egui;
use rand::Rng;

use crate::animation::{Oscillator, Recycler};
use crate::catalog::SimulationId;
use crate::layout::Segment;
use crate::render::{ChemScene, SceneBuilder};
use crate::scene::elements::Element;
use crate::switcher::{variant_selector, SceneVariant};

const HALF_CELL_X: f32 = 2.0;
const WIRE_Y: f32 = 1.9;
const BRIDGE_Y: f32 = 0.9;
const ELECTRONS_ON_WIRE: usize = 12;
const BRIDGE_IONS: usize = 6;

/// Standard reduction potential in volts (25 °C, 1 M).
pub fn standard_potential(element: Element) -> Option<f32> {
    match element {
        Element::Mg => Some(-2.37),
        Element::Zn => Some(-0.76),
        Element::Cu => Some(0.34),
        Element::Ag => Some(0.80),
        _ => None,
    }
}

/// E°cell = E°cathode − E°anode.
pub fn cell_emf(anode: Element, cathode: Element) -> Option<f32> {
    Some(standard_potential(cathode)? - standard_potential(anode)?)
}

/// Electron speed along the wire, proportional-ish to the cell voltage.
pub fn electron_rate(emf: f32) -> f32 {
    0.4 + 0.6 * emf.max(0.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellPair {
    #[default]
    ZincCopper,
    MagnesiumCopper,
    ZincSilver,
}

impl CellPair {
    /// (anode, cathode)
    pub fn electrodes(self) -> (Element, Element) {
        match self {
            CellPair::ZincCopper => (Element::Zn, Element::Cu),
            CellPair::MagnesiumCopper => (Element::Mg, Element::Cu),
            CellPair::ZincSilver => (Element::Zn, Element::Ag),
        }
    }

    pub fn emf(self) -> f32 {
        let (anode, cathode) = self.electrodes();
        cell_emf(anode, cathode).unwrap_or_default()
    }

    fn solution_tint(metal: Element) -> Color {
        match metal {
            Element::Cu => Color::srgba(0.2, 0.45, 0.95, 0.3),
            _ => Color::srgba(0.85, 0.9, 0.95, 0.15),
        }
    }
}

impl SceneVariant for CellPair {
    const ALL: &'static [Self] = &[
        CellPair::ZincCopper,
        CellPair::MagnesiumCopper,
        CellPair::ZincSilver,
    ];

    fn label(self) -> &'static str {
        match self {
            CellPair::ZincCopper => "Zn | Cu",
            CellPair::MagnesiumCopper => "Mg | Cu",
            CellPair::ZincSilver => "Zn | Ag",
        }
    }
}

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct CellControls {
    pub pair: CellPair,
}

pub struct GalvanicCell;

impl ChemScene for GalvanicCell {
    const ID: SimulationId = SimulationId::GalvanicCell;
    type Controls = CellControls;

    fn camera_start() -> Option<Vec3> {
        Some(Vec3::new(0.0, 2.0, 8.5))
    }

    fn build(builder: &mut SceneBuilder, controls: &CellControls) {
        let (anode, cathode) = controls.pair.electrodes();
        for (x, metal) in [(-HALF_CELL_X, anode), (HALF_CELL_X, cathode)] {
            builder.glass(
                Vec3::new(x, -0.4, 0.0),
                Vec3::new(1.6, 2.0, 1.6),
                Color::srgba(0.8, 0.9, 1.0, 0.1),
            );
            builder.glass(
                Vec3::new(x, -0.6, 0.0),
                Vec3::new(1.5, 1.5, 1.5),
                CellPair::solution_tint(metal),
            );
            builder.block(
                Vec3::new(x, 0.1, 0.0),
                Vec3::new(0.25, 2.4, 0.5),
                metal.color(),
            );
            builder.bond(
                Segment::new(Vec3::new(x, 1.3, 0.0), Vec3::new(x, WIRE_Y, 0.0)),
                0.03,
                Color::srgb(0.8, 0.5, 0.2),
            );
        }

        builder.bond(
            Segment::new(
                Vec3::new(-HALF_CELL_X, WIRE_Y, 0.0),
                Vec3::new(HALF_CELL_X, WIRE_Y, 0.0),
            ),
            0.03,
            Color::srgb(0.8, 0.5, 0.2),
        );
        builder.block(
            Vec3::new(0.0, WIRE_Y, 0.0),
            Vec3::new(0.7, 0.45, 0.2),
            Color::srgb(0.12, 0.12, 0.15),
        );

        // salt bridge: two legs and a span
        let bridge = Color::srgba(0.95, 0.95, 0.85, 0.35);
        let leg = HALF_CELL_X - 0.5;
        builder.glass(Vec3::new(-leg, 0.3, 0.0), Vec3::new(0.25, 1.2, 0.25), bridge);
        builder.glass(Vec3::new(leg, 0.3, 0.0), Vec3::new(0.25, 1.2, 0.25), bridge);
        builder.glass(
            Vec3::new(0.0, BRIDGE_Y, 0.0),
            Vec3::new(2.0 * leg + 0.25, 0.25, 0.25),
            bridge,
        );

        let rate = electron_rate(controls.pair.emf());
        for _ in 0..ELECTRONS_ON_WIRE {
            let x = builder.rng().gen_range(-HALF_CELL_X..HALF_CELL_X);
            let material = builder.glowing(Color::srgb(1.0, 0.9, 0.3), 2.5);
            builder
                .spawn(
                    Sphere::new(0.06),
                    material,
                    Transform::from_xyz(x, WIRE_Y, 0.0),
                )
                .insert(Recycler {
                    axis: Vec3::X,
                    rate,
                    lower: -HALF_CELL_X,
                    upper: HALF_CELL_X,
                });
        }

        for i in 0..BRIDGE_IONS {
            let (color, phase) = if i % 2 == 0 {
                (Element::K.color(), 0.0)
            } else {
                (Element::Cl.color(), std::f32::consts::PI)
            };
            let x = (i as f32 / (BRIDGE_IONS - 1) as f32 - 0.5) * leg * 1.4;
            let origin = Vec3::new(x, BRIDGE_Y, 0.0);
            builder
                .atom(origin, 0.07, color)
                .insert(Oscillator::new(origin, Vec3::X, 0.25, 1.5).with_phase(phase));
        }
    }

    fn controls_ui(ui: &mut egui::Ui, controls: &mut CellControls) {
        variant_selector(ui, &mut controls.pair);
        ui.separator();
        let (anode, cathode) = controls.pair.electrodes();
        ui.label(format!(
            "Anode (oxidation): {} → {}²⁺ + 2e⁻",
            anode.symbol(),
            anode.symbol()
        ));
        ui.label(format!("Cathode (reduction): {}", cathode.symbol()));
        ui.label(format!("E°cell = {:.2} V", controls.pair.emf()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daniell_cell_is_one_point_one_volts() {
        assert!((CellPair::ZincCopper.emf() - 1.10).abs() < 1e-4);
    }

    #[test]
    fn every_pair_is_spontaneous() {
        for &pair in CellPair::ALL {
            assert!(pair.emf() > 0.0, "{pair:?}");
        }
        assert!(CellPair::MagnesiumCopper.emf() > CellPair::ZincSilver.emf());
    }

    #[test]
    fn unknown_electrode_has_no_potential() {
        assert_eq!(cell_emf(Element::C, Element::Cu), None);
    }
}
