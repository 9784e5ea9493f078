//! Electrolytic cell: gas bubbles rising off both electrodes while ions
//! migrate through the solution.

use bevy::prelude::*;
use bevy_egui::egui;
use rand::Rng;

use crate::animation::{Oscillator, Recycler};
use crate::catalog::SimulationId;
use crate::render::{ChemScene, SceneBuilder};
use crate::scene::elements::Element;
use crate::switcher::{variant_selector, SceneVariant};

pub const FARADAY: f32 = 96_485.0;

const ELECTRODE_X: f32 = 1.2;
const SOLUTION_TOP: f32 = 0.8;
const SOLUTION_BOTTOM: f32 = -1.4;
const BUBBLES_PER_VOLUME: usize = 6;
const IONS_PER_SPECIES: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Electrolyte {
    #[default]
    Water,
    Brine,
}

impl Electrolyte {
    /// Gas volumes evolved at (cathode, anode).
    pub fn gas_ratio(self) -> (usize, usize) {
        match self {
            Electrolyte::Water => (2, 1),
            Electrolyte::Brine => (1, 1),
        }
    }

    pub fn anode_gas(self) -> Element {
        match self {
            Electrolyte::Water => Element::O,
            Electrolyte::Brine => Element::Cl,
        }
    }

    /// (cation, anion) drifting through the solution.
    pub fn ions(self) -> (Element, Element) {
        match self {
            Electrolyte::Water => (Element::H, Element::O),
            Electrolyte::Brine => (Element::Na, Element::Cl),
        }
    }

    pub fn half_reactions(self) -> [&'static str; 2] {
        match self {
            Electrolyte::Water => [
                "Cathode: 2H⁺ + 2e⁻ → H₂",
                "Anode: 2H₂O → O₂ + 4H⁺ + 4e⁻",
            ],
            Electrolyte::Brine => [
                "Cathode: 2H₂O + 2e⁻ → H₂ + 2OH⁻",
                "Anode: 2Cl⁻ → Cl₂ + 2e⁻",
            ],
        }
    }
}

impl SceneVariant for Electrolyte {
    const ALL: &'static [Self] = &[Electrolyte::Water, Electrolyte::Brine];

    fn label(self) -> &'static str {
        match self {
            Electrolyte::Water => "Acidified water",
            Electrolyte::Brine => "Brine (NaCl)",
        }
    }
}

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ElectrolysisControls {
    pub electrolyte: Electrolyte,
    /// Amperes.
    pub current: f32,
}

impl Default for ElectrolysisControls {
    fn default() -> Self {
        Self {
            electrolyte: Electrolyte::Water,
            current: 1.0,
        }
    }
}

#[derive(Component)]
pub struct Bubble;

/// Rise speed of bubbles in scene units per second.
pub fn bubble_rate(current: f32) -> f32 {
    0.3 + 0.7 * current.max(0.0)
}

/// Moles of product for a charge passed over `seconds`, `electrons` per molecule.
pub fn faraday_moles(current: f32, seconds: f32, electrons: u32) -> f32 {
    current * seconds / (electrons as f32 * FARADAY)
}

pub struct Electrolysis;

impl ChemScene for Electrolysis {
    const ID: SimulationId = SimulationId::Electrolysis;
    type Controls = ElectrolysisControls;

    fn camera_start() -> Option<Vec3> {
        Some(Vec3::new(0.0, 1.5, 7.0))
    }

    fn build(builder: &mut SceneBuilder, controls: &ElectrolysisControls) {
        let electrolyte = controls.electrolyte;
        builder.glass(
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(3.8, 2.2, 1.8),
            Color::srgba(0.8, 0.9, 1.0, 0.12),
        );
        builder.glass(
            Vec3::new(0.0, (SOLUTION_TOP + SOLUTION_BOTTOM) / 2.0, 0.0),
            Vec3::new(3.6, SOLUTION_TOP - SOLUTION_BOTTOM, 1.6),
            Color::srgba(0.35, 0.6, 0.95, 0.18),
        );

        let electrode_size = Vec3::new(0.15, 2.4, 0.6);
        let cathode = Vec3::new(-ELECTRODE_X, -0.2, 0.0);
        let anode = Vec3::new(ELECTRODE_X, -0.2, 0.0);
        builder.block(cathode, electrode_size, Color::srgb(0.35, 0.35, 0.38));
        builder.block(anode, electrode_size, Color::srgb(0.55, 0.5, 0.45));
        builder.block(
            Vec3::new(0.0, 1.6, 0.0),
            Vec3::new(2.4, 0.05, 0.05),
            Color::srgb(0.8, 0.5, 0.2),
        );
        builder.block(
            Vec3::new(0.0, 1.6, 0.0),
            Vec3::new(0.5, 0.35, 0.35),
            Color::srgb(0.15, 0.15, 0.18),
        );

        let (cathode_volumes, anode_volumes) = electrolyte.gas_ratio();
        let rate = bubble_rate(controls.current);
        let hydrogen = Element::H.color();
        let anode_gas = electrolyte.anode_gas().color();
        for (x, volumes, color) in [
            (-ELECTRODE_X, cathode_volumes, hydrogen),
            (ELECTRODE_X, anode_volumes, anode_gas),
        ] {
            for _ in 0..volumes * BUBBLES_PER_VOLUME {
                let rng = builder.rng();
                let start = Vec3::new(
                    x + rng.gen_range(-0.2..0.2),
                    rng.gen_range(SOLUTION_BOTTOM..SOLUTION_TOP),
                    rng.gen_range(-0.3..0.3),
                );
                let radius = rng.gen_range(0.04..0.08);
                let material = builder.translucent(color.with_alpha(0.7));
                builder
                    .spawn(Sphere::new(radius), material, Transform::from_translation(start))
                    .insert((
                        Bubble,
                        Recycler::rising(rate, SOLUTION_BOTTOM, SOLUTION_TOP),
                    ));
            }
        }

        // cations drift toward the cathode, anions toward the anode
        let (cation, anion) = electrolyte.ions();
        for (element, lean) in [(cation, -0.4), (anion, 0.4)] {
            for _ in 0..IONS_PER_SPECIES {
                let rng = builder.rng();
                let origin = Vec3::new(
                    lean + rng.gen_range(-0.4..0.4),
                    rng.gen_range(SOLUTION_BOTTOM + 0.2..SOLUTION_TOP - 0.2),
                    rng.gen_range(-0.5..0.5),
                );
                let phase = rng.gen_range(0.0..std::f32::consts::TAU);
                builder
                    .atom(origin, 0.09, element.color())
                    .insert(Oscillator::new(origin, Vec3::X, 0.3, 1.2).with_phase(phase));
            }
        }
    }

    fn needs_rebuild(previous: &ElectrolysisControls, current: &ElectrolysisControls) -> bool {
        previous.electrolyte != current.electrolyte
    }

    fn controls_ui(ui: &mut egui::Ui, controls: &mut ElectrolysisControls) {
        variant_selector(ui, &mut controls.electrolyte);
        ui.add(egui::Slider::new(&mut controls.current, 0.1..=2.0).text("Current (A)"));
        ui.separator();
        for line in controls.electrolyte.half_reactions() {
            ui.label(line);
        }
        let hydrogen = faraday_moles(controls.current, 60.0, 2) * 1_000.0;
        ui.label(format!("H₂ per minute: {hydrogen:.2} mmol"));
    }

    fn extend(app: &mut App) {
        app.add_systems(
            Update,
            apply_current
                .run_if(resource_exists_and_changed::<ElectrolysisControls>)
                .run_if(in_state(Self::page())),
        );
    }
}

fn apply_current(
    controls: Res<ElectrolysisControls>,
    mut bubbles: Query<&mut Recycler, With<Bubble>>,
) {
    let rate = bubble_rate(controls.current);
    for mut recycler in &mut bubbles {
        recycler.rate = rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_splits_two_to_one() {
        assert_eq!(Electrolyte::Water.gas_ratio(), (2, 1));
        assert_eq!(Electrolyte::Brine.anode_gas(), Element::Cl);
    }

    #[test]
    fn one_faraday_yields_half_mole_of_hydrogen() {
        let moles = faraday_moles(1.0, FARADAY, 2);
        assert!((moles - 0.5).abs() < 1e-6);
    }

    #[test]
    fn acidified_water_reduces_hydrogen_ions() {
        let [cathode, anode] = Electrolyte::Water.half_reactions();
        assert_eq!(cathode, "Cathode: 2H⁺ + 2e⁻ → H₂");
        assert!(anode.contains("O₂"));
        let [brine_cathode, _] = Electrolyte::Brine.half_reactions();
        assert!(brine_cathode.contains("2OH⁻"));
    }

    #[test]
    fn more_current_means_faster_bubbles() {
        assert!(bubble_rate(2.0) > bubble_rate(0.5));
        assert_eq!(bubble_rate(-1.0), bubble_rate(0.0));
    }
}
