//! Chain growth: addition (ethene to polyethene) and condensation (with water
//! released at every new linkage).

use std::time::Duration;

use bevy::prelude::*;
use bevy_egui::egui;

use crate::animation::{Oscillator, ScaleDecay};
use crate::catalog::SimulationId;
use crate::layout::{zigzag_chain, Segment};
use crate::render::{ChemScene, SceneBuilder};
use crate::scene::elements::Element;
use crate::switcher::{
    auto_advance_system, step_controls, variant_selector, SceneVariant, StepCycle,
    SteppedControls,
};

const MONOMERS: usize = 6;
const CHAIN_SPACING: f32 = 0.75;
const CHAIN_AMPLITUDE: f32 = 0.25;
const CHAIN_Y: f32 = 0.8;
const POOL_Y: f32 = -1.2;
const BOND_RADIUS: f32 = 0.06;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolymerKind {
    #[default]
    Addition,
    Condensation,
}

impl PolymerKind {
    /// Backbone beads for `linked` monomers.
    pub fn backbone_len(self, linked: usize) -> usize {
        match self {
            PolymerKind::Addition => 2 * linked,
            PolymerKind::Condensation => linked,
        }
    }

    /// Water molecules released so far.
    pub fn water_released(self, linked: usize) -> usize {
        match self {
            PolymerKind::Addition => 0,
            PolymerKind::Condensation => linked.saturating_sub(1),
        }
    }

    fn bead_color(self, index: usize) -> Color {
        match self {
            PolymerKind::Addition => Element::C.color(),
            PolymerKind::Condensation if index % 2 == 0 => Color::srgb(0.85, 0.35, 0.3),
            PolymerKind::Condensation => Color::srgb(0.3, 0.45, 0.9),
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            PolymerKind::Addition => "n CH₂=CH₂ → –(CH₂–CH₂)ₙ–",
            PolymerKind::Condensation => "n HOOC–R–COOH + n HO–R'–OH → polyester + (2n−1) H₂O",
        }
    }
}

impl SceneVariant for PolymerKind {
    const ALL: &'static [Self] = &[PolymerKind::Addition, PolymerKind::Condensation];

    fn label(self) -> &'static str {
        match self {
            PolymerKind::Addition => "Addition",
            PolymerKind::Condensation => "Condensation",
        }
    }
}

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct PolymerControls {
    pub kind: PolymerKind,
    pub steps: StepCycle,
    pub playing: bool,
}

impl Default for PolymerControls {
    fn default() -> Self {
        Self {
            kind: PolymerKind::Addition,
            steps: StepCycle::new(MONOMERS),
            playing: true,
        }
    }
}

impl PolymerControls {
    pub fn linked(&self) -> usize {
        self.steps.index() + 1
    }
}

impl SteppedControls for PolymerControls {
    const STEP_PERIOD: Duration = Duration::from_millis(1_800);

    fn cycle(&self) -> &StepCycle {
        &self.steps
    }

    fn cycle_mut(&mut self) -> &mut StepCycle {
        &mut self.steps
    }

    fn playing(&self) -> bool {
        self.playing
    }
}

pub struct Polymerization;

impl Polymerization {
    fn spawn_water(builder: &mut SceneBuilder, at: Vec3) {
        let oxygen = at + Vec3::Y * 0.5;
        let hydrogens = [
            oxygen + Vec3::new(-0.25, 0.18, 0.0),
            oxygen + Vec3::new(0.25, 0.18, 0.0),
        ];
        let drift = |origin: Vec3| Oscillator::new(origin, Vec3::Y, 0.1, 3.0);
        builder
            .atom(oxygen, 0.16, Element::O.color())
            .insert((ScaleDecay::default(), drift(oxygen)));
        for h in hydrogens {
            builder
                .atom(h, 0.1, Element::H.color())
                .insert((ScaleDecay::default(), drift(h)));
        }
    }
}

impl ChemScene for Polymerization {
    const ID: SimulationId = SimulationId::Polymerization;
    type Controls = PolymerControls;

    fn camera_start() -> Option<Vec3> {
        Some(Vec3::new(0.0, 1.0, 8.0))
    }

    fn needs_rebuild(previous: &PolymerControls, current: &PolymerControls) -> bool {
        previous.kind != current.kind || previous.steps != current.steps
    }

    fn build(builder: &mut SceneBuilder, controls: &PolymerControls) {
        let kind = controls.kind;
        let linked = controls.linked();
        let bond_color = Color::srgb(0.7, 0.7, 0.72);

        let backbone = zigzag_chain(kind.backbone_len(linked), CHAIN_SPACING, CHAIN_AMPLITUDE);
        let chain: Vec<Vec3> = backbone.iter().map(|p| *p + Vec3::Y * CHAIN_Y).collect();
        for (i, &position) in chain.iter().enumerate() {
            builder.atom(position, 0.2, kind.bead_color(i));
        }
        for pair in chain.windows(2) {
            builder.bond(Segment::new(pair[0], pair[1]), BOND_RADIUS, bond_color);
        }

        if kind == PolymerKind::Condensation && linked > 1 {
            if let [.., a, b] = chain.as_slice() {
                Self::spawn_water(builder, (*a + *b) / 2.0);
            }
        }

        // unreacted monomers bob in the pool below the chain
        let free = MONOMERS - linked;
        for slot in 0..free {
            let x = (slot as f32 - (free as f32 - 1.0) / 2.0) * 1.2;
            let origin = Vec3::new(x, POOL_Y, 0.0);
            let phase = slot as f32 * 0.9;
            match kind {
                PolymerKind::Addition => {
                    let left = origin - Vec3::X * 0.3;
                    let right = origin + Vec3::X * 0.3;
                    let bob = Oscillator::new(left, Vec3::Y, 0.15, 1.4).with_phase(phase);
                    builder
                        .atom(left, 0.2, Element::C.color())
                        .insert(bob);
                    builder
                        .atom(right, 0.2, Element::C.color())
                        .insert(Oscillator { origin: right, ..bob });
                    let double = Segment::new(left, right);
                    for offset in [Vec3::Y * 0.06, Vec3::NEG_Y * 0.06] {
                        let stroke = double.offset(offset);
                        builder
                            .bond(stroke, BOND_RADIUS * 0.7, bond_color)
                            .insert(Oscillator {
                                origin: stroke.midpoint(),
                                ..bob
                            });
                    }
                }
                PolymerKind::Condensation => {
                    builder
                        .atom(origin, 0.2, kind.bead_color(linked + slot))
                        .insert(Oscillator::new(origin, Vec3::Y, 0.15, 1.4).with_phase(phase));
                }
            }
        }
    }

    fn controls_ui(ui: &mut egui::Ui, controls: &mut PolymerControls) {
        variant_selector(ui, &mut controls.kind);
        ui.label(controls.kind.summary());
        ui.separator();
        step_controls(ui, &mut controls.steps, &mut controls.playing);
        ui.label(format!("Monomers linked: {}/{MONOMERS}", controls.linked()));
        let water = controls.kind.water_released(controls.linked());
        if controls.kind == PolymerKind::Condensation {
            ui.label(format!("Water released: {water}"));
        }
    }

    fn extend(app: &mut App) {
        app.add_systems(
            Update,
            auto_advance_system::<PolymerControls>.run_if(in_state(Self::page())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_doubles_backbone_and_releases_nothing() {
        assert_eq!(PolymerKind::Addition.backbone_len(3), 6);
        assert_eq!(PolymerKind::Addition.water_released(6), 0);
    }

    #[test]
    fn condensation_releases_one_water_per_link() {
        assert_eq!(PolymerKind::Condensation.water_released(1), 0);
        assert_eq!(PolymerKind::Condensation.water_released(6), 5);
        assert_eq!(PolymerKind::Condensation.backbone_len(4), 4);
    }

    #[test]
    fn chain_grows_with_step_and_wraps() {
        let mut controls = PolymerControls::default();
        assert_eq!(controls.linked(), 1);
        for _ in 0..MONOMERS - 1 {
            controls.steps.advance();
        }
        assert_eq!(controls.linked(), MONOMERS);
        controls.steps.advance();
        assert_eq!(controls.linked(), 1);
    }
}
