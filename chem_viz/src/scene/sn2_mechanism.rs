//! SN2 backside attack on bromoethane-like substrate with Walden inversion.
//!
//! Atoms are spawned once; every stage change only retargets their glides and
//! color fades. Bonds are redrawn each frame as gizmo lines between the
//! atoms' current positions.

use std::time::Duration;

use bevy::gizmos::config::GizmoConfigStore;
use bevy::prelude::*;
use bevy_egui::egui;

use crate::animation::{lerp_color_toward, ColorFade, Glide};
use crate::catalog::SimulationId;
use crate::layout::ring_position;
use crate::render::{ChemScene, SceneBuilder};
use crate::scene::elements::Element;
use crate::switcher::{auto_advance_system, step_controls, StepCycle, SteppedControls};

const STAGES: [&str; 4] = [
    "OH⁻ approaches the carbon from the side opposite Br",
    "Transition state: five partial bonds, substituents planar",
    "C–Br bond breaks; Br⁻ leaves",
    "Product with inverted configuration (Walden inversion)",
];
const SUBSTITUENTS: usize = 3;
const SUBSTITUENT_REACH: f32 = 1.1;
const GLIDE_FACTOR: f32 = 0.06;
const FADE_FACTOR: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Carbon,
    Nucleophile,
    LeavingGroup,
    Substituent(usize),
}

impl Role {
    fn element(self) -> Element {
        match self {
            Role::Carbon => Element::C,
            Role::Nucleophile => Element::O,
            Role::LeavingGroup => Element::Br,
            Role::Substituent(0) => Element::C,
            Role::Substituent(_) => Element::H,
        }
    }
}

#[derive(Component, Clone, Copy, Debug)]
pub struct MechanismPart {
    pub role: Role,
}

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Sn2Controls {
    pub steps: StepCycle,
    pub playing: bool,
}

impl Default for Sn2Controls {
    fn default() -> Self {
        Self {
            steps: StepCycle::new(STAGES.len()),
            playing: true,
        }
    }
}

impl SteppedControls for Sn2Controls {
    const STEP_PERIOD: Duration = Duration::from_secs(3);

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

/// Umbrella lean of the substituents along X: away from the nucleophile
/// before attack, planar in the transition state, flipped afterwards.
pub fn umbrella_lean(stage: usize) -> f32 {
    match stage {
        0 => -1.0 / 3.0,
        1 => 0.0,
        _ => 1.0 / 3.0,
    }
}

/// Where `role` sits at `stage`.
pub fn keyframe(role: Role, stage: usize) -> Vec3 {
    match role {
        Role::Carbon => Vec3::ZERO,
        Role::Nucleophile => {
            let x = match stage {
                0 => -3.2,
                1 => -2.0,
                _ => -1.45,
            };
            Vec3::X * x
        }
        Role::LeavingGroup => {
            let x = match stage {
                0 => 1.9,
                1 => 2.2,
                2 => 3.4,
                _ => 4.2,
            };
            Vec3::X * x
        }
        Role::Substituent(i) => {
            let lean = umbrella_lean(stage);
            let spread = (1.0 - lean * lean).sqrt();
            // ring_position lies in XZ; rotate it into the YZ plane
            let around = ring_position(i, SUBSTITUENTS, spread);
            Vec3::new(lean, around.x, around.z) * SUBSTITUENT_REACH
        }
    }
}

/// Formal charge shown by tinting: lighter while the atom carries a charge.
pub fn part_color(role: Role, stage: usize) -> Color {
    let base = role.element().color();
    let charged = match role {
        Role::Nucleophile => stage == 0,
        Role::LeavingGroup => stage >= 2,
        _ => false,
    };
    if charged {
        lerp_color_toward(base.to_linear(), LinearRgba::WHITE, 0.45).into()
    } else {
        base
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BondState {
    None,
    Partial,
    Full,
}

/// Bond between the central carbon and `role` at `stage`.
pub fn bond_state(role: Role, stage: usize) -> BondState {
    match (role, stage) {
        (Role::Carbon, _) => BondState::None,
        (Role::Substituent(_), _) => BondState::Full,
        (Role::Nucleophile, 0) => BondState::None,
        (Role::Nucleophile, 1) => BondState::Partial,
        (Role::Nucleophile, _) => BondState::Full,
        (Role::LeavingGroup, 0) => BondState::Full,
        (Role::LeavingGroup, 1) => BondState::Partial,
        (Role::LeavingGroup, _) => BondState::None,
    }
}

fn roles() -> impl Iterator<Item = Role> {
    [Role::Carbon, Role::Nucleophile, Role::LeavingGroup]
        .into_iter()
        .chain((0..SUBSTITUENTS).map(Role::Substituent))
}

pub struct Sn2Mechanism;

impl ChemScene for Sn2Mechanism {
    const ID: SimulationId = SimulationId::Sn2Mechanism;
    type Controls = Sn2Controls;

    fn camera_start() -> Option<Vec3> {
        Some(Vec3::new(0.5, 2.0, 7.5))
    }

    fn build(builder: &mut SceneBuilder, controls: &Sn2Controls) {
        let stage = controls.steps.index();
        for role in roles() {
            let element = role.element();
            let color = part_color(role, stage);
            let position = keyframe(role, stage);
            let radius = match role {
                Role::Carbon | Role::Substituent(0) => element.display_radius(),
                _ => element.display_radius() * 1.1,
            };
            builder.atom(position, radius, color).insert((
                MechanismPart { role },
                Glide {
                    target: position,
                    factor: GLIDE_FACTOR,
                },
                ColorFade::toward(color, FADE_FACTOR),
            ));
        }
    }

    fn needs_rebuild(_previous: &Sn2Controls, _current: &Sn2Controls) -> bool {
        false
    }

    fn controls_ui(ui: &mut egui::Ui, controls: &mut Sn2Controls) {
        step_controls(ui, &mut controls.steps, &mut controls.playing);
        ui.label(STAGES[controls.steps.index()]);
        ui.separator();
        ui.label("Rate = k[substrate][OH⁻]");
        ui.label("One concerted step, second order overall.");
    }

    fn extend(app: &mut App) {
        app.add_systems(
            Update,
            (
                auto_advance_system::<Sn2Controls>,
                retarget_parts.run_if(resource_exists_and_changed::<Sn2Controls>),
            )
                .chain()
                .run_if(in_state(Self::page())),
        )
        .add_systems(
            Update,
            draw_bonds
                .run_if(in_state(Self::page()))
                .run_if(resource_exists::<Sn2Controls>)
                .run_if(resource_exists::<GizmoConfigStore>),
        );
    }
}

fn retarget_parts(
    controls: Res<Sn2Controls>,
    mut parts: Query<(&MechanismPart, &mut Glide, &mut ColorFade)>,
) {
    let stage = controls.steps.index();
    for (part, mut glide, mut fade) in &mut parts {
        glide.target = keyframe(part.role, stage);
        *fade = ColorFade::toward(part_color(part.role, stage), FADE_FACTOR);
    }
}

fn draw_bonds(
    controls: Res<Sn2Controls>,
    parts: Query<(&MechanismPart, &Transform)>,
    mut gizmos: Gizmos,
) {
    let stage = controls.steps.index();
    let Some(carbon) = parts
        .iter()
        .find(|(part, _)| part.role == Role::Carbon)
        .map(|(_, tf)| tf.translation)
    else {
        return;
    };
    for (part, tf) in &parts {
        let color = match bond_state(part.role, stage) {
            BondState::None => continue,
            BondState::Partial => Color::srgba(0.9, 0.9, 0.5, 0.5),
            BondState::Full => Color::srgb(0.85, 0.85, 0.88),
        };
        gizmos.line(carbon, tf.translation, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substituents_invert_through_a_planar_transition_state() {
        for i in 0..SUBSTITUENTS {
            let before = keyframe(Role::Substituent(i), 0);
            let transition = keyframe(Role::Substituent(i), 1);
            let after = keyframe(Role::Substituent(i), 3);
            assert!(before.x < 0.0);
            assert!(transition.x.abs() < 1e-6);
            assert!((after.x + before.x).abs() < 1e-6);
            assert!((before.length() - SUBSTITUENT_REACH).abs() < 1e-4);
        }
    }

    #[test]
    fn nucleophile_and_leaving_group_stay_on_opposite_sides() {
        for stage in 0..STAGES.len() {
            assert!(keyframe(Role::Nucleophile, stage).x < 0.0);
            assert!(keyframe(Role::LeavingGroup, stage).x > 0.0);
        }
    }

    #[test]
    fn bonds_swap_partners_across_the_stages() {
        assert_eq!(bond_state(Role::LeavingGroup, 0), BondState::Full);
        assert_eq!(bond_state(Role::Nucleophile, 1), BondState::Partial);
        assert_eq!(bond_state(Role::LeavingGroup, 1), BondState::Partial);
        assert_eq!(bond_state(Role::Nucleophile, 3), BondState::Full);
        assert_eq!(bond_state(Role::LeavingGroup, 3), BondState::None);
    }

    #[test]
    fn stage_changes_never_rebuild() {
        let base = Sn2Controls::default();
        let mut next = base;
        next.steps.advance();
        assert!(!Sn2Mechanism::needs_rebuild(&base, &next));
        assert_eq!(roles().count(), 3 + SUBSTITUENTS);
    }
}
