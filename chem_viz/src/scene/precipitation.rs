//! Precipitation reaction in stages: mixing, nucleation, growth, settling.
//!
//! Changing the reaction rebuilds the beaker. Changing the stage only retargets
//! the solution's color fade, reveals precipitate shells and slows the ions.

use std::time::Duration;

use bevy::prelude::*;
use bevy_egui::egui;
use rand::Rng;

use crate::animation::{lerp_color_toward, ColorFade, Drifter};
use crate::catalog::SimulationId;
use crate::layout::cubic_lattice;
use crate::render::{ChemScene, SceneBuilder};
use crate::switcher::{
    auto_advance_system, step_controls, variant_selector, SceneVariant, StepCycle,
    SteppedControls,
};

const STAGES: [&str; 5] = [
    "Two clear solutions of soluble salts",
    "Solutions mix; ions collide",
    "Nucleation: the first insoluble clusters form",
    "Crystal growth clouds the solution",
    "Precipitate settles to the bottom",
];
const CLOUDINESS: [f32; 5] = [0.0, 0.35, 0.7, 1.0, 0.3];

const SOLUTION_CENTER: Vec3 = Vec3::new(0.0, -0.3, 0.0);
const SOLUTION_HALF: Vec3 = Vec3::new(1.3, 0.9, 0.7);
const PILE_CENTER: Vec3 = Vec3::new(0.0, -0.85, 0.0);
const PILE_SPACING: f32 = 0.16;
const PILE_HALF_EXTENT: i32 = 2;
const IONS_PER_SPECIES: usize = 14;
const FADE_FACTOR: f32 = 0.05;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reaction {
    #[default]
    SilverChloride,
    BariumSulfate,
    LeadIodide,
    CopperHydroxide,
}

impl Reaction {
    pub fn equation(self) -> &'static str {
        match self {
            Reaction::SilverChloride => "Ag⁺(aq) + Cl⁻(aq) → AgCl(s)",
            Reaction::BariumSulfate => "Ba²⁺(aq) + SO₄²⁻(aq) → BaSO₄(s)",
            Reaction::LeadIodide => "Pb²⁺(aq) + 2I⁻(aq) → PbI₂(s)",
            Reaction::CopperHydroxide => "Cu²⁺(aq) + 2OH⁻(aq) → Cu(OH)₂(s)",
        }
    }

    pub fn precipitate_color(self) -> Color {
        match self {
            Reaction::SilverChloride | Reaction::BariumSulfate => Color::srgb(0.95, 0.95, 0.95),
            Reaction::LeadIodide => Color::srgb(0.98, 0.85, 0.15),
            Reaction::CopperHydroxide => Color::srgb(0.35, 0.6, 0.95),
        }
    }

    /// (cation, anion) ion colors.
    fn ion_colors(self) -> (Color, Color) {
        let (cation, anion) = match self {
            Reaction::SilverChloride => ((0.75, 0.75, 0.8), (0.12, 0.94, 0.12)),
            Reaction::BariumSulfate => ((0.0, 0.79, 0.0), (1.0, 1.0, 0.19)),
            Reaction::LeadIodide => ((0.34, 0.35, 0.38), (0.58, 0.0, 0.58)),
            Reaction::CopperHydroxide => ((0.78, 0.5, 0.2), (1.0, 0.05, 0.05)),
        };
        (
            Color::srgb(cation.0, cation.1, cation.2),
            Color::srgb(anion.0, anion.1, anion.2),
        )
    }
}

impl SceneVariant for Reaction {
    const ALL: &'static [Self] = &[
        Reaction::SilverChloride,
        Reaction::BariumSulfate,
        Reaction::LeadIodide,
        Reaction::CopperHydroxide,
    ];

    fn label(self) -> &'static str {
        match self {
            Reaction::SilverChloride => "AgCl",
            Reaction::BariumSulfate => "BaSO₄",
            Reaction::LeadIodide => "PbI₂",
            Reaction::CopperHydroxide => "Cu(OH)₂",
        }
    }
}

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct PrecipitationControls {
    pub reaction: Reaction,
    pub steps: StepCycle,
    pub playing: bool,
}

impl Default for PrecipitationControls {
    fn default() -> Self {
        Self {
            reaction: Reaction::SilverChloride,
            steps: StepCycle::new(STAGES.len()),
            playing: true,
        }
    }
}

impl SteppedControls for PrecipitationControls {
    const STEP_PERIOD: Duration = Duration::from_millis(2_500);

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

#[derive(Component)]
pub struct Solution;

#[derive(Component)]
pub struct SolvatedIon;

/// A precipitate grain, revealed once growth reaches its shell.
#[derive(Component, Clone, Copy, Debug)]
pub struct PrecipitateSite {
    pub shell: i32,
}

/// Outermost precipitate shell visible at `step`, if any.
pub fn visible_shell_limit(step: usize) -> Option<i32> {
    match step {
        0 | 1 => None,
        2 => Some(0),
        3 => Some(1),
        _ => Some(PILE_HALF_EXTENT),
    }
}

pub fn site_visibility(shell: i32, step: usize) -> Visibility {
    match visible_shell_limit(step) {
        Some(limit) if shell <= limit => Visibility::Inherited,
        _ => Visibility::Hidden,
    }
}

pub fn solution_color(reaction: Reaction, step: usize) -> LinearRgba {
    let clear = Color::srgba(0.8, 0.88, 0.95, 0.15).to_linear();
    let cloud = reaction.precipitate_color().with_alpha(0.55).to_linear();
    let amount = CLOUDINESS[step.min(CLOUDINESS.len() - 1)];
    lerp_color_toward(clear, cloud, amount)
}

/// Ions slow down as they are consumed into the solid.
pub fn ion_speed(step: usize) -> f32 {
    1.0 - 0.2 * step.min(STAGES.len() - 1) as f32
}

pub struct Precipitation;

impl ChemScene for Precipitation {
    const ID: SimulationId = SimulationId::Precipitation;
    type Controls = PrecipitationControls;

    fn camera_start() -> Option<Vec3> {
        Some(Vec3::new(0.0, 1.2, 5.5))
    }

    fn build(builder: &mut SceneBuilder, controls: &PrecipitationControls) {
        let reaction = controls.reaction;
        let step = controls.steps.index();

        builder.glass(
            SOLUTION_CENTER + Vec3::Y * 0.2,
            SOLUTION_HALF * 2.0 + Vec3::new(0.1, 0.5, 0.1),
            Color::srgba(0.85, 0.9, 1.0, 0.08),
        );
        let solution = solution_color(reaction, step);
        let material = builder.translucent(solution.into());
        builder
            .spawn(
                Cuboid::from_size(SOLUTION_HALF * 2.0),
                material,
                Transform::from_translation(SOLUTION_CENTER),
            )
            .insert((Solution, ColorFade::toward(solution.into(), FADE_FACTOR)));

        let (cation, anion) = reaction.ion_colors();
        for color in [cation, anion] {
            for _ in 0..IONS_PER_SPECIES {
                let rng = builder.rng();
                let offset = Vec3::new(
                    rng.gen_range(-SOLUTION_HALF.x..SOLUTION_HALF.x),
                    rng.gen_range(-SOLUTION_HALF.y..SOLUTION_HALF.y),
                    rng.gen_range(-SOLUTION_HALF.z..SOLUTION_HALF.z),
                );
                let velocity = Vec3::new(
                    rng.gen_range(-0.6..0.6),
                    rng.gen_range(-0.3..0.3),
                    rng.gen_range(-0.4..0.4),
                );
                builder.atom(SOLUTION_CENTER + offset, 0.06, color).insert((
                    SolvatedIon,
                    Drifter {
                        velocity,
                        speed: ion_speed(step),
                        center: SOLUTION_CENTER,
                        half_extents: SOLUTION_HALF,
                    },
                ));
            }
        }

        let grain = reaction.precipitate_color();
        for site in cubic_lattice(PILE_HALF_EXTENT, PILE_SPACING) {
            // flatten the pile so it sits on the bottom
            let position = PILE_CENTER + site.position * Vec3::new(1.0, 0.35, 1.0);
            builder
                .block(position, Vec3::splat(PILE_SPACING * 0.8), grain)
                .insert((
                    PrecipitateSite { shell: site.shell() },
                    site_visibility(site.shell(), step),
                ));
        }
    }

    fn needs_rebuild(previous: &PrecipitationControls, current: &PrecipitationControls) -> bool {
        previous.reaction != current.reaction
    }

    fn controls_ui(ui: &mut egui::Ui, controls: &mut PrecipitationControls) {
        variant_selector(ui, &mut controls.reaction);
        ui.label(controls.reaction.equation());
        ui.separator();
        step_controls(ui, &mut controls.steps, &mut controls.playing);
        ui.label(STAGES[controls.steps.index()]);
    }

    fn extend(app: &mut App) {
        app.add_systems(
            Update,
            (
                auto_advance_system::<PrecipitationControls>,
                apply_stage.run_if(resource_exists_and_changed::<PrecipitationControls>),
            )
                .chain()
                .run_if(in_state(Self::page())),
        );
    }
}

fn apply_stage(
    controls: Res<PrecipitationControls>,
    mut solution: Query<&mut ColorFade, With<Solution>>,
    mut ions: Query<&mut Drifter, With<SolvatedIon>>,
    mut sites: Query<(&PrecipitateSite, &mut Visibility)>,
) {
    let step = controls.steps.index();
    let target = solution_color(controls.reaction, step);
    for mut fade in &mut solution {
        fade.target = target;
    }
    let speed = ion_speed(step);
    for mut drifter in &mut ions {
        drifter.speed = speed;
    }
    for (site, mut visibility) in &mut sites {
        visibility.set_if_neq(site_visibility(site.shell, step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precipitate_grows_outward_with_stage() {
        assert_eq!(site_visibility(0, 1), Visibility::Hidden);
        assert_eq!(site_visibility(0, 2), Visibility::Inherited);
        assert_eq!(site_visibility(1, 2), Visibility::Hidden);
        assert_eq!(site_visibility(PILE_HALF_EXTENT, 4), Visibility::Inherited);
    }

    #[test]
    fn solution_is_cloudiest_during_growth() {
        let r = Reaction::LeadIodide;
        let alpha = |step| solution_color(r, step).alpha;
        assert!(alpha(3) > alpha(2));
        assert!(alpha(3) > alpha(4));
        assert!(alpha(0) < alpha(1));
    }

    #[test]
    fn stage_changes_do_not_rebuild() {
        let base = PrecipitationControls::default();
        let mut later = base;
        later.steps.advance();
        later.playing = false;
        assert!(!Precipitation::needs_rebuild(&base, &later));
        let other = PrecipitationControls {
            reaction: Reaction::BariumSulfate,
            ..base
        };
        assert!(Precipitation::needs_rebuild(&base, &other));
    }
}
