//! Bohr-model atom: nucleus plus electrons orbiting on concentric shells.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::animation::{Orbiter, Spin};
use crate::catalog::SimulationId;
use crate::layout::{evenly_spaced_phases, paired_phases, OrbitPath};
use crate::render::{ChemScene, SceneBuilder};
use crate::scene::elements::{shell_occupancy, Element};
use crate::switcher::{variant_selector, SceneVariant};

const NUCLEUS_RADIUS: f32 = 0.5;
const FIRST_SHELL_RADIUS: f32 = 1.4;
const SHELL_GAP: f32 = 1.1;
const ELECTRON_RADIUS: f32 = 0.12;
const BASE_ANGULAR_SPEED: f32 = 1.8;
const PAIR_SPREAD: f32 = 0.35;

const ELEMENTS: [Element; 15] = [
    Element::H,
    Element::He,
    Element::Li,
    Element::B,
    Element::C,
    Element::N,
    Element::O,
    Element::F,
    Element::Ne,
    Element::Na,
    Element::Mg,
    Element::Cl,
    Element::Ar,
    Element::K,
    Element::Ca,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Arrangement {
    #[default]
    Even,
    Paired,
}

impl SceneVariant for Arrangement {
    const ALL: &'static [Self] = &[Arrangement::Even, Arrangement::Paired];

    fn label(self) -> &'static str {
        match self {
            Arrangement::Even => "Evenly spread",
            Arrangement::Paired => "Electron pairs",
        }
    }
}

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct AtomControls {
    pub element: Element,
    pub arrangement: Arrangement,
}

impl Default for AtomControls {
    fn default() -> Self {
        Self {
            element: Element::C,
            arrangement: Arrangement::Even,
        }
    }
}

/// Orbit paths for every electron, grouped by shell (innermost first).
pub fn shell_orbits(element: Element, arrangement: Arrangement) -> Vec<Vec<OrbitPath>> {
    shell_occupancy(element.atomic_number())
        .into_iter()
        .enumerate()
        .map(|(shell, electrons)| {
            let radius = FIRST_SHELL_RADIUS + shell as f32 * SHELL_GAP;
            let speed = BASE_ANGULAR_SPEED / (shell as f32 + 1.0);
            let phases = match arrangement {
                Arrangement::Even => evenly_spaced_phases(electrons as usize),
                Arrangement::Paired => paired_phases(electrons as usize, PAIR_SPREAD),
            };
            phases
                .into_iter()
                .map(|phase| OrbitPath::new(radius, speed, phase))
                .collect()
        })
        .collect()
}

pub struct AtomicStructure;

impl ChemScene for AtomicStructure {
    const ID: SimulationId = SimulationId::AtomicStructure;
    type Controls = AtomControls;

    fn camera_start() -> Option<Vec3> {
        Some(Vec3::new(0.0, 6.0, 9.0))
    }

    fn build(builder: &mut SceneBuilder, controls: &AtomControls) {
        let nucleus = builder.glowing(Color::srgb(0.9, 0.3, 0.25), 0.6);
        builder
            .spawn(
                Sphere::new(NUCLEUS_RADIUS),
                nucleus,
                Transform::default(),
            )
            .insert(Spin::about_y(0.4));

        let electron_color = Color::srgb(0.3, 0.6, 1.0);
        for shell in shell_orbits(controls.element, controls.arrangement) {
            let Some(radius) = shell.first().map(|p| p.radius) else {
                continue;
            };
            builder.torus(Vec3::ZERO, radius, 0.015, Color::srgba(0.7, 0.75, 0.85, 0.35));
            for path in shell {
                let electron = builder.glowing(electron_color, 2.0);
                builder
                    .spawn(
                        Sphere::new(ELECTRON_RADIUS),
                        electron,
                        Transform::from_translation(path.position(0.0)),
                    )
                    .insert(Orbiter {
                        center: Vec3::ZERO,
                        path,
                    });
            }
        }
    }

    fn controls_ui(ui: &mut egui::Ui, controls: &mut AtomControls) {
        egui::ComboBox::from_label("Element")
            .selected_text(format!(
                "{} (Z = {})",
                controls.element.symbol(),
                controls.element.atomic_number()
            ))
            .show_ui(ui, |ui| {
                for element in ELEMENTS {
                    ui.selectable_value(&mut controls.element, element, element.symbol());
                }
            });
        variant_selector(ui, &mut controls.arrangement);

        let shells = shell_occupancy(controls.element.atomic_number());
        let configuration = shells
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        ui.label(format!("Shells: {configuration}"));
    }
}
