//! Ideal gas in a box with live p–V and T–s diagrams.
//!
//! Particle count and volume rebuild the box; temperature only retunes the
//! particles already in flight (speed scales with √T, color shifts cold to hot).

use bevy::gizmos::config::GizmoConfigStore;
use bevy::prelude::*;
use bevy_egui::egui;
use rand::Rng;

use crate::animation::{ColorFade, Drifter};
use crate::catalog::SimulationId;
use crate::render::{ChemScene, SceneBuilder};
use crate::switcher::{variant_selector, SceneVariant};

pub const GAS_CONSTANT: f32 = 8.314;
/// Amount of gas each rendered particle stands for.
pub const MOLES_PER_PARTICLE: f32 = 0.01;
pub const REFERENCE_TEMPERATURE: f32 = 300.0;
pub const STANDARD_PRESSURE_KPA: f32 = 101.325;
/// Monatomic ideal gas, cp / R.
const CP_OVER_R: f32 = 2.5;

const MIN_TEMPERATURE: f32 = 100.0;
const MAX_TEMPERATURE: f32 = 600.0;
const MIN_VOLUME: f32 = 1.0;
const MAX_VOLUME: f32 = 4.0;
const BASE_PARTICLE_SPEED: f32 = 1.5;
const PARTICLE_RADIUS: f32 = 0.07;

const PANEL_ORIGIN: Vec3 = Vec3::new(2.6, -1.6, 0.0);
const PANEL_SIZE: Vec2 = Vec2::new(2.8, 1.4);
const ENTROPY_RANGE: (f32, f32) = (-8.0, 3.0);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiagramMode {
    #[default]
    PressureVolume,
    TemperatureEntropy,
    Combined,
}

impl SceneVariant for DiagramMode {
    const ALL: &'static [Self] = &[
        DiagramMode::PressureVolume,
        DiagramMode::TemperatureEntropy,
        DiagramMode::Combined,
    ];

    fn label(self) -> &'static str {
        match self {
            DiagramMode::PressureVolume => "p–V",
            DiagramMode::TemperatureEntropy => "T–s",
            DiagramMode::Combined => "Both",
        }
    }
}

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct GasControls {
    pub particle_count: usize,
    /// Kelvin.
    pub temperature: f32,
    /// Liters.
    pub volume: f32,
    pub diagram: DiagramMode,
}

impl Default for GasControls {
    fn default() -> Self {
        Self {
            particle_count: 60,
            temperature: REFERENCE_TEMPERATURE,
            volume: 2.0,
            diagram: DiagramMode::PressureVolume,
        }
    }
}

impl GasControls {
    pub fn moles(&self) -> f32 {
        self.particle_count as f32 * MOLES_PER_PARTICLE
    }

    pub fn pressure(&self) -> f32 {
        ideal_pressure(self.moles(), self.temperature, self.volume)
    }
}

#[derive(Component)]
pub struct GasParticle;

/// p = nRT / V, in kPa for V in liters.
pub fn ideal_pressure(moles: f32, temperature: f32, volume: f32) -> f32 {
    moles * GAS_CONSTANT * temperature / volume
}

/// Molar entropy relative to the reference state, in units of R.
pub fn specific_entropy(temperature: f32, pressure_ratio: f32) -> f32 {
    CP_OVER_R * (temperature / REFERENCE_TEMPERATURE).ln() - pressure_ratio.ln()
}

/// Temperature along an isobar at the given entropy (inverse of [`specific_entropy`]).
pub fn isobar_temperature(entropy: f32, pressure_ratio: f32) -> f32 {
    REFERENCE_TEMPERATURE * ((entropy + pressure_ratio.ln()) / CP_OVER_R).exp()
}

/// Particle speed multiplier; mean molecular speed grows with √T.
pub fn thermal_speed_scale(temperature: f32) -> f32 {
    (temperature / REFERENCE_TEMPERATURE).max(0.0).sqrt()
}

pub fn temperature_color(temperature: f32) -> Color {
    let t = ((temperature - MIN_TEMPERATURE) / (MAX_TEMPERATURE - MIN_TEMPERATURE)).clamp(0.0, 1.0);
    Color::srgb(0.3 + 0.7 * t, 0.45, 1.0 - 0.7 * t)
}

/// Half extents of the cubic container for a volume in liters.
pub fn box_half_extents(volume: f32) -> Vec3 {
    Vec3::splat(volume.max(MIN_VOLUME).cbrt())
}

pub struct GasLaws;

impl ChemScene for GasLaws {
    const ID: SimulationId = SimulationId::GasLaws;
    type Controls = GasControls;

    fn camera_start() -> Option<Vec3> {
        Some(Vec3::new(1.5, 1.5, 9.0))
    }

    fn build(builder: &mut SceneBuilder, controls: &GasControls) {
        let half = box_half_extents(controls.volume);
        let center = Vec3::new(-1.2, 0.0, 0.0);
        builder.glass(center, half * 2.0, Color::srgba(0.6, 0.8, 1.0, 0.12));

        let speed = thermal_speed_scale(controls.temperature);
        let color = temperature_color(controls.temperature);
        for _ in 0..controls.particle_count {
            let rng = builder.rng();
            let offset = Vec3::new(
                rng.gen_range(-half.x..half.x),
                rng.gen_range(-half.y..half.y),
                rng.gen_range(-half.z..half.z),
            );
            let direction = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )
            .try_normalize()
            .unwrap_or(Vec3::X);

            let material = builder.material(color);
            builder
                .spawn(
                    Sphere::new(PARTICLE_RADIUS),
                    material,
                    Transform::from_translation(center + offset),
                )
                .insert((
                    GasParticle,
                    Drifter {
                        velocity: direction * BASE_PARTICLE_SPEED,
                        speed,
                        center,
                        half_extents: half,
                    },
                    ColorFade::toward(color, 0.08),
                ));
        }
    }

    fn needs_rebuild(previous: &GasControls, current: &GasControls) -> bool {
        previous.particle_count != current.particle_count || previous.volume != current.volume
    }

    fn controls_ui(ui: &mut egui::Ui, controls: &mut GasControls) {
        ui.add(egui::Slider::new(&mut controls.particle_count, 20..=200).text("Particles"));
        ui.add(
            egui::Slider::new(&mut controls.temperature, MIN_TEMPERATURE..=MAX_TEMPERATURE)
                .text("Temperature (K)"),
        );
        ui.add(egui::Slider::new(&mut controls.volume, MIN_VOLUME..=MAX_VOLUME).text("Volume (L)"));
        ui.separator();
        variant_selector(ui, &mut controls.diagram);
        ui.label(format!("n = {:.2} mol", controls.moles()));
        ui.label(format!("p = {:.0} kPa", controls.pressure()));
        ui.label(format!("pV/nT = {:.3}", GAS_CONSTANT));
    }

    fn extend(app: &mut App) {
        app.add_systems(
            Update,
            (
                apply_temperature.run_if(resource_exists_and_changed::<GasControls>),
                draw_diagrams
                    .run_if(resource_exists::<GasControls>)
                    .run_if(resource_exists::<GizmoConfigStore>),
            )
                .run_if(in_state(Self::page())),
        );
    }
}

fn apply_temperature(
    controls: Res<GasControls>,
    mut particles: Query<(&mut Drifter, &mut ColorFade), With<GasParticle>>,
) {
    let speed = thermal_speed_scale(controls.temperature);
    let target = temperature_color(controls.temperature).to_linear();
    for (mut drifter, mut fade) in &mut particles {
        drifter.speed = speed;
        fade.target = target;
    }
}

fn draw_diagrams(controls: Res<GasControls>, mut gizmos: Gizmos) {
    match controls.diagram {
        DiagramMode::PressureVolume => draw_pv(&mut gizmos, &controls, PANEL_ORIGIN),
        DiagramMode::TemperatureEntropy => draw_ts(&mut gizmos, &controls, PANEL_ORIGIN),
        DiagramMode::Combined => {
            draw_pv(&mut gizmos, &controls, PANEL_ORIGIN + Vec3::Y * (PANEL_SIZE.y + 0.5));
            draw_ts(&mut gizmos, &controls, PANEL_ORIGIN);
        }
    }
}

fn plot_point(origin: Vec3, x: f32, y: f32) -> Vec3 {
    origin + Vec3::new(x.clamp(0.0, 1.0) * PANEL_SIZE.x, y.clamp(0.0, 1.0) * PANEL_SIZE.y, 0.0)
}

fn draw_axes(gizmos: &mut Gizmos, origin: Vec3) {
    let axis = Color::srgb(0.75, 0.78, 0.85);
    gizmos.line(origin, origin + Vec3::X * PANEL_SIZE.x, axis);
    gizmos.line(origin, origin + Vec3::Y * PANEL_SIZE.y, axis);
}

fn draw_marker(gizmos: &mut Gizmos, at: Vec3, color: Color) {
    let r = 0.06;
    gizmos.line(at - Vec3::X * r, at + Vec3::X * r, color);
    gizmos.line(at - Vec3::Y * r, at + Vec3::Y * r, color);
}

fn draw_pv(gizmos: &mut Gizmos, controls: &GasControls, origin: Vec3) {
    draw_axes(gizmos, origin);
    let n = controls.moles();
    let p_max = ideal_pressure(n, MAX_TEMPERATURE, MIN_VOLUME);
    let norm_v = |v: f32| (v - MIN_VOLUME) / (MAX_VOLUME - MIN_VOLUME);
    let isotherm = |t: f32| {
        (0..=40).map(move |i| {
            let v = MIN_VOLUME + (MAX_VOLUME - MIN_VOLUME) * i as f32 / 40.0;
            plot_point(origin, norm_v(v), ideal_pressure(n, t, v) / p_max)
        })
    };
    gizmos.linestrip(isotherm(REFERENCE_TEMPERATURE), Color::srgba(0.6, 0.6, 0.7, 0.5));
    gizmos.linestrip(isotherm(controls.temperature), temperature_color(controls.temperature));
    draw_marker(
        gizmos,
        plot_point(origin, norm_v(controls.volume), controls.pressure() / p_max),
        Color::WHITE,
    );
}

fn draw_ts(gizmos: &mut Gizmos, controls: &GasControls, origin: Vec3) {
    draw_axes(gizmos, origin);
    let (s_min, s_max) = ENTROPY_RANGE;
    let norm_s = |s: f32| (s - s_min) / (s_max - s_min);
    let norm_t = |t: f32| t / (MAX_TEMPERATURE * 1.2);
    let isobar = |ratio: f32| {
        (0..=40).map(move |i| {
            let s = s_min + (s_max - s_min) * i as f32 / 40.0;
            plot_point(origin, norm_s(s), norm_t(isobar_temperature(s, ratio)))
        })
    };
    let ratio = controls.pressure() / STANDARD_PRESSURE_KPA;
    gizmos.linestrip(isobar(1.0), Color::srgba(0.6, 0.6, 0.7, 0.5));
    gizmos.linestrip(isobar(ratio), Color::srgb(0.95, 0.7, 0.3));
    draw_marker(
        gizmos,
        plot_point(
            origin,
            norm_s(specific_entropy(controls.temperature, ratio)),
            norm_t(controls.temperature),
        ),
        Color::WHITE,
    );
}
