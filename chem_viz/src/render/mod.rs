//! Scene trait and the generic mount / rebuild / unmount plumbing every scene
//! plugs into.

mod builder;

use bevy::prelude::*;
use bevy_egui::egui;

use crate::animation::SceneClock;
use crate::camera::OrbitCamera;
use crate::catalog::{Page, SimulationId};

pub use builder::SceneBuilder;

/// Camera position used when a scene does not pick its own.
pub const DEFAULT_CAMERA_START: Vec3 = Vec3::new(0.0, 3.0, 10.0);

/// One simulation page: authored geometry, local controls and animators.
pub trait ChemScene: Send + Sync + 'static {
    const ID: SimulationId;

    /// Scene-local UI state, created on mount and dropped on unmount.
    type Controls: Resource + Clone + PartialEq + Default;

    fn page() -> Page {
        Page::Simulation(Self::ID)
    }

    fn camera_start() -> Option<Vec3> {
        None
    }

    /// Spawn the scene's entities for the given controls.
    fn build(builder: &mut SceneBuilder, controls: &Self::Controls);

    /// Whether a controls change requires rebuilding the geometry. Scenes
    /// that react to some fields in place (colors, speeds) narrow this.
    fn needs_rebuild(previous: &Self::Controls, current: &Self::Controls) -> bool {
        previous != current
    }

    /// Widgets shown in the shell sidebar below the description.
    fn controls_ui(_ui: &mut egui::Ui, _controls: &mut Self::Controls) {}

    /// Extra systems (in-place reactions, auto-advance, gizmo overlays).
    fn extend(_app: &mut App) {}
}

/// Marker for entities owned by the mounted scene's geometry.
#[derive(Component)]
pub struct SceneContent;

/// Fixed seed for per-mount random draws; `None` draws a fresh seed.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct SceneSeed(pub Option<u64>);

/// Chrome shown around the mounted scene.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SceneShell {
    pub page: Page,
    pub title: String,
    pub description: String,
    pub camera_start: Vec3,
    pub is_premium: bool,
}

impl SceneShell {
    pub fn for_simulation(id: SimulationId, camera_start: Option<Vec3>) -> Self {
        let descriptor = id.descriptor();
        Self {
            page: Page::Simulation(id),
            title: descriptor.title.to_string(),
            description: descriptor.desc.to_string(),
            camera_start: camera_start.unwrap_or(DEFAULT_CAMERA_START),
            is_premium: descriptor.is_premium,
        }
    }
}

/// Controls the current geometry was built from, plus the mount seed.
#[derive(Resource)]
struct MountedLayout<C: Resource + Clone> {
    controls: C,
    seed: u64,
}

/// Registers mount, rebuild and unmount systems for `S`.
pub fn scene_plugin<S: ChemScene>(app: &mut App) {
    let page = S::page();
    app.add_systems(OnEnter(page), mount_scene::<S>)
        .add_systems(OnExit(page), unmount_scene::<S>)
        .add_systems(Update, rebuild_scene::<S>.run_if(in_state(page)));
    S::extend(app);
}

fn mount_scene<S: ChemScene>(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    seed: Option<Res<SceneSeed>>,
    mut clock: ResMut<SceneClock>,
) {
    let page = S::page();
    let seed = seed.and_then(|s| s.0).unwrap_or_else(rand::random);
    let controls = S::Controls::default();
    let shell = SceneShell::for_simulation(S::ID, S::camera_start());

    clock.reset();
    spawn_viewport(&mut commands, page, shell.camera_start);

    let mut builder = SceneBuilder::new(&mut commands, &mut meshes, &mut materials, page, seed);
    S::build(&mut builder, &controls);

    info!("mounted {} (seed {seed})", page);
    commands.insert_resource(MountedLayout {
        controls: controls.clone(),
        seed,
    });
    commands.insert_resource(controls);
    commands.insert_resource(shell);
}

fn rebuild_scene<S: ChemScene>(
    mut commands: Commands,
    controls: Res<S::Controls>,
    mounted: Option<ResMut<MountedLayout<S::Controls>>>,
    content: Query<Entity, With<SceneContent>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !controls.is_changed() || controls.is_added() {
        return;
    }
    let Some(mut mounted) = mounted else {
        return;
    };
    if !S::needs_rebuild(&mounted.controls, &controls) {
        return;
    }

    for entity in &content {
        commands.entity(entity).despawn_recursive();
    }
    let mut builder = SceneBuilder::new(
        &mut commands,
        &mut meshes,
        &mut materials,
        S::page(),
        mounted.seed,
    );
    S::build(&mut builder, &controls);
    mounted.controls = controls.clone();
    debug!("rebuilt {}", S::page());
}

fn unmount_scene<S: ChemScene>(mut commands: Commands) {
    commands.remove_resource::<S::Controls>();
    commands.remove_resource::<MountedLayout<S::Controls>>();
    commands.remove_resource::<SceneShell>();
    info!("unmounted {}", S::page());
}

fn spawn_viewport(commands: &mut Commands, page: Page, camera_start: Vec3) {
    let orbit = OrbitCamera::looking_from(camera_start, Vec3::ZERO);
    commands.spawn((
        Camera3d::default(),
        orbit.transform(),
        orbit,
        StateScoped(page),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
        StateScoped(page),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });
}
