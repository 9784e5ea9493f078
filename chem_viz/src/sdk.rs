//! SDK entry points and builder for composing the ChemScope app.

use bevy::prelude::*;

use crate::animation::animation_plugin;
use crate::camera::orbit_camera_plugin;
use crate::catalog::Page;
use crate::config::{self, AppConfig, ConfigError};
use crate::render::SceneSeed;
use crate::scene::register_scenes;
use crate::ui::{hud_plugin, ui_plugin};

/// Config problems found at startup, logged once the log plugin is up.
#[derive(Resource, Default)]
struct StartupWarnings(Vec<ConfigError>);

/// Builder for constructing a ChemScope app with customizable plugins.
pub struct ChemScopeBuilder {
    initial_page: Page,
    seed: Option<u64>,
    warnings: Vec<ConfigError>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_orbit_camera: bool,
    enable_hud: bool,
}

impl Default for ChemScopeBuilder {
    fn default() -> Self {
        Self {
            initial_page: Page::Catalog,
            seed: None,
            warnings: Vec::new(),
            window_title: "ChemScope".to_string(),
            window_resolution: config::DEFAULT_RESOLUTION,
            clear_color: Color::srgb(0.05, 0.05, 0.08),
            enable_orbit_camera: true,
            enable_hud: true,
        }
    }
}

impl ChemScopeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a parsed environment configuration. Its warnings are logged at startup.
    pub fn config(mut self, config: AppConfig) -> Self {
        self.initial_page = config.initial_page;
        self.seed = config.seed;
        self.window_resolution = config.window_resolution;
        self.warnings = config.warnings;
        self
    }

    /// Read the configuration from `CHEMSCOPE_*` environment variables.
    pub fn env_config(self) -> Self {
        self.config(config::app_config())
    }

    pub fn initial_page(mut self, page: Page) -> Self {
        self.initial_page = page;
        self
    }

    /// Fix the seed used for per-mount random draws.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_orbit_camera(mut self) -> Self {
        self.enable_orbit_camera = false;
        self
    }

    pub fn disable_hud(mut self) -> Self {
        self.enable_hud = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(SceneSeed(self.seed))
        .insert_resource(StartupWarnings(self.warnings))
        .insert_state(self.initial_page)
        .enable_state_scoped_entities::<Page>()
        .add_plugins((animation_plugin, ui_plugin))
        .add_systems(Startup, log_startup);

        register_scenes(&mut app, true);

        if self.enable_orbit_camera {
            app.add_plugins(orbit_camera_plugin);
        }
        if self.enable_hud {
            app.add_plugins(hud_plugin);
        }

        app
    }
}

fn log_startup(
    mut commands: Commands,
    warnings: Res<StartupWarnings>,
    page: Res<State<Page>>,
    seed: Res<SceneSeed>,
) {
    for warning in &warnings.0 {
        warn!("{warning}; using the default");
    }
    match seed.0 {
        Some(seed) => info!("starting at {} with seed {seed}", page.get()),
        None => info!("starting at {}", page.get()),
    }
    commands.remove_resource::<StartupWarnings>();
}
