//! Minimal prelude for SDK consumers.

pub use crate::animation::{animation_plugin, SceneClock};
pub use crate::catalog::{partition, Category, Page, SimulationDescriptor, SimulationId, CATALOG};
pub use crate::config::{app_config, AppConfig};
pub use crate::render::{scene_plugin, ChemScene, SceneBuilder, SceneContent, SceneSeed};
pub use crate::scene::register_scenes;
pub use crate::sdk::ChemScopeBuilder;
pub use crate::switcher::{SceneVariant, StepCycle};
