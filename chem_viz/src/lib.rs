//! ChemScope: interactive 3D chemistry simulations.
//!
//! Library root: catalog and routing, procedural layouts, per-frame animators,
//! scene plumbing, the scenes themselves and the SDK builder.

pub mod animation;
pub mod camera;
pub mod catalog;
pub mod config;
pub mod layout;
pub mod render;
pub mod scene;
pub mod switcher;
mod ui;

pub mod prelude;
pub mod sdk;

pub use catalog::{export_catalog, Page, RouteError, SimulationDescriptor, SimulationId, CATALOG};
pub use render::{ChemScene, SceneBuilder};
