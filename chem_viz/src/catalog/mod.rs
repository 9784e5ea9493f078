//! Simulation catalog, routes and the JSON export.

mod model;
mod route;

use std::path::Path;

use thiserror::Error;

pub use model::{
    partition, CatalogSections, Category, SimulationDescriptor, SimulationId, CATALOG,
};
pub use route::Page;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("malformed route {0:?}")]
    Malformed(String),
    #[error("unknown simulation id {0:?}")]
    UnknownSimulation(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write catalog file: {0}")]
    Io(#[from] std::io::Error),
}

/// The catalog as pretty JSON, in the shape the landing page consumes.
pub fn catalog_json() -> Result<String, CatalogError> {
    Ok(serde_json::to_string_pretty(CATALOG)?)
}

/// Write the catalog JSON to `path`, creating parent directories.
pub fn export_catalog(path: &Path) -> Result<(), CatalogError> {
    let json = catalog_json()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    Ok(())
}
