pub mod atomic_structure;
pub mod benzene;
pub mod dna_helix;
pub mod electrolysis;
pub mod elements;
pub mod galvanic_cell;
pub mod gas_laws;
pub mod ionic_lattice;
pub mod molecular_geometry;
pub mod polymerization;
pub mod precipitation;
pub mod sn2_mechanism;

use bevy::prelude::*;

use crate::render::{scene_plugin, ChemScene};
use crate::ui::scene_panel_plugin;

pub use atomic_structure::AtomicStructure;
pub use benzene::Benzene;
pub use dna_helix::DnaHelix;
pub use electrolysis::Electrolysis;
pub use galvanic_cell::GalvanicCell;
pub use gas_laws::GasLaws;
pub use ionic_lattice::IonicLattice;
pub use molecular_geometry::MolecularGeometry;
pub use polymerization::Polymerization;
pub use precipitation::Precipitation;
pub use sn2_mechanism::Sn2Mechanism;

fn register<S: ChemScene>(app: &mut App, panels: bool) {
    scene_plugin::<S>(app);
    if panels {
        scene_panel_plugin::<S>(app);
    }
}

/// Registers every catalog scene. `panels` adds the egui sidebar for each,
/// which needs `EguiPlugin`; headless apps pass `false`.
pub fn register_scenes(app: &mut App, panels: bool) {
    register::<AtomicStructure>(app, panels);
    register::<MolecularGeometry>(app, panels);
    register::<IonicLattice>(app, panels);
    register::<GasLaws>(app, panels);
    register::<Electrolysis>(app, panels);
    register::<GalvanicCell>(app, panels);
    register::<Precipitation>(app, panels);
    register::<Benzene>(app, panels);
    register::<DnaHelix>(app, panels);
    register::<Polymerization>(app, panels);
    register::<Sn2Mechanism>(app, panels);
}
