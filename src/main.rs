//! ChemScope: interactive 3D chemistry simulations. Runs the chem_viz app.

use std::process::ExitCode;

use bevy::prelude::*;
use chem_viz::config;
use chem_viz::export_catalog;
use chem_viz::sdk::ChemScopeBuilder;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let config = config::app_config();

    if let Some(path) = config.export_catalog.as_deref() {
        return match export_catalog(path) {
            Ok(()) => {
                println!("wrote catalog to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("catalog export failed: {err}");
                ExitCode::FAILURE
            }
        };
    }

    match ChemScopeBuilder::new().config(config).build().run() {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    }
}
