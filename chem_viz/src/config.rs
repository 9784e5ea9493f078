//! Env parsing and constants.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{Page, RouteError};

const ROUTE_ENV: &str = "CHEMSCOPE_ROUTE";
const SEED_ENV: &str = "CHEMSCOPE_SEED";
const WINDOW_ENV: &str = "CHEMSCOPE_WINDOW";
const EXPORT_ENV: &str = "CHEMSCOPE_EXPORT_CATALOG";

pub const DEFAULT_RESOLUTION: (f32, f32) = (1280.0, 720.0);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid CHEMSCOPE_ROUTE {value:?}: {source}")]
    Route { value: String, source: RouteError },
    #[error("invalid CHEMSCOPE_SEED {0:?}: expected an unsigned integer")]
    Seed(String),
    #[error("invalid CHEMSCOPE_WINDOW {0:?}: expected WIDTHxHEIGHT")]
    Window(String),
}

/// Startup configuration. Invalid values fall back to defaults and are kept
/// in `warnings` so they can be logged once the app is running.
#[derive(Debug)]
pub struct AppConfig {
    pub initial_page: Page,
    pub seed: Option<u64>,
    pub window_resolution: (f32, f32),
    pub export_catalog: Option<PathBuf>,
    pub warnings: Vec<ConfigError>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_page: Page::Catalog,
            seed: None,
            window_resolution: DEFAULT_RESOLUTION,
            export_catalog: None,
            warnings: Vec::new(),
        }
    }
}

pub fn parse_route(raw: &str) -> Result<Page, ConfigError> {
    raw.parse().map_err(|source| ConfigError::Route {
        value: raw.to_string(),
        source,
    })
}

pub fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Seed(raw.to_string()))
}

pub fn parse_window(raw: &str) -> Result<(f32, f32), ConfigError> {
    let invalid = || ConfigError::Window(raw.to_string());
    let (w, h) = raw.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: f32 = w.trim().parse().map_err(|_| invalid())?;
    let height: f32 = h.trim().parse().map_err(|_| invalid())?;
    if width < 1.0 || height < 1.0 {
        return Err(invalid());
    }
    Ok((width, height))
}

/// Reads the `CHEMSCOPE_*` environment variables.
pub fn app_config() -> AppConfig {
    let mut config = AppConfig::default();

    if let Ok(raw) = std::env::var(ROUTE_ENV) {
        match parse_route(&raw) {
            Ok(page) => config.initial_page = page,
            Err(err) => config.warnings.push(err),
        }
    }
    if let Ok(raw) = std::env::var(SEED_ENV) {
        match parse_seed(&raw) {
            Ok(seed) => config.seed = Some(seed),
            Err(err) => config.warnings.push(err),
        }
    }
    if let Ok(raw) = std::env::var(WINDOW_ENV) {
        match parse_window(&raw) {
            Ok(resolution) => config.window_resolution = resolution,
            Err(err) => config.warnings.push(err),
        }
    }
    config.export_catalog = std::env::var_os(EXPORT_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SimulationId;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    struct EnvGuard {
        snapshot: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn capture(keys: &[&'static str]) -> Self {
            let snapshot = keys
                .iter()
                .map(|&key| (key, std::env::var(key).ok()))
                .collect();
            for key in keys {
                std::env::remove_var(key);
            }
            Self { snapshot }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.snapshot {
                match value {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    const ENV_KEYS: [&str; 4] = [ROUTE_ENV, SEED_ENV, WINDOW_ENV, EXPORT_ENV];

    #[test]
    fn defaults_when_nothing_is_set() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        let config = app_config();

        assert_eq!(config.initial_page, Page::Catalog);
        assert_eq!(config.seed, None);
        assert_eq!(config.window_resolution, DEFAULT_RESOLUTION);
        assert!(config.export_catalog.is_none());
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn reads_route_seed_and_window() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(ROUTE_ENV, "/simulations/dna-helix");
        std::env::set_var(SEED_ENV, "42");
        std::env::set_var(WINDOW_ENV, "1600x900");
        std::env::set_var(EXPORT_ENV, "out/catalog.json");

        let config = app_config();

        assert_eq!(
            config.initial_page,
            Page::Simulation(SimulationId::DnaHelix)
        );
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.window_resolution, (1600.0, 900.0));
        assert_eq!(
            config.export_catalog.as_deref(),
            Some(std::path::Path::new("out/catalog.json"))
        );
    }

    #[test]
    fn invalid_values_fall_back_with_warnings() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(ROUTE_ENV, "/simulations/philosophers-stone");
        std::env::set_var(SEED_ENV, "-3");
        std::env::set_var(WINDOW_ENV, "wide");

        let config = app_config();

        assert_eq!(config.initial_page, Page::Catalog);
        assert_eq!(config.seed, None);
        assert_eq!(config.window_resolution, DEFAULT_RESOLUTION);
        assert_eq!(config.warnings.len(), 3);
        assert!(matches!(
            config.warnings[0],
            ConfigError::Route {
                source: RouteError::UnknownSimulation(_),
                ..
            }
        ));
    }

    #[test]
    fn window_parser_rejects_zero_sizes() {
        assert!(parse_window("0x720").is_err());
        assert_eq!(parse_window(" 800 X 600 ").unwrap(), (800.0, 600.0));
    }

    #[test]
    fn route_errors_keep_their_source() {
        let err = parse_route("/simulations/alchemy").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid CHEMSCOPE_ROUTE \"/simulations/alchemy\": unknown simulation id \"alchemy\""
        );
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "unknown simulation id \"alchemy\"");
    }
}
