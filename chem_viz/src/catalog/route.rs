//! URL-style routes and the `Page` state they map onto.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

use crate::catalog::{RouteError, SimulationId};

const SIMULATIONS_PREFIX: &str = "/simulations/";

/// Top-level page; one Bevy state per route.
#[derive(States, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Catalog,
    Pricing,
    Simulation(SimulationId),
}

impl Page {
    pub fn path(&self) -> String {
        match self {
            Page::Catalog => "/".to_string(),
            Page::Pricing => "/pricing".to_string(),
            Page::Simulation(id) => format!("{SIMULATIONS_PREFIX}{id}"),
        }
    }

    pub fn simulation(&self) -> Option<SimulationId> {
        match self {
            Page::Simulation(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Page {
    type Err = RouteError;

    /// Accepts `/`, `/pricing` and `/simulations/<id>`; a trailing slash is ignored.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let path = raw.trim();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" if path.starts_with('/') => Ok(Page::Catalog),
            "/pricing" => Ok(Page::Pricing),
            _ => {
                let id = trimmed
                    .strip_prefix(SIMULATIONS_PREFIX)
                    .filter(|rest| !rest.is_empty() && !rest.contains('/'))
                    .ok_or_else(|| RouteError::Malformed(raw.to_string()))?;
                Ok(Page::Simulation(id.parse()?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!("/".parse::<Page>().unwrap(), Page::Catalog);
        assert_eq!("/pricing/".parse::<Page>().unwrap(), Page::Pricing);
        assert_eq!(
            "/simulations/benzene".parse::<Page>().unwrap(),
            Page::Simulation(SimulationId::Benzene)
        );
    }

    #[test]
    fn rejects_unknown_and_malformed_routes() {
        assert!(matches!(
            "/simulations/alchemy".parse::<Page>(),
            Err(RouteError::UnknownSimulation(id)) if id == "alchemy"
        ));
        assert!(matches!(
            "/simulations/".parse::<Page>(),
            Err(RouteError::Malformed(_))
        ));
        assert!(matches!("pricing".parse::<Page>(), Err(RouteError::Malformed(_))));
        assert!(matches!("".parse::<Page>(), Err(RouteError::Malformed(_))));
    }

    #[test]
    fn path_round_trips() {
        for id in SimulationId::ALL {
            let page = Page::Simulation(id);
            assert_eq!(page.path().parse::<Page>().unwrap(), page);
        }
        assert_eq!(Page::Pricing.to_string(), "/pricing");
    }
}
