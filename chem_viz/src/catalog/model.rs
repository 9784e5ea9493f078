//! Static simulation descriptors. Ordered exactly as `SimulationId::ALL`;
//! the catalog tests pin that ordering.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::catalog::RouteError;

/// Every simulation the catalog knows about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimulationId {
    #[default]
    AtomicStructure,
    MolecularGeometry,
    IonicLattice,
    GasLaws,
    Electrolysis,
    GalvanicCell,
    Precipitation,
    Benzene,
    DnaHelix,
    Polymerization,
    Sn2Mechanism,
}

impl SimulationId {
    pub const ALL: [SimulationId; 11] = [
        SimulationId::AtomicStructure,
        SimulationId::MolecularGeometry,
        SimulationId::IonicLattice,
        SimulationId::GasLaws,
        SimulationId::Electrolysis,
        SimulationId::GalvanicCell,
        SimulationId::Precipitation,
        SimulationId::Benzene,
        SimulationId::DnaHelix,
        SimulationId::Polymerization,
        SimulationId::Sn2Mechanism,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SimulationId::AtomicStructure => "atomic-structure",
            SimulationId::MolecularGeometry => "molecular-geometry",
            SimulationId::IonicLattice => "ionic-lattice",
            SimulationId::GasLaws => "gas-laws",
            SimulationId::Electrolysis => "electrolysis",
            SimulationId::GalvanicCell => "galvanic-cell",
            SimulationId::Precipitation => "precipitation",
            SimulationId::Benzene => "benzene",
            SimulationId::DnaHelix => "dna-helix",
            SimulationId::Polymerization => "polymerization",
            SimulationId::Sn2Mechanism => "sn2-mechanism",
        }
    }

    pub fn descriptor(self) -> &'static SimulationDescriptor {
        &CATALOG[self as usize]
    }
}

impl fmt::Display for SimulationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimulationId {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SimulationId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| RouteError::UnknownSimulation(s.to_string()))
    }
}

/// Premium grouping on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    General,
    Organic,
}

/// One catalog card. Serialized with the camelCase keys the landing page reads.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationDescriptor {
    pub id: SimulationId,
    pub title: &'static str,
    pub desc: &'static str,
    pub is_premium: bool,
    pub icon: &'static str,
    /// `#rrggbb` accent color.
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

pub const CATALOG: &[SimulationDescriptor] = &[
    SimulationDescriptor {
        id: SimulationId::AtomicStructure,
        title: "Atomic Structure",
        desc: "Bohr-model shells with electrons orbiting the nucleus. Pick an element and compare evenly spread versus paired electrons.",
        is_premium: false,
        icon: "atom",
        color: "#4f8ef7",
        category: None,
    },
    SimulationDescriptor {
        id: SimulationId::MolecularGeometry,
        title: "Molecular Geometry",
        desc: "VSEPR shapes from linear to octahedral, with lone pairs and ideal bond angles.",
        is_premium: false,
        icon: "shapes",
        color: "#22c55e",
        category: None,
    },
    SimulationDescriptor {
        id: SimulationId::IonicLattice,
        title: "Ionic Lattice",
        desc: "Rock-salt crystal lattice built from alternating cations and anions. Grow the lattice and switch compounds.",
        is_premium: false,
        icon: "cube",
        color: "#a855f7",
        category: None,
    },
    SimulationDescriptor {
        id: SimulationId::GasLaws,
        title: "Gas Laws",
        desc: "Gas particles in a box whose speed follows temperature, beside pressure–volume and temperature–entropy diagrams.",
        is_premium: true,
        icon: "wind",
        color: "#06b6d4",
        category: Some(Category::General),
    },
    SimulationDescriptor {
        id: SimulationId::Electrolysis,
        title: "Electrolysis",
        desc: "Current splits the electrolyte: gas bubbles rise from each electrode while ions migrate between them.",
        is_premium: true,
        icon: "zap",
        color: "#eab308",
        category: Some(Category::General),
    },
    SimulationDescriptor {
        id: SimulationId::GalvanicCell,
        title: "Galvanic Cell",
        desc: "Two half-cells joined by a wire and salt bridge. Electrons flow from anode to cathode; the cell EMF follows the electrode pair.",
        is_premium: true,
        icon: "battery",
        color: "#f97316",
        category: Some(Category::General),
    },
    SimulationDescriptor {
        id: SimulationId::Precipitation,
        title: "Precipitation",
        desc: "Silver and chloride ions meet, the solution clouds over and an AgCl crystal grows layer by layer.",
        is_premium: true,
        icon: "droplet",
        color: "#94a3b8",
        category: Some(Category::General),
    },
    SimulationDescriptor {
        id: SimulationId::Benzene,
        title: "Benzene",
        desc: "The aromatic ring as alternating Kekulé double bonds or a delocalized π cloud.",
        is_premium: true,
        icon: "hexagon",
        color: "#ec4899",
        category: Some(Category::Organic),
    },
    SimulationDescriptor {
        id: SimulationId::DnaHelix,
        title: "DNA & RNA",
        desc: "Double-stranded DNA with base pairs across the helix, or a single RNA strand.",
        is_premium: true,
        icon: "dna",
        color: "#14b8a6",
        category: Some(Category::Organic),
    },
    SimulationDescriptor {
        id: SimulationId::Polymerization,
        title: "Polymerization",
        desc: "Monomers link into a chain. Addition keeps every atom; condensation releases a small molecule at each link.",
        is_premium: true,
        icon: "link",
        color: "#84cc16",
        category: Some(Category::Organic),
    },
    SimulationDescriptor {
        id: SimulationId::Sn2Mechanism,
        title: "SN2 Mechanism",
        desc: "Backside attack, the pentacoordinate transition state and Walden inversion, stage by stage.",
        is_premium: true,
        icon: "refresh",
        color: "#ef4444",
        category: Some(Category::Organic),
    },
];

/// The landing page's three groups.
#[derive(Debug, Default)]
pub struct CatalogSections<'a> {
    pub free: Vec<&'a SimulationDescriptor>,
    pub general_premium: Vec<&'a SimulationDescriptor>,
    pub organic_premium: Vec<&'a SimulationDescriptor>,
}

/// Splits descriptors into free, general premium and organic premium,
/// keeping catalog order. Premium entries without a category count as general.
pub fn partition(descriptors: &[SimulationDescriptor]) -> CatalogSections<'_> {
    let mut sections = CatalogSections::default();
    for descriptor in descriptors {
        match (descriptor.is_premium, descriptor.category) {
            (false, _) => sections.free.push(descriptor),
            (true, Some(Category::Organic)) => sections.organic_premium.push(descriptor),
            (true, _) => sections.general_premium.push(descriptor),
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_ids() {
        assert_eq!(CATALOG.len(), SimulationId::ALL.len());
        for (descriptor, id) in CATALOG.iter().zip(SimulationId::ALL) {
            assert_eq!(descriptor.id, id);
            assert_eq!(id.descriptor().id, id);
        }
    }

    #[test]
    fn ids_round_trip_through_strings() {
        for id in SimulationId::ALL {
            assert_eq!(id.as_str().parse::<SimulationId>().unwrap(), id);
        }
        assert!("nope".parse::<SimulationId>().is_err());
    }

    #[test]
    fn premium_without_category_is_general() {
        let uncategorized = SimulationDescriptor {
            category: None,
            ..*SimulationId::Benzene.descriptor()
        };
        let sections = partition(std::slice::from_ref(&uncategorized));
        assert_eq!(sections.general_premium.len(), 1);
        assert!(sections.organic_premium.is_empty());
    }

    #[test]
    fn every_premium_entry_has_a_category() {
        for descriptor in CATALOG.iter().filter(|d| d.is_premium) {
            assert!(descriptor.category.is_some(), "{} uncategorized", descriptor.id);
        }
        let sections = partition(CATALOG);
        assert_eq!(
            sections.free.len() + sections.general_premium.len() + sections.organic_premium.len(),
            CATALOG.len()
        );
    }
}
