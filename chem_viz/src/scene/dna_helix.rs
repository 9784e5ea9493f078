//! Nucleic acid helix: double-stranded DNA or single-stranded RNA with a
//! random base sequence drawn from the mount seed.

use bevy::prelude::*;
use bevy_egui::egui;
use rand::Rng;

use crate::animation::Spin;
use crate::catalog::SimulationId;
use crate::layout::{helix, HelixParams, Segment, Strands};
use crate::render::{ChemScene, SceneBuilder};
use crate::switcher::{variant_selector, SceneVariant};

const RISE: f32 = 0.45;
const BACKBONE_RADIUS: f32 = 0.14;
const RUNG_RADIUS: f32 = 0.06;
const MIN_BASE_PAIRS: usize = 8;
const MAX_BASE_PAIRS: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    T,
    U,
    G,
    C,
}

impl Base {
    pub fn letter(self) -> char {
        match self {
            Base::A => 'A',
            Base::T => 'T',
            Base::U => 'U',
            Base::G => 'G',
            Base::C => 'C',
        }
    }

    /// Watson–Crick partner in the given nucleic acid.
    pub fn complement(self, acid: NucleicAcid) -> Base {
        match (self, acid) {
            (Base::A, NucleicAcid::Dna) => Base::T,
            (Base::A, NucleicAcid::Rna) => Base::U,
            (Base::T | Base::U, _) => Base::A,
            (Base::G, _) => Base::C,
            (Base::C, _) => Base::G,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Base::A => Color::srgb(0.25, 0.8, 0.35),
            Base::T => Color::srgb(0.9, 0.3, 0.3),
            Base::U => Color::srgb(0.95, 0.6, 0.2),
            Base::G => Color::srgb(0.95, 0.85, 0.2),
            Base::C => Color::srgb(0.3, 0.5, 0.95),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NucleicAcid {
    #[default]
    Dna,
    Rna,
}

impl NucleicAcid {
    pub fn bases(self) -> [Base; 4] {
        match self {
            NucleicAcid::Dna => [Base::A, Base::T, Base::G, Base::C],
            NucleicAcid::Rna => [Base::A, Base::U, Base::G, Base::C],
        }
    }

    pub fn strands(self) -> Strands {
        match self {
            NucleicAcid::Dna => Strands::Double,
            NucleicAcid::Rna => Strands::Single,
        }
    }
}

impl SceneVariant for NucleicAcid {
    const ALL: &'static [Self] = &[NucleicAcid::Dna, NucleicAcid::Rna];

    fn label(self) -> &'static str {
        match self {
            NucleicAcid::Dna => "DNA",
            NucleicAcid::Rna => "RNA",
        }
    }
}

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct HelixControls {
    pub acid: NucleicAcid,
    pub base_pairs: usize,
}

impl Default for HelixControls {
    fn default() -> Self {
        Self {
            acid: NucleicAcid::Dna,
            base_pairs: 20,
        }
    }
}

pub fn random_sequence(rng: &mut impl Rng, acid: NucleicAcid, len: usize) -> Vec<Base> {
    let bases = acid.bases();
    (0..len).map(|_| bases[rng.gen_range(0..bases.len())]).collect()
}

/// Fraction of G/C bases.
pub fn gc_content(sequence: &[Base]) -> f32 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence
        .iter()
        .filter(|b| matches!(b, Base::G | Base::C))
        .count();
    gc as f32 / sequence.len() as f32
}

pub struct DnaHelix;

impl ChemScene for DnaHelix {
    const ID: SimulationId = SimulationId::DnaHelix;
    type Controls = HelixControls;

    fn camera_start() -> Option<Vec3> {
        Some(Vec3::new(0.0, 2.0, 13.0))
    }

    fn build(builder: &mut SceneBuilder, controls: &HelixControls) {
        let spin = Spin::about_y(0.35);
        let acid = controls.acid;
        let params = HelixParams {
            rungs: controls.base_pairs.clamp(MIN_BASE_PAIRS, MAX_BASE_PAIRS),
            rise: RISE,
            ..default()
        };
        let rungs = helix(&params, acid.strands());
        let sequence = random_sequence(builder.rng(), acid, rungs.len());
        debug!(
            "helix of {} bases, GC content {:.0}%",
            sequence.len(),
            gc_content(&sequence) * 100.0
        );
        let backbone = Color::srgb(0.95, 0.55, 0.2);
        let sugar = Color::srgb(0.6, 0.6, 0.65);

        for (rung, &base) in rungs.iter().zip(&sequence) {
            builder
                .atom(rung.strand_a, BACKBONE_RADIUS, backbone)
                .insert(spin);

            let connector = rung.rung();
            match rung.strand_b {
                Some(strand_b) => {
                    builder.atom(strand_b, BACKBONE_RADIUS, backbone).insert(spin);
                    let mid = connector.midpoint();
                    builder
                        .bond(Segment::new(rung.strand_a, mid), RUNG_RADIUS, base.color())
                        .insert(spin);
                    builder
                        .bond(
                            Segment::new(mid, strand_b),
                            RUNG_RADIUS,
                            base.complement(acid).color(),
                        )
                        .insert(spin);
                }
                None => {
                    builder
                        .bond(connector.shortened(0.8), RUNG_RADIUS, base.color())
                        .insert(spin);
                }
            }
        }

        for pair in rungs.windows(2) {
            builder
                .bond(Segment::new(pair[0].strand_a, pair[1].strand_a), 0.05, sugar)
                .insert(spin);
            if let (Some(a), Some(b)) = (pair[0].strand_b, pair[1].strand_b) {
                builder.bond(Segment::new(a, b), 0.05, sugar).insert(spin);
            }
        }
    }

    fn controls_ui(ui: &mut egui::Ui, controls: &mut HelixControls) {
        variant_selector(ui, &mut controls.acid);
        ui.add(
            egui::Slider::new(&mut controls.base_pairs, MIN_BASE_PAIRS..=MAX_BASE_PAIRS)
                .text("Base pairs"),
        );
        ui.separator();
        match controls.acid {
            NucleicAcid::Dna => {
                ui.label("Antiparallel strands; A pairs with T, G with C.");
                ui.label("One full turn every 10 base pairs.");
            }
            NucleicAcid::Rna => {
                ui.label("Single strand; uracil replaces thymine.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn complements_follow_watson_crick() {
        assert_eq!(Base::A.complement(NucleicAcid::Dna), Base::T);
        assert_eq!(Base::A.complement(NucleicAcid::Rna), Base::U);
        assert_eq!(Base::G.complement(NucleicAcid::Dna), Base::C);
        assert_eq!(Base::U.complement(NucleicAcid::Rna), Base::A);
    }

    #[test]
    fn sequence_is_seeded_and_uses_the_right_alphabet() {
        let a = random_sequence(&mut StdRng::seed_from_u64(7), NucleicAcid::Rna, 40);
        let b = random_sequence(&mut StdRng::seed_from_u64(7), NucleicAcid::Rna, 40);
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);
        assert!(!a.contains(&Base::T));
    }

    #[test]
    fn gc_content_counts_strong_pairs() {
        assert_eq!(gc_content(&[Base::G, Base::C, Base::A, Base::T]), 0.5);
        assert_eq!(gc_content(&[]), 0.0);
    }
}
