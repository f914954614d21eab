//! Agent genome — the evolvable parameters of an explorer.
//!
//! A genome is an ordered pair of real numbers supplied by the optimizer.
//! Decoding never rejects a genome: out-of-range values are clamped into
//! the valid parameter domain, so every real-valued pair maps to a usable
//! agent.

use gridswarm_core::error::GenomeError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of genes in a genome.
pub const GENOME_LENGTH: usize = 2;

/// Slowest decoded speed (cells per axis per tick).
pub const MIN_SPEED: u32 = 1;
/// Fastest decoded speed.
pub const MAX_SPEED: u32 = 3;

/// Bounds used when seeding varied genomes around a parent.
const GENE_FLOOR: f64 = 0.1;
const GENE_CEILING: f64 = 3.0;
const SPEED_JITTER: f64 = 0.8;
const EXPLORATION_JITTER: f64 = 0.5;

/// Raw genes `(g0, g1)`: g0 encodes speed, g1 encodes exploration chance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genome(pub [f64; GENOME_LENGTH]);

impl Genome {
    pub fn new(speed_gene: f64, exploration_gene: f64) -> Self {
        Self([speed_gene, exploration_gene])
    }

    /// Build a genome from a raw gene vector (e.g. a persisted one).
    pub fn from_slice(genes: &[f64]) -> Result<Self, GenomeError> {
        match genes {
            [g0, g1] => Ok(Self::new(*g0, *g1)),
            _ => Err(GenomeError::WrongLength {
                expected: GENOME_LENGTH,
                found: genes.len(),
            }),
        }
    }

    pub fn speed_gene(&self) -> f64 {
        self.0[0]
    }

    pub fn exploration_gene(&self) -> f64 {
        self.0[1]
    }

    pub fn genes(&self) -> &[f64; GENOME_LENGTH] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    /// Decode into agent parameters.
    pub fn decode(&self) -> AgentParams {
        AgentParams::from_genome(self)
    }

    /// A population of `count` genomes varied around this one.
    ///
    /// The first entry is this genome unchanged. Every other entry shifts the
    /// speed gene by up to ±0.8 and the exploration gene by up to ±0.5, then
    /// clamps both into `[0.1, 3.0]`. Used to populate a swarm with visibly
    /// different agents rather than identical clones.
    pub fn diversify<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Genome> {
        (0..count)
            .map(|i| {
                if i == 0 {
                    *self
                } else {
                    let g0 = self.speed_gene() + rng.gen_range(-SPEED_JITTER..=SPEED_JITTER);
                    let g1 = self.exploration_gene()
                        + rng.gen_range(-EXPLORATION_JITTER..=EXPLORATION_JITTER);
                    Genome::new(clamp_gene(g0), clamp_gene(g1))
                }
            })
            .collect()
    }
}

fn clamp_gene(value: f64) -> f64 {
    if value.is_nan() {
        GENE_FLOOR
    } else {
        value.clamp(GENE_FLOOR, GENE_CEILING)
    }
}

/// Parameters decoded once from a genome and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentParams {
    /// Neighborhood radius, always in `1..=3`.
    pub speed: u32,
    /// Probability of exploration mode per tick, always in `[0, 1]`.
    pub exploration_chance: f64,
}

impl AgentParams {
    pub fn from_genome(genome: &Genome) -> Self {
        Self {
            speed: decode_speed(genome.speed_gene()),
            exploration_chance: decode_exploration(genome.exploration_gene()),
        }
    }
}

/// `clamp(round(g0), 1, 3)`. NaN decodes to the slowest speed.
pub fn decode_speed(g0: f64) -> u32 {
    if g0.is_nan() {
        return MIN_SPEED;
    }
    g0.round().clamp(MIN_SPEED as f64, MAX_SPEED as f64) as u32
}

/// Genes above 1.0 are read on a 0–3 scale and divided by 3; everything is
/// then clamped into `[0, 1]`. NaN decodes to 0.
pub fn decode_exploration(g1: f64) -> f64 {
    let raw = if g1 > 1.0 { g1 / 3.0 } else { g1 };
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, 1.0)
    }
}
