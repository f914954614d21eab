//! Genetic optimizer — searches genome space for the best explorer.
//!
//! Each generation every candidate is scored by a full simulation of
//! `agent_count` copies of it. All candidates in one generation share the
//! same simulation seed, so they are compared on identical placements.
//! Breeding is steady-state: the fittest `parents_mating` candidates are
//! crossed pairwise with a single cut point, each child has a share of its
//! genes replaced at random, and the best `keep_parents` parents survive
//! unchanged.

use crate::config::{EvolutionConfig, SwarmConfig};
use crate::rng::{create_rng, derive_seed, SwarmRng};
use crate::simulation::Simulation;
use gridswarm_agents::genome::{Genome, GENOME_LENGTH};
use gridswarm_core::error::Result;
use rand::seq::index;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

/// What one generation produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationSummary {
    /// Zero-based generation number.
    pub generation: u32,
    pub best_fitness: u64,
    pub mean_fitness: f64,
    pub best_genome: Genome,
}

/// Result of a full evolution run.
#[derive(Debug, Clone, Serialize)]
pub struct EvolutionOutcome {
    /// Fittest genome seen in any generation.
    pub best_genome: Genome,
    pub best_fitness: u64,
    pub history: Vec<GenerationSummary>,
}

pub struct Optimizer {
    evolution: EvolutionConfig,
    swarm: SwarmConfig,
}

impl Optimizer {
    pub fn new(evolution: EvolutionConfig, swarm: SwarmConfig) -> Result<Self> {
        evolution.validate()?;
        swarm.validate()?;
        Ok(Self { evolution, swarm })
    }

    pub fn evolution_config(&self) -> &EvolutionConfig {
        &self.evolution
    }

    pub fn swarm_config(&self) -> &SwarmConfig {
        &self.swarm
    }

    /// Evolve for the configured number of generations.
    pub fn run(&self) -> Result<EvolutionOutcome> {
        self.run_with(|_| {})
    }

    /// Evolve, calling `on_generation` after each generation is scored.
    pub fn run_with<F>(&self, mut on_generation: F) -> Result<EvolutionOutcome>
    where
        F: FnMut(&GenerationSummary),
    {
        let mut rng = create_rng(self.evolution.seed);
        let mut population = self.initial_population(&mut rng);
        let mut history = Vec::with_capacity(self.evolution.generations as usize);
        let mut best: Option<(Genome, u64)> = None;

        for generation in 0..self.evolution.generations {
            let fitness = population
                .iter()
                .map(|genome| self.evaluate(genome, generation))
                .collect::<Result<Vec<u64>>>()?;

            let ranked = rank(&fitness);
            let leader = ranked[0];
            let summary = GenerationSummary {
                generation,
                best_fitness: fitness[leader],
                mean_fitness: fitness.iter().sum::<u64>() as f64 / fitness.len() as f64,
                best_genome: population[leader],
            };

            if best.map_or(true, |(_, f)| summary.best_fitness > f) {
                best = Some((summary.best_genome, summary.best_fitness));
            }

            info!(
                generation,
                best = summary.best_fitness,
                mean = summary.mean_fitness,
                "generation scored"
            );
            on_generation(&summary);
            history.push(summary);

            if generation + 1 < self.evolution.generations {
                population = self.next_population(&population, &ranked, &mut rng);
            }
        }

        // generations >= 1 is enforced by validate()
        let (best_genome, best_fitness) = best.unwrap_or((population[0], 0));
        Ok(EvolutionOutcome {
            best_genome,
            best_fitness,
            history,
        })
    }

    /// Fitness of `genome` as scored in `generation`.
    pub fn evaluate(&self, genome: &Genome, generation: u32) -> Result<u64> {
        let genomes = vec![*genome; self.swarm.agent_count];
        Simulation::run(
            &genomes,
            self.swarm.width,
            self.swarm.height,
            self.swarm.steps,
            derive_seed(self.swarm.seed, generation as u64),
        )
    }

    fn initial_population(&self, rng: &mut SwarmRng) -> Vec<Genome> {
        (0..self.evolution.population_size)
            .map(|_| Genome::new(self.random_gene(rng), self.random_gene(rng)))
            .collect()
    }

    fn random_gene(&self, rng: &mut SwarmRng) -> f64 {
        rng.gen_range(self.evolution.gene_min..self.evolution.gene_max)
    }

    fn next_population(
        &self,
        population: &[Genome],
        ranked: &[usize],
        rng: &mut SwarmRng,
    ) -> Vec<Genome> {
        let parents: Vec<Genome> = ranked[..self.evolution.parents_mating]
            .iter()
            .map(|&i| population[i])
            .collect();
        let offspring_count = self.evolution.population_size - self.evolution.keep_parents;

        let mut next: Vec<Genome> = parents[..self.evolution.keep_parents].to_vec();
        for k in 0..offspring_count {
            let first = &parents[k % parents.len()];
            let second = &parents[(k + 1) % parents.len()];
            let mut child = crossover(first, second, 1);
            self.mutate(&mut child, rng);
            next.push(child);
        }
        debug!(size = next.len(), "bred next population");
        next
    }

    /// Replace a fixed number of distinct genes with fresh uniform values.
    fn mutate(&self, genome: &mut Genome, rng: &mut SwarmRng) {
        let count = mutated_gene_count(self.evolution.mutation_percent_genes);
        for gene in index::sample(rng, GENOME_LENGTH, count).into_iter() {
            genome.0[gene] = self.random_gene(rng);
        }
    }
}

/// Candidate indices ordered by fitness descending, then index ascending.
pub fn rank(fitness: &[u64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    order.sort_by(|&a, &b| fitness[b].cmp(&fitness[a]).then(a.cmp(&b)));
    order
}

/// Genes `[..cut]` from `first`, the rest from `second`.
pub fn crossover(first: &Genome, second: &Genome, cut: usize) -> Genome {
    let mut genes = *second.genes();
    genes[..cut].copy_from_slice(&first.genes()[..cut]);
    Genome(genes)
}

/// Genes mutated per child: the percentage of the genome, rounded, but
/// always at least one.
pub fn mutated_gene_count(percent: f64) -> usize {
    let count = (percent / 100.0 * GENOME_LENGTH as f64).round() as usize;
    count.clamp(1, GENOME_LENGTH)
}
