//! Simulation façade — genomes in, fitness out.
//!
//! Builds a grid and one explorer per genome at independently drawn random
//! positions (placement may stack agents), runs the tick coordinator, and
//! sums every explorer's visited-cell count. For fixed genomes, dimensions,
//! step count and seed the result is bit-identical across calls.

use crate::config::SwarmConfig;
use crate::coordinator::{SwarmEvent, TickCoordinator};
use crate::rng::{create_rng, SwarmRng};
use gridswarm_agents::explorer::Explorer;
use gridswarm_agents::genome::Genome;
use gridswarm_core::error::Result;
use gridswarm_core::grid::ToroidalGrid;
use gridswarm_core::types::{AgentId, GridPos};
use rand::Rng;
use tracing::info;

pub struct Simulation {
    coordinator: TickCoordinator,
}

impl Simulation {
    /// Build a simulation seeded with `seed`.
    pub fn new(genomes: &[Genome], width: i64, height: i64, seed: u64) -> Result<Self> {
        Self::with_rng(genomes, width, height, create_rng(seed))
    }

    /// Build a simulation that draws placement and planning randomness
    /// from `rng`.
    pub fn with_rng(
        genomes: &[Genome],
        width: i64,
        height: i64,
        mut rng: SwarmRng,
    ) -> Result<Self> {
        let grid = ToroidalGrid::new(width, height)?;
        let agents: Vec<Explorer> = genomes
            .iter()
            .enumerate()
            .map(|(i, genome)| {
                let x = rng.gen_range(0..width);
                let y = rng.gen_range(0..height);
                Explorer::new(AgentId(i as u32), *genome, GridPos::new(x, y))
            })
            .collect();

        info!(agents = agents.len(), width, height, "simulation built");
        let coordinator = TickCoordinator::new(grid, agents, rng)?;
        Ok(Self { coordinator })
    }

    /// Build `config.agent_count` copies of `genome` on the configured grid.
    pub fn from_config(genome: Genome, config: &SwarmConfig) -> Result<Self> {
        config.validate()?;
        let genomes = vec![genome; config.agent_count];
        Self::new(&genomes, config.width, config.height, config.seed)
    }

    /// Advance one tick.
    pub fn step(&mut self) -> Vec<SwarmEvent> {
        self.coordinator.tick()
    }

    /// Advance `steps` ticks, discarding events.
    pub fn run_steps(&mut self, steps: u64) {
        for _ in 0..steps {
            self.coordinator.tick();
        }
    }

    /// Sum of all explorers' visited-cell counts.
    pub fn total_fitness(&self) -> u64 {
        self.coordinator.total_fitness()
    }

    pub fn coordinator(&self) -> &TickCoordinator {
        &self.coordinator
    }

    pub fn into_coordinator(self) -> TickCoordinator {
        self.coordinator
    }

    /// Run `steps` ticks for `genomes` on a `width`×`height` torus and
    /// return the total fitness.
    ///
    /// Fails only when the grid cannot be built.
    pub fn run(genomes: &[Genome], width: i64, height: i64, steps: u64, seed: u64) -> Result<u64> {
        let mut sim = Self::new(genomes, width, height, seed)?;
        sim.run_steps(steps);
        Ok(sim.total_fitness())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridswarm_core::error::SwarmError;

    fn swarm(n: usize) -> Vec<Genome> {
        (0..n)
            .map(|i| Genome::new(1.0 + (i % 3) as f64, 0.2 * i as f64))
            .collect()
    }

    #[test]
    fn same_seed_same_fitness() {
        let genomes = swarm(6);
        let a = Simulation::run(&genomes, 10, 10, 50, 42).unwrap();
        let b = Simulation::run(&genomes, 10, 10, 50, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        let genomes = swarm(2);
        for (w, h) in [(0, 5), (5, 0), (-3, 4)] {
            let err = Simulation::run(&genomes, w, h, 10, 1).unwrap_err();
            assert!(matches!(err, SwarmError::Grid(_)));
        }
    }

    #[test]
    fn zero_steps_counts_start_cells() {
        let genomes = swarm(4);
        assert_eq!(Simulation::run(&genomes, 8, 8, 0, 3).unwrap(), 4);
    }

    #[test]
    fn empty_swarm_has_no_fitness() {
        assert_eq!(Simulation::run(&[], 5, 5, 10, 0).unwrap(), 0);
    }

    #[test]
    fn placement_is_inside_grid() {
        let sim = Simulation::new(&swarm(20), 3, 7, 11).unwrap();
        for agent in sim.coordinator().agents() {
            let p = agent.position();
            assert!((0..3).contains(&p.x));
            assert!((0..7).contains(&p.y));
        }
    }

    #[test]
    fn fitness_is_bounded_by_cells_and_ticks() {
        let genomes = swarm(5);
        let steps = 12;
        let total = Simulation::run(&genomes, 6, 6, steps, 9).unwrap();
        assert!(total >= genomes.len() as u64);
        assert!(total <= genomes.len() as u64 * (steps + 1).min(36));
    }

    #[test]
    fn from_config_uses_agent_count() {
        let config = SwarmConfig {
            agent_count: 3,
            ..SwarmConfig::default()
        };
        let sim = Simulation::from_config(Genome::new(2.0, 0.5), &config).unwrap();
        assert_eq!(sim.coordinator().agents().len(), 3);
        assert!(sim.coordinator().agents().iter().all(|a| a.speed() == 2));
    }
}
