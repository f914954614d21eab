//! Tunable parameters for simulations and evolution runs.

use gridswarm_core::error::{ConfigError, Result, SwarmError};
use serde::{Deserialize, Serialize};

/// Configuration for one fitness evaluation.
///
/// Defaults follow the reference setup: ten agents exploring a 10×10
/// torus for 50 ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// Grid width in cells (default: 10).
    pub width: i64,
    /// Grid height in cells (default: 10).
    pub height: i64,
    /// Ticks per run (default: 50).
    pub steps: u64,
    /// Agents per run, each carrying the evaluated genome (default: 10).
    pub agent_count: usize,
    /// Base seed for placement and planning draws (default: 42).
    pub seed: u64,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            steps: 50,
            agent_count: 10,
            seed: 42,
        }
    }
}

impl SwarmConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(SwarmError::invalid_dimensions(self.width, self.height));
        }
        if self.agent_count == 0 {
            return Err(SwarmError::invalid_config(
                "agent_count",
                "0",
                "need at least one agent",
            ));
        }
        Ok(())
    }
}

/// Configuration for the genetic optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Number of evaluated generations (default: 30).
    pub generations: u32,
    /// Candidates per generation (default: 15).
    pub population_size: usize,
    /// Fittest candidates selected as parents (default: 6).
    pub parents_mating: usize,
    /// Parents copied unchanged into the next generation (default: 2).
    pub keep_parents: usize,
    /// Percentage of genes replaced in each offspring (default: 25).
    pub mutation_percent_genes: f64,
    /// Lower bound for initial and mutated genes (default: 0.1).
    pub gene_min: f64,
    /// Upper bound for initial and mutated genes (default: 3.0).
    pub gene_max: f64,
    /// Seed for population initialisation, crossover and mutation (default: 42).
    pub seed: u64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            generations: 30,
            population_size: 15,
            parents_mating: 6,
            keep_parents: 2,
            mutation_percent_genes: 25.0,
            gene_min: 0.1,
            gene_max: 3.0,
            seed: 42,
        }
    }
}

impl EvolutionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.generations == 0 {
            return Err(SwarmError::invalid_config(
                "generations",
                "0",
                "need at least one generation",
            ));
        }
        if self.population_size < 2 {
            return Err(SwarmError::invalid_config(
                "population_size",
                self.population_size.to_string(),
                "need at least two candidates",
            ));
        }
        if self.parents_mating < 2 || self.parents_mating > self.population_size {
            return Err(SwarmError::invalid_config(
                "parents_mating",
                self.parents_mating.to_string(),
                "must be between 2 and population_size",
            ));
        }
        if self.keep_parents > self.parents_mating || self.keep_parents >= self.population_size {
            return Err(SwarmError::invalid_config(
                "keep_parents",
                self.keep_parents.to_string(),
                "must not exceed parents_mating and must leave room for offspring",
            ));
        }
        if !(0.0..=100.0).contains(&self.mutation_percent_genes) {
            return Err(SwarmError::Config(ConfigError::OutOfRange {
                field: "mutation_percent_genes".to_string(),
                min: 0.0,
                max: 100.0,
                value: self.mutation_percent_genes,
            }));
        }
        if !self.gene_min.is_finite()
            || !self.gene_max.is_finite()
            || self.gene_min >= self.gene_max
        {
            return Err(SwarmError::invalid_config(
                "gene_min",
                format!("{}..{}", self.gene_min, self.gene_max),
                "gene range must be finite and non-empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SwarmConfig::default().validate().is_ok());
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn swarm_config_rejects_degenerate_grid() {
        let config = SwarmConfig {
            width: 0,
            ..SwarmConfig::default()
        };
        assert!(matches!(config.validate(), Err(SwarmError::Grid(_))));
        let config = SwarmConfig {
            agent_count: 0,
            ..SwarmConfig::default()
        };
        assert!(matches!(config.validate(), Err(SwarmError::Config(_))));
    }

    #[test]
    fn evolution_config_rejects_inconsistent_sizes() {
        let config = EvolutionConfig {
            keep_parents: 7,
            ..EvolutionConfig::default()
        };
        assert!(config.validate().is_err());
        let config = EvolutionConfig {
            parents_mating: 16,
            ..EvolutionConfig::default()
        };
        assert!(config.validate().is_err());
        let config = EvolutionConfig {
            gene_min: 3.0,
            gene_max: 0.1,
            ..EvolutionConfig::default()
        };
        assert!(config.validate().is_err());
        let config = EvolutionConfig {
            mutation_percent_genes: 120.0,
            ..EvolutionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SwarmConfig = serde_json::from_str(r#"{"width": 4}"#).unwrap();
        assert_eq!(config.width, 4);
        assert_eq!(config.height, 10);
        assert_eq!(config.steps, 50);
    }
}
