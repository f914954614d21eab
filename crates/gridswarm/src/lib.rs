//! # Gridswarm
//!
//! Genome-driven explorer swarms on a toroidal grid.
//!
//! Every explorer carries a two-gene genome that decodes into a speed and an
//! exploration chance. Each tick the whole swarm plans against one shared
//! snapshot of positions, contested destinations are settled by fitness,
//! and the surviving moves are committed together. The number of distinct
//! cells the swarm visits is the fitness a genetic optimizer maximizes.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridswarm::prelude::*;
//!
//! // Ten identical explorers on a 10x10 torus for 50 ticks
//! let genomes = vec![Genome::new(2.0, 0.4); 10];
//! let fitness = Simulation::run(&genomes, 10, 10, 50, 42).unwrap();
//!
//! // Same inputs, same seed, same result
//! assert_eq!(fitness, Simulation::run(&genomes, 10, 10, 50, 42).unwrap());
//! ```
//!
//! ## Architecture
//!
//! - [`gridswarm_core`] - Grid geometry, shared types and errors
//! - [`gridswarm_agents`] - Genomes, decoding and the explorer planning policy
//! - [`gridswarm_runtime`] - Tick coordination, conflict resolution,
//!   simulation, persistence and evolution
//!
//! ## The Tick
//!
//! | Phase | What happens |
//! |-------|--------------|
//! | Reset | Clear the broadcast, conflicts and intended moves |
//! | Broadcast | Every explorer publishes its position |
//! | Plan | Every explorer picks a destination from the broadcast |
//! | Resolve | Contested destinations go to the fitter explorer |
//! | Commit | Explorers move and record the new cell |
//!
//! ## Evolution
//!
//! ```rust
//! use gridswarm::prelude::*;
//!
//! let evolution = EvolutionConfig {
//!     generations: 2,
//!     population_size: 4,
//!     parents_mating: 2,
//!     keep_parents: 1,
//!     ..Default::default()
//! };
//! let swarm = SwarmConfig {
//!     steps: 10,
//!     agent_count: 3,
//!     ..Default::default()
//! };
//! let outcome = Optimizer::new(evolution, swarm).unwrap().run().unwrap();
//! assert_eq!(outcome.history.len(), 2);
//! ```

// Re-export all subcrates
pub use gridswarm_agents as agents;
pub use gridswarm_core as core;
pub use gridswarm_runtime as runtime;

/// Crate version, as reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
///
/// ```rust
/// use gridswarm::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridswarm_core::grid::ToroidalGrid;
    pub use gridswarm_core::types::{AgentId, GridPos, Tick};

    // Error types
    pub use gridswarm_core::error::{Result, SwarmError};

    // Agents
    pub use gridswarm_agents::explorer::{Explorer, PlanMode};
    pub use gridswarm_agents::genome::{AgentParams, Genome};
    pub use gridswarm_agents::snapshot::TickSnapshot;

    // Runtime
    pub use gridswarm_runtime::config::{EvolutionConfig, SwarmConfig};
    pub use gridswarm_runtime::coordinator::{
        AgentView, SwarmEvent, SwarmSnapshot, SwarmStats, TickCoordinator,
    };
    pub use gridswarm_runtime::optimizer::{EvolutionOutcome, GenerationSummary, Optimizer};
    pub use gridswarm_runtime::resolver::{Conflict, ConflictResolver};
    pub use gridswarm_runtime::rng::{create_rng, derive_rng, SwarmRng};
    pub use gridswarm_runtime::simulation::Simulation;
    pub use gridswarm_runtime::store::{GenomeStore, JsonGenomeStore};
}
