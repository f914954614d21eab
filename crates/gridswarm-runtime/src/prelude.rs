//! Gridswarm Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use gridswarm_runtime::prelude::*;
//! ```

// Re-export the tick machinery
pub use crate::coordinator::{AgentView, SwarmEvent, SwarmSnapshot, SwarmStats, TickCoordinator};
pub use crate::resolver::{Conflict, ConflictResolver};

// Re-export the simulation façade
pub use crate::simulation::Simulation;

// Re-export configuration and randomness
pub use crate::config::{EvolutionConfig, SwarmConfig};
pub use crate::rng::{create_rng, derive_rng, derive_seed, SwarmRng};

// Re-export persistence
pub use crate::store::{GenomeRecord, GenomeStore, JsonGenomeStore};

// Re-export the optimizer
pub use crate::optimizer::{EvolutionOutcome, GenerationSummary, Optimizer};

// Re-export from agents
pub use gridswarm_agents::prelude::*;
