//! Gridswarm Agents Prelude — convenient imports for common usage.
//!
//! ```rust
//! use gridswarm_agents::prelude::*;
//! ```

// Re-export agent types
pub use crate::explorer::{Explorer, PlanMode};
pub use crate::genome::{AgentParams, Genome, GENOME_LENGTH};
pub use crate::snapshot::TickSnapshot;

// Re-export from core
pub use gridswarm_core::prelude::*;
