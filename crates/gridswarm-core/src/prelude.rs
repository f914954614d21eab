//! Gridswarm Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use gridswarm_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{AgentId, GridPos, Tick};

// Re-export the grid
pub use crate::grid::ToroidalGrid;

// Re-export error types
pub use crate::error::{ConfigError, GenomeError, GridError, Result, SwarmError};
