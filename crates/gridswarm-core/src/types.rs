//! Shared types used across all gridswarm crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for an agent in a swarm.
///
/// Ids are dense indices assigned in genome order, so ascending id is also
/// the fixed iteration order used by every tick phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u32);

impl AgentId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Index into the owning swarm's agent vector.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent-{}", self.0)
    }
}

/// A cell on the toroidal grid.
///
/// Positions produced by [`crate::grid::ToroidalGrid`] are always wrapped
/// into `0..width` × `0..height`. Ordering is lexicographic on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i64,
    pub y: i64,
}

impl GridPos {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The current tick of the simulation.
pub type Tick = u64;
