//! Tick snapshot — the position broadcast every agent plans against.
//!
//! Captured once per tick before anyone moves and read-only until the next
//! reset, so planning sees pre-tick positions only and agent iteration order
//! cannot bias the outcome.

use gridswarm_core::types::{AgentId, GridPos};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct TickSnapshot {
    entries: Vec<(AgentId, GridPos)>,
}

impl TickSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from `(id, position)` pairs in one go.
    pub fn capture(entries: impl IntoIterator<Item = (AgentId, GridPos)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Publish one agent's position.
    pub fn publish(&mut self, id: AgentId, position: GridPos) {
        self.entries.push((id, position));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[(AgentId, GridPos)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Positions of every agent except `id`, in publish order. Co-located
    /// agents produce repeated positions.
    pub fn others(&self, id: AgentId) -> Vec<GridPos> {
        self.entries
            .iter()
            .filter(|(other, _)| *other != id)
            .map(|(_, pos)| *pos)
            .collect()
    }

    /// Set of cells occupied by agents other than `id`.
    pub fn occupied_by_others(&self, id: AgentId) -> HashSet<GridPos> {
        self.entries
            .iter()
            .filter(|(other, _)| *other != id)
            .map(|(_, pos)| *pos)
            .collect()
    }
}
