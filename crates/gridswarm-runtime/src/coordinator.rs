//! TickCoordinator — the simultaneous-move tick state machine.
//!
//! The coordinator owns the grid, the explorers and the random source.
//! Every tick runs five phases for the whole swarm, in order:
//!
//! 1. **Reset**: clear the position broadcast, last tick's conflicts and
//!    every intended move
//! 2. **Broadcast**: each explorer publishes its position into the snapshot
//! 3. **Plan**: each explorer plans against that snapshot only
//! 4. **Resolve**: contested destinations are settled by the resolver
//! 5. **Commit**: explorers whose intended move differs from their
//!    position move and record the new cell
//!
//! Every phase iterates explorers in ascending id. Because planning only
//! reads the snapshot, no explorer's plan sees a move committed earlier in
//! the same tick.

use crate::resolver::{Conflict, ConflictResolver};
use crate::rng::SwarmRng;
use gridswarm_agents::explorer::Explorer;
use gridswarm_agents::snapshot::TickSnapshot;
use gridswarm_core::error::{Result, SwarmError};
use gridswarm_core::grid::ToroidalGrid;
use gridswarm_core::types::{AgentId, GridPos, Tick};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Event emitted by the coordinator during a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SwarmEvent {
    /// An explorer moved to a new cell.
    Moved {
        id: AgentId,
        from: GridPos,
        to: GridPos,
    },
    /// An explorer kept its cell this tick.
    Stayed { id: AgentId },
    /// Several explorers wanted the same cell.
    Contested {
        destination: GridPos,
        winner: AgentId,
        losers: Vec<AgentId>,
    },
    /// A tick completed.
    TickComplete {
        tick: Tick,
        moved: usize,
        contested: usize,
    },
}

/// Aggregate statistics about the swarm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwarmStats {
    pub tick: Tick,
    pub agents: usize,
    /// Sum of every explorer's visited-cell count.
    pub total_fitness: u64,
    /// Distinct cells visited by at least one explorer.
    pub cells_covered: u64,
    pub total_cells: u64,
    /// `cells_covered / total_cells`.
    pub coverage: f64,
}

/// Read-only view of one explorer, for renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentView {
    pub id: AgentId,
    pub position: GridPos,
    pub speed: u32,
    pub exploration_chance: f64,
    pub fitness: usize,
}

/// A complete serializable snapshot of the swarm at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct SwarmSnapshot {
    pub tick: Tick,
    pub width: i64,
    pub height: i64,
    pub agents: Vec<AgentView>,
    /// Every cell visited by any explorer, in grid order.
    pub covered: Vec<GridPos>,
    pub stats: SwarmStats,
}

pub struct TickCoordinator {
    grid: ToroidalGrid,
    agents: Vec<Explorer>,
    rng: SwarmRng,
    broadcast: TickSnapshot,
    conflicts: Vec<Conflict>,
    tick: Tick,
}

impl TickCoordinator {
    /// Take ownership of a swarm.
    ///
    /// Explorer ids must be `0..n` in order, since ids double as indices
    /// for the resolver and for lookups.
    pub fn new(grid: ToroidalGrid, agents: Vec<Explorer>, rng: SwarmRng) -> Result<Self> {
        for (index, agent) in agents.iter().enumerate() {
            if agent.id().index() != index {
                return Err(SwarmError::invalid_config(
                    "agents",
                    agent.id().to_string(),
                    format!("expected agent-{} at index {}", index, index),
                ));
            }
            let pos = agent.position();
            if grid.wrap(pos.x, pos.y) != pos {
                return Err(SwarmError::invalid_config(
                    "agents",
                    pos.to_string(),
                    format!("{} starts outside the grid", agent.id()),
                ));
            }
        }
        Ok(Self {
            grid,
            agents,
            rng,
            broadcast: TickSnapshot::new(),
            conflicts: Vec::new(),
            tick: 0,
        })
    }

    /// Run a single simulation tick.
    pub fn tick(&mut self) -> Vec<SwarmEvent> {
        self.reset();
        self.broadcast_positions();
        self.plan_moves();
        self.resolve_conflicts();
        let mut events = self.conflict_events();
        let moved = self.commit_moves(&mut events);

        self.tick += 1;
        debug!(
            tick = self.tick,
            moved,
            contested = self.conflicts.len(),
            "tick complete"
        );
        events.push(SwarmEvent::TickComplete {
            tick: self.tick,
            moved,
            contested: self.conflicts.len(),
        });
        events
    }

    /// Run the simulation for N ticks.
    pub fn run(&mut self, ticks: u64) -> Vec<Vec<SwarmEvent>> {
        (0..ticks).map(|_| self.tick()).collect()
    }

    fn reset(&mut self) {
        self.broadcast.clear();
        self.conflicts.clear();
        for agent in &mut self.agents {
            agent.clear_intended_move();
        }
    }

    fn broadcast_positions(&mut self) {
        for agent in &self.agents {
            self.broadcast.publish(agent.id(), agent.position());
        }
    }

    fn plan_moves(&mut self) {
        for agent in &mut self.agents {
            agent.plan_move(&self.grid, &self.broadcast, &mut self.rng);
        }
    }

    fn resolve_conflicts(&mut self) {
        self.conflicts =
            ConflictResolver::resolve(&mut self.agents, &self.grid, &self.broadcast, &mut self.rng);
    }

    fn conflict_events(&self) -> Vec<SwarmEvent> {
        self.conflicts
            .iter()
            .map(|c| SwarmEvent::Contested {
                destination: c.destination,
                winner: c.winner,
                losers: c.losers.iter().map(|(id, _)| *id).collect(),
            })
            .collect()
    }

    fn commit_moves(&mut self, events: &mut Vec<SwarmEvent>) -> usize {
        let mut moved = 0;
        for agent in &mut self.agents {
            match agent.commit() {
                Some((from, to)) => {
                    moved += 1;
                    events.push(SwarmEvent::Moved {
                        id: agent.id(),
                        from,
                        to,
                    });
                }
                None => events.push(SwarmEvent::Stayed { id: agent.id() }),
            }
        }
        moved
    }

    /// Number of completed ticks.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn grid(&self) -> &ToroidalGrid {
        &self.grid
    }

    pub fn agents(&self) -> &[Explorer] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Explorer> {
        self.agents.get(id.index())
    }

    /// Conflicts settled during the most recent tick.
    pub fn last_conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Sum of all explorers' fitness.
    pub fn total_fitness(&self) -> u64 {
        self.agents.iter().map(|a| a.fitness() as u64).sum()
    }

    fn covered_cells(&self) -> HashSet<GridPos> {
        self.agents
            .iter()
            .flat_map(|a| a.visited().iter().copied())
            .collect()
    }

    /// Get swarm statistics.
    pub fn stats(&self) -> SwarmStats {
        let cells_covered = self.covered_cells().len() as u64;
        let total_cells = self.grid.cell_count();
        SwarmStats {
            tick: self.tick,
            agents: self.agents.len(),
            total_fitness: self.total_fitness(),
            cells_covered,
            total_cells,
            coverage: cells_covered as f64 / total_cells as f64,
        }
    }

    /// Read-only per-explorer views for visualization.
    pub fn agent_views(&self) -> Vec<AgentView> {
        self.agents
            .iter()
            .map(|a| AgentView {
                id: a.id(),
                position: a.position(),
                speed: a.speed(),
                exploration_chance: a.exploration_chance(),
                fitness: a.fitness(),
            })
            .collect()
    }

    /// Take a serializable snapshot of the swarm's current state.
    pub fn snapshot(&self) -> SwarmSnapshot {
        let mut covered: Vec<GridPos> = self.covered_cells().into_iter().collect();
        covered.sort();
        SwarmSnapshot {
            tick: self.tick,
            width: self.grid.width(),
            height: self.grid.height(),
            agents: self.agent_views(),
            covered,
            stats: self.stats(),
        }
    }
}
