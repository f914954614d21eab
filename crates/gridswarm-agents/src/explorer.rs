//! Explorer — a genome-driven agent that tries to visit as many cells as it can.
//!
//! Each tick the explorer looks at the cells within its speed-bounded
//! neighborhood, drops those occupied by other agents at the start of the
//! tick, and picks a destination:
//!
//! - **Exploration mode** (with probability `exploration_chance`): a random
//!   unvisited safe cell, or any random safe cell if all were visited.
//! - **Strategic mode**: the highest-scoring safe cell, where
//!   `score = 100·[unvisited] + 10·(min distance to another agent) + 2·edge_distance`.
//!
//! The explorer only *plans*. Conflicts are settled by the runtime's
//! resolver and the move is applied in the commit phase.

use crate::genome::{AgentParams, Genome};
use crate::snapshot::TickSnapshot;
use gridswarm_core::grid::ToroidalGrid;
use gridswarm_core::types::{AgentId, GridPos};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

const UNVISITED_BONUS: i64 = 100;
const SPACING_WEIGHT: i64 = 10;
const CENTRALITY_WEIGHT: i64 = 2;

/// How an explorer arrived at its intended move this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode {
    /// Every candidate was occupied; the explorer stays put.
    Blocked,
    /// Random pick, preferring unvisited cells.
    Explore,
    /// Greedy pick by score.
    Strategic,
}

#[derive(Debug, Clone)]
pub struct Explorer {
    id: AgentId,
    genome: Genome,
    params: AgentParams,
    position: GridPos,
    visited: HashSet<GridPos>,
    /// Only meaningful between the plan and commit phases of a tick.
    intended_move: Option<GridPos>,
}

impl Explorer {
    /// Create an explorer at `position`, which counts as visited.
    pub fn new(id: AgentId, genome: Genome, position: GridPos) -> Self {
        let mut visited = HashSet::new();
        visited.insert(position);
        Self {
            id,
            genome,
            params: genome.decode(),
            position,
            visited,
            intended_move: None,
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn params(&self) -> &AgentParams {
        &self.params
    }

    pub fn speed(&self) -> u32 {
        self.params.speed
    }

    pub fn exploration_chance(&self) -> f64 {
        self.params.exploration_chance
    }

    pub fn position(&self) -> GridPos {
        self.position
    }

    pub fn visited(&self) -> &HashSet<GridPos> {
        &self.visited
    }

    pub fn has_visited(&self, pos: &GridPos) -> bool {
        self.visited.contains(pos)
    }

    /// Number of distinct cells visited so far.
    pub fn fitness(&self) -> usize {
        self.visited.len()
    }

    pub fn intended_move(&self) -> Option<GridPos> {
        self.intended_move
    }

    pub fn set_intended_move(&mut self, target: GridPos) {
        self.intended_move = Some(target);
    }

    pub fn clear_intended_move(&mut self) {
        self.intended_move = None;
    }

    /// Plan this tick's move against the pre-tick snapshot and record it as
    /// the intended move.
    ///
    /// Other agents' *current* positions are avoided; their plans are not
    /// known yet, so destination contention is left to the resolver.
    pub fn plan_move<R: Rng + ?Sized>(
        &mut self,
        grid: &ToroidalGrid,
        snapshot: &TickSnapshot,
        rng: &mut R,
    ) -> PlanMode {
        let others = snapshot.others(self.id);
        let occupied: HashSet<GridPos> = others.iter().copied().collect();
        let safe: Vec<GridPos> = grid
            .neighborhood(self.position, self.params.speed)
            .into_iter()
            .filter(|cell| !occupied.contains(cell))
            .collect();

        if safe.is_empty() {
            self.intended_move = Some(self.position);
            return PlanMode::Blocked;
        }

        let roll: f64 = rng.gen();
        let (target, mode) = if roll < self.params.exploration_chance {
            (self.choose_exploratory_move(&safe, rng), PlanMode::Explore)
        } else {
            (self.choose_strategic_move(grid, &safe, &others), PlanMode::Strategic)
        };
        self.intended_move = Some(target);
        mode
    }

    /// Uniform pick among unvisited cells of `options`, falling back to any
    /// cell of `options`, falling back to staying put.
    pub fn choose_exploratory_move<R: Rng + ?Sized>(
        &self,
        options: &[GridPos],
        rng: &mut R,
    ) -> GridPos {
        let unvisited: Vec<GridPos> = options
            .iter()
            .filter(|cell| !self.visited.contains(cell))
            .copied()
            .collect();
        let pool = if unvisited.is_empty() { options } else { &unvisited[..] };
        pool.choose(rng).copied().unwrap_or(self.position)
    }

    /// Highest-scoring cell of `options`; the first one wins ties.
    pub fn choose_strategic_move(
        &self,
        grid: &ToroidalGrid,
        options: &[GridPos],
        others: &[GridPos],
    ) -> GridPos {
        let mut best = self.position;
        let mut best_score = i64::MIN;
        for &cell in options {
            let score = self.score(grid, cell, others);
            if score > best_score {
                best_score = score;
                best = cell;
            }
        }
        best
    }

    /// Strategic score of moving to `cell`.
    pub fn score(&self, grid: &ToroidalGrid, cell: GridPos, others: &[GridPos]) -> i64 {
        let novelty = if self.visited.contains(&cell) { 0 } else { UNVISITED_BONUS };
        let spacing = others
            .iter()
            .map(|other| grid.toroidal_distance(cell, *other))
            .min()
            .unwrap_or(0);
        novelty + SPACING_WEIGHT * spacing + CENTRALITY_WEIGHT * grid.edge_distance(cell)
    }

    /// Apply the intended move. Returns `(from, to)` when the explorer
    /// actually changed cells; an intended move equal to the current
    /// position (or no plan at all) is a no-op.
    pub fn commit(&mut self) -> Option<(GridPos, GridPos)> {
        let target = self.intended_move?;
        if target == self.position {
            return None;
        }
        let from = self.position;
        self.position = target;
        self.visited.insert(target);
        Some((from, target))
    }
}
