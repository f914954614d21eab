//! Conflict resolution — settling agents that planned the same destination.
//!
//! Agents are grouped by intended destination. In every group with more
//! than one mover, the fittest agent (most cells visited) keeps its move;
//! equal fitness goes to the lower id. Every other agent is re-planned
//! once, avoiding the contested cell and all pre-tick positions.
//!
//! Resolution is a single pass. Re-planned losers are not checked against
//! each other, so two losers may still end up sharing a cell. Adding a
//! second pass would change fitness outcomes for existing genomes.

use gridswarm_agents::explorer::Explorer;
use gridswarm_agents::snapshot::TickSnapshot;
use gridswarm_core::grid::ToroidalGrid;
use gridswarm_core::types::{AgentId, GridPos};
use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// One contested destination and how it was settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub destination: GridPos,
    pub winner: AgentId,
    /// Losers in priority order, each paired with its re-planned move.
    pub losers: Vec<(AgentId, GridPos)>,
}

/// Stateless resolver over a swarm whose agent ids equal their indices.
pub struct ConflictResolver;

impl ConflictResolver {
    /// Group movers by destination, keeping only contested cells.
    ///
    /// Agents whose intended move is their own position are staying and
    /// never contest anything. Groups are keyed in grid order and list
    /// agents in ascending id.
    pub fn contested(agents: &[Explorer]) -> BTreeMap<GridPos, Vec<AgentId>> {
        let mut groups: BTreeMap<GridPos, Vec<AgentId>> = BTreeMap::new();
        for agent in agents {
            if let Some(target) = agent.intended_move() {
                if target != agent.position() {
                    groups.entry(target).or_default().push(agent.id());
                }
            }
        }
        groups.retain(|_, ids| ids.len() > 1);
        groups
    }

    /// Priority order: fitness descending, then id ascending.
    pub fn rank(agents: &[Explorer], competitors: &mut [AgentId]) {
        competitors.sort_by(|a, b| {
            let fa = agents[a.index()].fitness();
            let fb = agents[b.index()].fitness();
            match fb.cmp(&fa) {
                Ordering::Equal => a.cmp(b),
                other => other,
            }
        });
    }

    /// Resolve every contested destination in one pass and return what
    /// happened, in destination order.
    pub fn resolve<R: Rng + ?Sized>(
        agents: &mut [Explorer],
        grid: &ToroidalGrid,
        snapshot: &TickSnapshot,
        rng: &mut R,
    ) -> Vec<Conflict> {
        let groups = Self::contested(agents);
        let mut conflicts = Vec::with_capacity(groups.len());

        for (destination, mut competitors) in groups {
            Self::rank(agents, &mut competitors);
            let winner = competitors[0];
            let mut losers = Vec::with_capacity(competitors.len() - 1);
            for &loser in &competitors[1..] {
                let agent = &mut agents[loser.index()];
                let alternative = Self::alternative_move(agent, grid, snapshot, destination, rng);
                agent.set_intended_move(alternative);
                losers.push((loser, alternative));
            }
            conflicts.push(Conflict {
                destination,
                winner,
                losers,
            });
        }

        conflicts
    }

    /// Re-plan a loser: any neighborhood cell except the blocked destination
    /// and cells other agents held before the tick, preferring unvisited
    /// ones. Stays put when nothing is left.
    pub fn alternative_move<R: Rng + ?Sized>(
        agent: &Explorer,
        grid: &ToroidalGrid,
        snapshot: &TickSnapshot,
        blocked: GridPos,
        rng: &mut R,
    ) -> GridPos {
        let occupied = snapshot.occupied_by_others(agent.id());
        let alternatives: Vec<GridPos> = grid
            .neighborhood(agent.position(), agent.speed())
            .into_iter()
            .filter(|cell| *cell != blocked && !occupied.contains(cell))
            .collect();
        if alternatives.is_empty() {
            return agent.position();
        }
        agent.choose_exploratory_move(&alternatives, rng)
    }
}
