//! # Gridswarm Agents
//!
//! Genome decoding and the explorer agent.
//!
//! - **Genome**: two real genes, decoded (with clamping, never rejection)
//!   into a speed and an exploration chance
//! - **Explorer**: position, visited set, and the per-tick move-planning policy
//! - **TickSnapshot**: the frozen pre-tick positions every agent plans against

pub mod genome;
pub mod snapshot;
pub mod explorer;
pub mod prelude;
