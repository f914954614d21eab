//! # Gridswarm Runtime
//!
//! Tick coordination, conflict resolution, and the simulation façade.
//!
//! The runtime owns the swarm: it captures the per-tick position
//! broadcast, lets every explorer plan against it, settles contested
//! destinations, and commits the surviving moves. Around that core sit
//! the collaborators an optimizer needs: a seeded [`simulation::Simulation`]
//! that turns genomes into a fitness score, a JSON [`store::GenomeStore`],
//! and a genetic [`optimizer::Optimizer`].

pub mod rng;
pub mod config;
pub mod resolver;
pub mod coordinator;
pub mod simulation;
pub mod store;
pub mod optimizer;
pub mod prelude;
