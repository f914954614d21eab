//! # Gridswarm Core
//!
//! Core types shared by every gridswarm crate.
//!
//! - **ToroidalGrid**: wrap-around coordinate space, neighborhoods, distances
//! - **GridPos / AgentId / Tick**: the identifiers the rest of the system speaks
//! - **SwarmError**: structured errors instead of panics
//!
//! ## Quick Start
//!
//! ```rust
//! use gridswarm_core::prelude::*;
//!
//! let grid = ToroidalGrid::new(5, 5).unwrap();
//! let pos = grid.wrap(-1, 7);
//! assert_eq!(pos, GridPos::new(4, 2));
//! assert_eq!(grid.neighborhood(pos, 1).len(), 8);
//! ```

pub mod types;
pub mod grid;
pub mod error;
pub mod prelude;
