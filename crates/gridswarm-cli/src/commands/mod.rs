//! CLI command implementations.

pub mod init;
pub mod evolve;
pub mod run;
pub mod genome;
