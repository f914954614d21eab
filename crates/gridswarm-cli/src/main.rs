//! Gridswarm CLI - evolve and watch explorer swarms on a torus.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridswarm")]
#[command(author, version, about = "Gridswarm - genome-driven explorer swarms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default gridswarm.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Evolve the best genome and save it
    Evolve {
        /// Number of generations (default: from config)
        #[arg(short, long)]
        generations: Option<u32>,

        /// Evolve even if a saved genome exists
        #[arg(short, long)]
        force: bool,
    },

    /// Run a swarm with the saved genome and render the result
    Run {
        /// Number of ticks (default: from config)
        #[arg(short, long)]
        steps: Option<u64>,

        /// Simulation seed (default: from config)
        #[arg(long)]
        seed: Option<u64>,

        /// Vary the genome per agent instead of cloning it
        #[arg(short, long)]
        diverse: bool,

        /// Write per-tick snapshots to this JSON file
        #[arg(long)]
        frames: Option<String>,
    },

    /// Show the saved genome and its decoded parameters
    Genome,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Evolve { generations, force } => {
            commands::evolve::run(generations, force, cli.verbose)
        }
        Commands::Run {
            steps,
            seed,
            diverse,
            frames,
        } => commands::run::run(steps, seed, diverse, frames.as_deref()),
        Commands::Genome => commands::genome::run(),
    }
}
