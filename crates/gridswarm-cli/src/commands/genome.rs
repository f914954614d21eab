//! Show the saved genome.

use anyhow::{bail, Result};
use colored::Colorize;
use gridswarm::prelude::*;

use crate::config::Config;

pub fn run() -> Result<()> {
    let config = Config::load()?;
    let store = JsonGenomeStore::new(config.genome_path());

    let Some(genome) = store.load_best_genome() else {
        bail!("No saved genome. Run {} first.", "gridswarm evolve".cyan());
    };
    let params = genome.decode();

    println!("{} {}", "Genome:".bold(), store.path().display());
    println!(
        "  Genes:       [{:.4}, {:.4}]",
        genome.speed_gene(),
        genome.exploration_gene()
    );
    println!("  Speed:       {}", params.speed.to_string().cyan());
    println!(
        "  Exploration: {}",
        format!("{:.1}%", params.exploration_chance * 100.0).cyan()
    );

    if let Ok(record) = store.load_record() {
        if !record.timestamp.is_empty() {
            println!("  Saved at:    {} (unix)", record.timestamp);
        }
        println!("  Version:     {}", record.version);
        if let Some(run_id) = record.run_id {
            println!("  Run:         {}", run_id.dimmed());
        }
    }

    Ok(())
}
