//! Evolve the best genome.

use anyhow::{Context, Result};
use colored::Colorize;
use gridswarm::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;

pub fn run(generations: Option<u32>, force: bool, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let store = JsonGenomeStore::new(config.genome_path());

    if !force {
        if let Some(genome) = store.load_best_genome() {
            println!(
                "{} Saved genome found at {}: [{:.4}, {:.4}]",
                "•".yellow(),
                store.path().display(),
                genome.speed_gene(),
                genome.exploration_gene()
            );
            println!("  Use {} to evolve a new one.", "--force".cyan());
            return Ok(());
        }
    }

    let mut evolution = config.evolution.clone();
    if let Some(g) = generations {
        evolution.generations = g;
    }

    let outcome = evolve(evolution, config.simulation.clone(), verbose)?;
    store
        .save_best_genome(&outcome.best_genome)
        .with_context(|| format!("Failed to save genome to {}", store.path().display()))?;

    let params = outcome.best_genome.decode();
    println!();
    println!("{} Evolution complete!", "✓".green().bold());
    println!(
        "  Best genome: [{:.4}, {:.4}]",
        outcome.best_genome.speed_gene(),
        outcome.best_genome.exploration_gene()
    );
    println!(
        "  Speed {} · exploration {}",
        params.speed.to_string().cyan(),
        format!("{:.2}", params.exploration_chance).cyan()
    );
    println!("  Fitness: {}", outcome.best_fitness.to_string().green());
    println!("  Saved to {}", store.path().display());

    Ok(())
}

/// Run the optimizer with a progress bar.
pub fn evolve(
    evolution: EvolutionConfig,
    swarm: SwarmConfig,
    verbose: bool,
) -> Result<EvolutionOutcome> {
    let generations = evolution.generations as u64;
    let optimizer = Optimizer::new(evolution, swarm).context("Invalid configuration")?;

    println!(
        "{} Evolving for {} generations...",
        "→".blue(),
        generations.to_string().cyan()
    );

    let pb = ProgressBar::new(generations);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} generations {msg}")
            .context("Invalid progress template")?
            .progress_chars("#>-"),
    );

    let outcome = optimizer.run_with(|summary| {
        if verbose {
            pb.println(format!(
                "  generation {:>3}: best {} mean {:.1}",
                summary.generation, summary.best_fitness, summary.mean_fitness
            ));
        }
        pb.set_message(format!("best {}", summary.best_fitness));
        pb.inc(1);
    })?;
    pb.finish_with_message("done");

    Ok(outcome)
}
