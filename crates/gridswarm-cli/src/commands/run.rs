//! Run a swarm and render the explored grid.

use anyhow::{Context, Result};
use colored::{Color, ColoredString, Colorize};
use gridswarm::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::commands::evolve::evolve;
use crate::config::Config;

pub fn run(
    steps: Option<u64>,
    seed: Option<u64>,
    diverse: bool,
    frames: Option<&str>,
) -> Result<()> {
    let config = Config::load()?;
    let mut swarm = config.simulation.clone();
    if let Some(s) = steps {
        swarm.steps = s;
    }
    if let Some(s) = seed {
        swarm.seed = s;
    }
    swarm.validate().context("Invalid simulation config")?;

    let store = JsonGenomeStore::new(config.genome_path());
    let genome = match store.load_best_genome() {
        Some(genome) => genome,
        None => {
            println!("{} No saved genome, evolving one first.", "•".yellow());
            let outcome = evolve(config.evolution.clone(), config.simulation.clone(), false)?;
            store
                .save_best_genome(&outcome.best_genome)
                .with_context(|| format!("Failed to save genome to {}", store.path().display()))?;
            outcome.best_genome
        }
    };

    let genomes = if diverse {
        genome.diversify(swarm.agent_count, &mut derive_rng(swarm.seed, 1))
    } else {
        vec![genome; swarm.agent_count]
    };

    println!(
        "{} Running {} agents on a {}x{} torus for {} ticks...",
        "→".blue(),
        genomes.len().to_string().cyan(),
        swarm.width,
        swarm.height,
        swarm.steps.to_string().cyan()
    );

    let mut sim = Simulation::new(&genomes, swarm.width, swarm.height, swarm.seed)?;
    let mut recorded: Vec<SwarmSnapshot> = Vec::new();
    if frames.is_some() {
        recorded.push(sim.coordinator().snapshot());
    }

    let pb = ProgressBar::new(swarm.steps);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ticks")
            .context("Invalid progress template")?
            .progress_chars("#>-"),
    );
    for _ in 0..swarm.steps {
        sim.step();
        if frames.is_some() {
            recorded.push(sim.coordinator().snapshot());
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let snapshot = sim.coordinator().snapshot();
    println!();
    print!("{}", render_grid(&snapshot));
    println!();
    for line in agent_legend(&snapshot) {
        println!("  {}", line);
    }
    println!();
    print_summary(&snapshot);

    if let Some(path) = frames {
        write_frames(Path::new(path), &recorded)?;
        println!(
            "  Wrote {} frames to {}",
            recorded.len().to_string().cyan(),
            path
        );
    }

    Ok(())
}

/// Exploration chance at or above which an agent is drawn emphasized.
const EAGER_EXPLORATION: f64 = 0.5;

fn speed_color(speed: u32) -> Color {
    match speed {
        1 => Color::Blue,
        2 => Color::Yellow,
        _ => Color::Red,
    }
}

fn speed_glyph(speed: u32) -> ColoredString {
    speed.to_string().color(speed_color(speed)).bold()
}

/// Speed digit in the speed colour; eager explorers are bold and
/// underlined, cautious ones plain.
fn agent_glyph(agent: &AgentView) -> ColoredString {
    if is_eager(agent.exploration_chance) {
        speed_glyph(agent.speed).underline()
    } else {
        agent.speed.to_string().color(speed_color(agent.speed))
    }
}

fn is_eager(exploration_chance: f64) -> bool {
    exploration_chance >= EAGER_EXPLORATION
}

/// One plain-text line per agent, in id order.
pub fn agent_legend(snapshot: &SwarmSnapshot) -> Vec<String> {
    snapshot
        .agents
        .iter()
        .map(|agent| {
            format!(
                "{} at {}: speed {}, exploration {:.0}%{}, fitness {}",
                agent.id,
                agent.position,
                agent.speed,
                agent.exploration_chance * 100.0,
                if is_eager(agent.exploration_chance) { " (eager)" } else { "" },
                agent.fitness
            )
        })
        .collect()
}

/// Draw the grid row by row: agents as their speed digit (lowest id wins a
/// shared cell), `░` for visited cells, `·` for the rest.
pub fn render_grid(snapshot: &SwarmSnapshot) -> String {
    let mut occupants: HashMap<GridPos, &AgentView> = HashMap::new();
    for agent in &snapshot.agents {
        occupants.entry(agent.position).or_insert(agent);
    }
    let covered: HashSet<GridPos> = snapshot.covered.iter().copied().collect();

    let mut out = String::new();
    for y in 0..snapshot.height {
        for x in 0..snapshot.width {
            let cell = GridPos::new(x, y);
            match occupants.get(&cell) {
                Some(agent) => out.push_str(&agent_glyph(agent).to_string()),
                None if covered.contains(&cell) => out.push_str(&"░".dimmed().to_string()),
                None => out.push('·'),
            }
        }
        out.push('\n');
    }
    out
}

fn print_summary(snapshot: &SwarmSnapshot) {
    let stats = &snapshot.stats;
    println!("{} Simulation complete!", "✓".green().bold());
    println!("  Ticks:         {}", stats.tick);
    println!("  Total fitness: {}", stats.total_fitness.to_string().green());
    println!(
        "  Coverage:      {}/{} cells ({:.1}%)",
        stats.cells_covered,
        stats.total_cells,
        stats.coverage * 100.0
    );
    let mut speeds = [0usize; 3];
    for agent in &snapshot.agents {
        speeds[(agent.speed as usize).clamp(1, 3) - 1] += 1;
    }
    println!(
        "  Speeds:        {} x{}  {} x{}  {} x{}",
        speed_glyph(1),
        speeds[0],
        speed_glyph(2),
        speeds[1],
        speed_glyph(3),
        speeds[2]
    );
}

fn write_frames(path: &Path, frames: &[SwarmSnapshot]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(frames).context("Failed to serialize frames")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
