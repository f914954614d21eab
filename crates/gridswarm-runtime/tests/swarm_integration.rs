//! Swarm integration tests — full simulations end to end.

use gridswarm_agents::explorer::Explorer;
use gridswarm_agents::genome::Genome;
use gridswarm_core::error::SwarmError;
use gridswarm_core::grid::ToroidalGrid;
use gridswarm_core::types::{AgentId, GridPos};
use gridswarm_runtime::config::{EvolutionConfig, SwarmConfig};
use gridswarm_runtime::coordinator::{SwarmEvent, TickCoordinator};
use gridswarm_runtime::optimizer::Optimizer;
use gridswarm_runtime::rng::create_rng;
use gridswarm_runtime::simulation::Simulation;
use gridswarm_runtime::store::{GenomeStore, JsonGenomeStore};

fn mixed_swarm() -> Vec<Genome> {
    vec![
        Genome::new(1.0, 0.0),
        Genome::new(2.0, 0.5),
        Genome::new(3.0, 2.5),
        Genome::new(-5.0, -0.3),
        Genome::new(99.0, 1.0),
        Genome::new(1.6, 0.2),
        Genome::new(2.4, 0.9),
        Genome::new(1.0, 0.7),
    ]
}

fn pair_on_5x5(exploration: f64, seed: u64) -> TickCoordinator {
    let grid = ToroidalGrid::new(5, 5).unwrap();
    let agents = vec![
        Explorer::new(AgentId(0), Genome::new(1.0, exploration), GridPos::new(2, 2)),
        Explorer::new(AgentId(1), Genome::new(1.0, exploration), GridPos::new(3, 2)),
    ];
    TickCoordinator::new(grid, agents, create_rng(seed)).unwrap()
}

fn final_distance(coordinator: &TickCoordinator) -> i64 {
    let agents = coordinator.agents();
    coordinator
        .grid()
        .toroidal_distance(agents[0].position(), agents[1].position())
}

#[test]
fn repeated_runs_are_bit_identical() {
    let genomes = mixed_swarm();
    for seed in [0, 1, 42, 9_999] {
        let first = Simulation::run(&genomes, 10, 10, 50, seed).unwrap();
        for _ in 0..3 {
            assert_eq!(Simulation::run(&genomes, 10, 10, 50, seed).unwrap(), first);
        }
    }
}

#[test]
fn event_streams_are_reproducible() {
    let genomes = mixed_swarm();
    let mut a = Simulation::new(&genomes, 7, 5, 3).unwrap().into_coordinator();
    let mut b = Simulation::new(&genomes, 7, 5, 3).unwrap().into_coordinator();
    assert_eq!(a.run(30), b.run(30));
}

#[test]
fn visited_contains_position_after_every_tick() {
    let genomes = mixed_swarm();
    for seed in 0..10 {
        let mut sim = Simulation::new(&genomes, 6, 4, seed).unwrap();
        for _ in 0..40 {
            sim.step();
            for agent in sim.coordinator().agents() {
                assert!(agent.has_visited(&agent.position()));
            }
        }
    }
}

#[test]
fn moves_stay_inside_the_speed_neighborhood() {
    let genomes = mixed_swarm();
    let mut sim = Simulation::new(&genomes, 9, 9, 17).unwrap();
    for _ in 0..40 {
        let events = sim.step();
        let coordinator = sim.coordinator();
        for event in events {
            if let SwarmEvent::Moved { id, from, to } = event {
                let speed = coordinator.agent(id).unwrap().speed();
                assert!(coordinator.grid().neighborhood(from, speed).contains(&to));
            }
        }
    }
}

#[test]
fn single_cell_torus_never_grows_fitness() {
    let genomes = mixed_swarm();
    let mut sim = Simulation::new(&genomes, 1, 1, 4).unwrap();
    sim.run_steps(100);
    for agent in sim.coordinator().agents() {
        assert_eq!(agent.position(), GridPos::new(0, 0));
        assert_eq!(agent.fitness(), 1);
    }
    assert_eq!(sim.total_fitness(), genomes.len() as u64);
}

#[test]
fn degenerate_grid_is_a_construction_error() {
    let err = Simulation::run(&mixed_swarm(), 0, 10, 5, 1).unwrap_err();
    assert!(matches!(err, SwarmError::Grid(_)));
}

#[test]
fn contested_cells_go_to_fitter_then_lower_id() {
    let genomes = vec![Genome::new(1.0, 0.3); 12];
    for seed in 0..5 {
        let mut coordinator = Simulation::new(&genomes, 5, 5, seed).unwrap().into_coordinator();
        let mut contests = 0;
        for _ in 0..30 {
            let fitness: Vec<usize> = coordinator.agents().iter().map(|a| a.fitness()).collect();
            for event in coordinator.tick() {
                if let SwarmEvent::Contested { winner, losers, .. } = event {
                    contests += 1;
                    for loser in losers {
                        let (fw, fl) = (fitness[winner.index()], fitness[loser.index()]);
                        assert!(fw > fl || (fw == fl && winner < loser));
                    }
                }
            }
        }
        assert!(contests > 0, "a crowded 5x5 torus should produce contests");
    }
}

#[test]
fn pure_exploitation_spreads_adjacent_agents() {
    let max_distance = 4;
    let mut greedy_total = 0;
    let mut random_total = 0;
    let seeds = 50;
    for seed in 0..seeds {
        let mut greedy = pair_on_5x5(0.0, seed);
        greedy.run(10);
        let d = final_distance(&greedy);
        assert!(d >= max_distance - 1, "seed {} ended only {} apart", seed, d);
        greedy_total += d;

        let mut random = pair_on_5x5(1.0, seed);
        random.run(10);
        random_total += final_distance(&random);
    }
    assert!(greedy_total > random_total);
}

#[test]
fn full_exploration_covers_small_torus() {
    let genomes = [Genome::new(3.0, 1.0)];
    for seed in 0..50 {
        let mut sim = Simulation::new(&genomes, 4, 4, seed).unwrap();
        sim.run_steps(30);
        assert_eq!(sim.total_fitness(), 16, "seed {} did not cover the grid", seed);
    }
}

#[test]
fn evolved_genome_round_trips_through_store() {
    let evolution = EvolutionConfig {
        generations: 2,
        population_size: 4,
        parents_mating: 2,
        keep_parents: 1,
        ..EvolutionConfig::default()
    };
    let swarm = SwarmConfig {
        width: 5,
        height: 5,
        steps: 8,
        agent_count: 2,
        seed: 1,
    };
    let outcome = Optimizer::new(evolution, swarm.clone()).unwrap().run().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let store = JsonGenomeStore::new(dir.path().join("best_genome.json"));
    assert_eq!(store.load_best_genome(), None);
    store.save_best_genome(&outcome.best_genome).unwrap();
    let loaded = store.load_best_genome().unwrap();
    assert_eq!(loaded, outcome.best_genome);

    let sim = Simulation::from_config(loaded, &swarm).unwrap();
    assert_eq!(sim.coordinator().agents().len(), 2);
}
