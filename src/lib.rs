//! # TSP-GA
//!
//! A genetic-algorithm solver for fixed-instance Traveling Salesman
//! Problems: given an immutable N×N distance matrix, evolve a population of
//! candidate tours toward a low-cost Hamiltonian cycle.
//!
//! The algorithm combines elitism, tournament selection, ordered crossover,
//! and inversion mutation in a synchronous generation-by-generation loop.
//! Tour distances are evaluated with a data-parallel batch kernel; all
//! stochastic steps draw from a single explicitly seeded stream, so runs
//! with the same seed are bit-identical.

pub mod config;
pub mod error;
pub mod genetic;
pub mod population;
pub mod problem;
pub mod tour;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::genetic::Genetic;
use crate::population::Population;
use crate::problem::Problem;
use crate::tour::Tour;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// The main algorithm structure that orchestrates the evolutionary search.
pub struct GaAlgorithm {
    pub problem: Problem,
    pub config: Config,
    pub population: Population,
    pub genetic: Genetic,
    /// Best cycle length observed at the end of each generation
    pub cost_history: Vec<f64>,
    pub run_time: Duration,
    rng: ChaCha8Rng,
}

impl GaAlgorithm {
    /// Create a new solver for the given problem and configuration.
    ///
    /// Validates the configuration up front; dataset preconditions are
    /// already guaranteed by the [`Problem`] constructors.
    pub fn new(problem: Problem, config: Config) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let population = Population::new(config.population_size);

        Ok(GaAlgorithm {
            problem,
            config,
            population,
            genetic: Genetic,
            cost_history: Vec::new(),
            run_time: Duration::from_secs(0),
            rng,
        })
    }

    /// Initialize the population with random tours.
    pub fn initialize(&mut self) {
        self.population.initialize(
            self.config.population_size,
            self.problem.n_cities,
            &mut self.rng,
        );
    }

    /// Run the evolution loop and return the best tour with its cycle
    /// length.
    pub fn run(&mut self) -> (f64, Tour) {
        let start_time = Instant::now();

        self.initialize();

        let elite_size = self.config.elite_size();
        let tournament_size = self.config.tournament_size();
        self.cost_history = Vec::with_capacity(self.config.generations);

        for generation in 0..self.config.generations {
            let ranked = self.population.rank(&self.problem, self.config.parallel);

            // Elitism: the top tours survive unchanged, so the best cost
            // never regresses across generations.
            let mut offspring: Vec<Tour> = ranked.tours[..elite_size].to_vec();

            for _ in elite_size..self.config.population_size {
                let parent1 = self.genetic.select(&ranked, tournament_size, &mut self.rng);
                let parent2 = self.genetic.select(&ranked, tournament_size, &mut self.rng);
                let mut child = self.genetic.crossover(
                    parent1,
                    parent2,
                    self.config.crossover_rate,
                    &mut self.rng,
                );
                self.genetic
                    .mutate(&mut child, self.config.mutation_rate, &mut self.rng);
                offspring.push(child);
            }

            let (_, best_fitness) = ranked.best();
            debug!(
                "generation {}: best distance {:.2}",
                generation,
                1.0 / best_fitness
            );
            self.cost_history.push(1.0 / best_fitness);

            self.population = Population::from_tours(offspring);
        }

        // Final ranking to extract the best tour of the last generation.
        let ranked = self.population.rank(&self.problem, self.config.parallel);
        let best_tour = ranked.tours[0].clone();
        let best_cost = best_tour.distance(&self.problem);

        self.run_time = start_time.elapsed();
        info!(
            "finished {} generations in {}: best distance {:.2}",
            self.config.generations,
            utils::format_duration(self.run_time),
            best_cost
        );

        (best_cost, best_tour)
    }
}

/// Solve a TSP instance with the given configuration.
///
/// Convenience entry point: validates the configuration, runs the full
/// evolution loop, and returns `(best_cost, best_tour)`.
pub fn solve(problem: &Problem, config: &Config) -> Result<(f64, Tour)> {
    let mut algorithm = GaAlgorithm::new(problem.clone(), config.clone())?;
    Ok(algorithm.run())
}
