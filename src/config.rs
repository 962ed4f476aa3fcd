//! Configuration parameters for the GA-TSP solver.

use crate::error::{GaError, Result};
use serde::{Deserialize, Serialize};

/// Configuration settings for a solver run.
///
/// Immutable for the duration of a run; validated once when the algorithm
/// is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of tours in the population (μ)
    pub population_size: usize,
    /// Fraction of the population carried unchanged into the next generation
    pub elite_split: f64,
    /// Fraction of the population sampled for each tournament
    pub tournament_split: f64,
    /// Probability of applying ordered crossover to a pair of parents
    pub crossover_rate: f64,
    /// Probability of applying inversion mutation to an offspring
    pub mutation_rate: f64,
    /// Number of generations to evolve
    pub generations: usize,
    /// Optional seed for reproducible runs
    pub seed: Option<u64>,
    /// Whether to evaluate tour distances in parallel
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            population_size: 100,
            elite_split: 0.2,
            tournament_split: 0.1,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            generations: 500,
            seed: None,
            parallel: true,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the elite fraction.
    pub fn with_elite_split(mut self, split: f64) -> Self {
        self.elite_split = split;
        self
    }

    /// Set the tournament-sample fraction.
    pub fn with_tournament_split(mut self, split: f64) -> Self {
        self.tournament_split = split;
        self
    }

    /// Set the crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Set the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Set the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Set the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable parallel distance evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of elite tours copied unchanged into the next generation.
    pub fn elite_size(&self) -> usize {
        ((self.population_size as f64 * self.elite_split) as usize).min(self.population_size)
    }

    /// Number of tours sampled in each tournament, at least one.
    pub fn tournament_size(&self) -> usize {
        ((self.population_size as f64 * self.tournament_split) as usize).max(1)
    }

    /// Validate the configuration.
    ///
    /// Returns a [`GaError::Configuration`] describing the first violated
    /// constraint, if any.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::Configuration(
                "population_size must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.elite_split) {
            return Err(GaError::Configuration(format!(
                "elite_split must be in [0, 1], got {}",
                self.elite_split
            )));
        }
        if !(self.tournament_split > 0.0 && self.tournament_split <= 1.0) {
            return Err(GaError::Configuration(format!(
                "tournament_split must be in (0, 1], got {}",
                self.tournament_split
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GaError::Configuration(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::Configuration(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        // tournament_split in (0, 1] guarantees tournament_size <= population_size,
        // but re-check so the invariant does not depend on float rounding.
        if self.tournament_size() > self.population_size {
            return Err(GaError::Configuration(format!(
                "tournament size {} exceeds population size {}",
                self.tournament_size(),
                self.population_size
            )));
        }
        Ok(())
    }
}
