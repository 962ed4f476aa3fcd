//! Population management: initialization, batch evaluation, and ranking.

use crate::problem::Problem;
use crate::tour::Tour;
use itertools::Itertools;
use rand::Rng;
use rayon::prelude::*;
use std::cmp::Ordering;

/// The set of candidate tours for one generation.
///
/// Semantically a set, but stored with stable indexing so distances and
/// fitness scores can be paired with their tours. The evolution loop
/// replaces the whole collection each generation rather than mutating it
/// in place.
pub struct Population {
    pub tours: Vec<Tour>,
}

impl Population {
    /// Create an empty population with capacity for `size` tours.
    pub fn new(size: usize) -> Self {
        Population {
            tours: Vec::with_capacity(size),
        }
    }

    /// Create a population from an explicit set of tours.
    pub fn from_tours(tours: Vec<Tour>) -> Self {
        Population { tours }
    }

    /// Fill the population with independently generated random tours.
    pub fn initialize<R: Rng>(&mut self, size: usize, n_cities: usize, rng: &mut R) {
        self.tours.clear();
        for _ in 0..size {
            self.tours.push(Tour::random(n_cities, rng));
        }
    }

    /// Number of tours in the population.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Whether the population holds no tours.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Compute the cycle length of every tour.
    ///
    /// Each evaluation reads only its own tour and the shared read-only
    /// distance matrix, so the parallel path needs no synchronization.
    /// Output order matches input order on both paths, and no randomness
    /// is consumed, so seeded runs are reproducible either way.
    pub fn batch_distances(&self, problem: &Problem, parallel: bool) -> Vec<f64> {
        if parallel {
            self.tours
                .par_iter()
                .map(|tour| tour.distance(problem))
                .collect()
        } else {
            self.tours
                .iter()
                .map(|tour| tour.distance(problem))
                .collect()
        }
    }

    /// Rank the population by fitness, best first.
    ///
    /// Fitness is the reciprocal of the cycle length; the matrix validation
    /// in [`Problem`] guarantees every length is strictly positive.
    pub fn rank(&self, problem: &Problem, parallel: bool) -> RankedPopulation {
        let distances = self.batch_distances(problem, parallel);
        let fitness: Vec<f64> = distances.iter().map(|d| 1.0 / d).collect();

        let order: Vec<usize> = (0..self.tours.len())
            .sorted_by(|&a, &b| {
                fitness[b]
                    .partial_cmp(&fitness[a])
                    .unwrap_or(Ordering::Equal)
            })
            .collect();

        // Reorder tours and fitness with the same permutation so each tour
        // stays paired with its score.
        RankedPopulation {
            tours: order.iter().map(|&i| self.tours[i].clone()).collect(),
            fitness: order.iter().map(|&i| fitness[i]).collect(),
        }
    }
}

/// A population ordered by descending fitness, paired with the scores.
///
/// An ephemeral view created once per generation and once more at
/// termination to extract the best tour.
pub struct RankedPopulation {
    pub tours: Vec<Tour>,
    pub fitness: Vec<f64>,
}

impl RankedPopulation {
    /// Number of ranked tours.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Whether the ranking is empty.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// The best tour and its fitness.
    pub fn best(&self) -> (&Tour, f64) {
        (&self.tours[0], self.fitness[0])
    }
}
