//! Tour representation for the genetic algorithm population.

use crate::problem::Problem;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A candidate tour: a permutation of the city indices `0..n_cities`.
///
/// Every operator in the crate preserves the permutation invariant, so a
/// tour created by [`Tour::random`] stays a valid Hamiltonian cycle
/// through crossover and mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub cities: Vec<usize>,
}

impl Tour {
    /// Create a tour from an explicit visiting order.
    pub fn new(cities: Vec<usize>) -> Self {
        Tour { cities }
    }

    /// Generate a uniformly random tour over `n_cities` cities.
    pub fn random<R: Rng>(n_cities: usize, rng: &mut R) -> Self {
        let mut cities: Vec<usize> = (0..n_cities).collect();
        cities.shuffle(rng);
        Tour { cities }
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Total length of the cycle: consecutive legs plus the closing leg
    /// back to the starting city.
    ///
    /// Pure function of the tour and the read-only distance matrix.
    pub fn distance(&self, problem: &Problem) -> f64 {
        let n = self.cities.len();
        let mut total = 0.0;
        for i in 0..n - 1 {
            total += problem.get_distance(self.cities[i], self.cities[i + 1]);
        }
        total + problem.get_distance(self.cities[n - 1], self.cities[0])
    }

    /// Check that the tour visits every city in `0..n_cities` exactly once.
    pub fn is_permutation(&self, n_cities: usize) -> bool {
        if self.cities.len() != n_cities {
            return false;
        }
        let mut seen = vec![false; n_cities];
        for &city in &self.cities {
            if city >= n_cities || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}
