//! Problem definition: the TSP instance the solver runs against.
//!
//! The solver treats the instance as an external, read-only dataset: a city
//! count and an N×N distance matrix with strictly positive off-diagonal
//! entries. All dataset preconditions are checked here, once, at
//! construction, so the algorithm itself never has to re-validate.

use crate::error::{GaError, Result};
use serde::{Deserialize, Serialize};

/// Represents a city by its planar coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    /// Create a new city.
    pub fn new(x: f64, y: f64) -> Self {
        City { x, y }
    }

    /// Calculate the Euclidean distance between two cities.
    pub fn distance(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Represents a TSP instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub n_cities: usize,
    pub distance_matrix: Vec<Vec<f64>>,
    /// Cost of a known optimal tour, when available. Reporting only; the
    /// algorithm never reads it.
    pub reference_cost: Option<f64>,
}

impl Problem {
    /// Create a TSP instance from an explicit distance matrix.
    ///
    /// The matrix must be square with at least two cities, and every
    /// off-diagonal entry must be finite and strictly positive. Diagonal
    /// entries are never read because tours visit each city exactly once.
    pub fn from_matrix(name: String, distance_matrix: Vec<Vec<f64>>) -> Result<Self> {
        let n = distance_matrix.len();
        if n < 2 {
            return Err(GaError::Dataset(format!(
                "need at least 2 cities, got {}",
                n
            )));
        }
        for (i, row) in distance_matrix.iter().enumerate() {
            if row.len() != n {
                return Err(GaError::Dataset(format!(
                    "distance matrix is not square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            for (j, &d) in row.iter().enumerate() {
                if i != j && !(d.is_finite() && d > 0.0) {
                    return Err(GaError::Dataset(format!(
                        "distance[{}][{}] = {} must be finite and strictly positive",
                        i, j, d
                    )));
                }
            }
        }

        Ok(Problem {
            name,
            n_cities: n,
            distance_matrix,
            reference_cost: None,
        })
    }

    /// Create a TSP instance from city coordinates, using Euclidean
    /// distances.
    ///
    /// Cities must be pairwise distinct so that every off-diagonal distance
    /// is strictly positive.
    pub fn from_cities(name: String, cities: &[City]) -> Result<Self> {
        Self::from_matrix(name, Self::compute_distance_matrix(cities))
    }

    /// Attach the cost of a known optimal tour for reporting.
    pub fn with_reference_cost(mut self, cost: f64) -> Self {
        self.reference_cost = Some(cost);
        self
    }

    /// Calculate the distance between two city indices.
    pub fn get_distance(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix[from][to]
    }

    /// Generate the full distance matrix for a list of cities.
    fn compute_distance_matrix(cities: &[City]) -> Vec<Vec<f64>> {
        let n = cities.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i][j] = cities[i].distance(&cities[j]);
                }
            }
        }

        matrix
    }
}
