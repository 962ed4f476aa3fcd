//! Genetic operators: tournament selection, ordered crossover, and
//! inversion mutation.
//!
//! All randomness is drawn from an explicitly passed generator so that a
//! seeded run consumes the stream in a fixed, reproducible order.

use crate::population::RankedPopulation;
use crate::tour::Tour;
use rand::seq::index;
use rand::Rng;

/// Implements the genetic operators for the TSP solver.
pub struct Genetic;

impl Genetic {
    /// Tournament selection: sample `tournament_size` distinct tours
    /// uniformly from the entire ranked population and return the fittest.
    ///
    /// Ties break in favor of the first sampled index reaching the maximum
    /// fitness (scan order, no secondary draw). `tournament_size` must not
    /// exceed the population size; the configuration validation enforces
    /// this before a run starts.
    pub fn select<'a, R: Rng>(
        &self,
        ranked: &'a RankedPopulation,
        tournament_size: usize,
        rng: &mut R,
    ) -> &'a Tour {
        let sample = index::sample(rng, ranked.len(), tournament_size);

        let mut best_idx = sample.index(0);
        let mut best_fit = ranked.fitness[best_idx];
        for i in sample.iter().skip(1) {
            if ranked.fitness[i] > best_fit {
                best_fit = ranked.fitness[i];
                best_idx = i;
            }
        }
        &ranked.tours[best_idx]
    }

    /// Ordered crossover (OX) between two parent tours.
    ///
    /// With probability `1 - crossover_rate` the child is an exact copy of
    /// `parent1`. Otherwise a random half-open segment `[start, end)` of
    /// `parent1` is kept in place and the remaining positions are filled
    /// with `parent2`'s cities in `parent2`'s order, scanning for empty
    /// slots from `end` and wrapping circularly.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &Tour,
        parent2: &Tour,
        crossover_rate: f64,
        rng: &mut R,
    ) -> Tour {
        if rng.gen::<f64>() >= crossover_rate {
            return parent1.clone();
        }

        let n = parent1.len();

        // Two distinct cut points, ordered as start < end.
        let cuts = index::sample(rng, n, 2);
        let (mut start, mut end) = (cuts.index(0), cuts.index(1));
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }

        let mut child = vec![usize::MAX; n];
        let mut in_child = vec![false; n];
        for i in start..end {
            child[i] = parent1.cities[i];
            in_child[parent1.cities[i]] = true;
        }

        // Every city of parent2 not already copied is placed exactly once,
        // filling exactly the positions left empty by the segment copy.
        let mut pos = end;
        for &city in &parent2.cities {
            if !in_child[city] {
                while child[pos % n] != usize::MAX {
                    pos += 1;
                }
                child[pos % n] = city;
                in_child[city] = true;
            }
        }

        Tour::new(child)
    }

    /// Inversion mutation: with probability `mutation_rate`, reverse a
    /// random inclusive segment `[i, j]` of the tour in place.
    ///
    /// Only reorders existing cities, so the permutation invariant always
    /// holds.
    pub fn mutate<R: Rng>(&self, tour: &mut Tour, mutation_rate: f64, rng: &mut R) {
        if rng.gen::<f64>() < mutation_rate {
            let cuts = index::sample(rng, tour.len(), 2);
            let (mut i, mut j) = (cuts.index(0), cuts.index(1));
            if i > j {
                std::mem::swap(&mut i, &mut j);
            }
            tour.cities[i..=j].reverse();
        }
    }
}
