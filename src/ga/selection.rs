//! Fitness-proportional parent selection through a mating pool.
//!
//! Each member enters the pool `floor(fitness / max_fitness * 100)` times,
//! so the fittest members appear 100 times and members far below the best
//! may not appear at all. Parents are then drawn uniformly from the pool.
//!
//! When every member scores zero the relative fitness is undefined; the
//! pool then treats all members as equally fit and lists each of them
//! [`POOL_SCALE`] times, which makes parent selection uniform.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel selection)
//! - Shiffman (2012), *The Nature of Code*, ch. 9

use super::alphabet::pick_random;
use super::candidate::Candidate;
use crate::error::{EvolveError, Result};
use rand::Rng;

/// Number of pool entries given to a member with the maximum fitness.
pub const POOL_SCALE: usize = 100;

/// Weighted multiset of member indices.
///
/// The pool refers to members by their index in the generation it was
/// built from and is only meaningful until that generation is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatingPool {
    entries: Vec<usize>,
}

impl MatingPool {
    /// Builds the pool from evaluated members.
    ///
    /// # Errors
    /// [`EvolveError::Unevaluated`] if a member has no cached fitness.
    pub fn build(members: &[Candidate]) -> Result<Self> {
        let fitnesses = members
            .iter()
            .enumerate()
            .map(|(i, m)| m.fitness().ok_or(EvolveError::Unevaluated(i)))
            .collect::<Result<Vec<f64>>>()?;

        let max_fitness = fitnesses.iter().copied().fold(0.0, f64::max);
        if max_fitness <= 0.0 && !members.is_empty() {
            log::debug!("all members scored zero; mating pool is uniform");
        }

        let mut entries = Vec::new();
        for (i, &fitness) in fitnesses.iter().enumerate() {
            entries.extend(std::iter::repeat(i).take(copies(fitness, max_fitness)));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pool entries, one member index per entry.
    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    /// Number of entries for the member at `index`.
    pub fn multiplicity(&self, index: usize) -> usize {
        self.entries.iter().filter(|&&i| i == index).count()
    }

    /// Draws one member index uniformly from the pool.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        pick_random(&self.entries, rng).copied()
    }

    /// Empties the pool.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Pool entries for one member.
fn copies(fitness: f64, max_fitness: f64) -> usize {
    let relative = if max_fitness > 0.0 {
        fitness / max_fitness
    } else {
        1.0
    };
    (relative * POOL_SCALE as f64).floor() as usize
}
