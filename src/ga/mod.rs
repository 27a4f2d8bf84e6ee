//! Genetic algorithm that evolves strings toward a target phrase.
//!
//! Candidates are fixed-length symbol sequences scored by the fraction of
//! positions that match the target. Each generation builds a
//! fitness-weighted mating pool, breeds children by single-point crossover
//! and mutates them symbol by symbol.
//!
//! # Key Types
//!
//! - [`Alphabet`]: Symbols available to random draws
//! - [`Candidate`]: One phrase with its cached fitness
//! - [`PopulationConfig`]: Target, mutation rate and population size
//! - [`MatingPool`]: Fitness-proportional parent selection
//! - [`Population`]: One generation plus the evolutionary step
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Shiffman (2012), *The Nature of Code*, ch. 9 "The Evolution of Code"

mod alphabet;
mod candidate;
mod config;
mod population;
mod selection;

pub use alphabet::{pick_random, Alphabet, DEFAULT_SYMBOLS};
pub use candidate::Candidate;
pub use config::{PopulationConfig, MAX_POPULATION_SIZE, MIN_POPULATION_SIZE};
pub use population::{Population, PERFECT_SCORE};
pub use selection::{MatingPool, POOL_SCALE};
