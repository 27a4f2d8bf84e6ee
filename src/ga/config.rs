//! Population configuration.
//!
//! [`PopulationConfig`] holds the parameters of one evolutionary run.

use super::alphabet::Alphabet;
use crate::error::{EvolveError, Result};

/// Smallest population a run accepts.
pub const MIN_POPULATION_SIZE: usize = 2;

/// Largest population a run accepts.
pub const MAX_POPULATION_SIZE: usize = 1000;

/// Parameters for a [`Population`](super::Population).
///
/// # Defaults
///
/// ```
/// use phrase_evolver::ga::PopulationConfig;
///
/// let config = PopulationConfig::default();
/// assert_eq!(config.target, "Hello, World!");
/// assert_eq!(config.population_size, 1000);
/// assert!((config.mutation_rate - 0.01).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use phrase_evolver::ga::PopulationConfig;
///
/// let config = PopulationConfig::new("To be or not to be")
///     .with_mutation_rate(0.02)
///     .with_population_size(200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PopulationConfig {
    /// Phrase the population evolves toward. Fixed for the run.
    pub target: String,

    /// Probability (0.0–1.0) that any single symbol is redrawn during mutation.
    pub mutation_rate: f64,

    /// Number of candidates per generation.
    pub population_size: usize,

    /// Symbols available to random draws. The target must be spelled from it.
    pub alphabet: Alphabet,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            target: "Hello, World!".to_string(),
            mutation_rate: 0.01,
            population_size: MAX_POPULATION_SIZE,
            alphabet: Alphabet::default(),
        }
    }
}

impl PopulationConfig {
    /// Default parameters with the given target.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    /// Sets the target phrase.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the mutation rate. Out-of-range values are kept and rejected by
    /// [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the symbol alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Number of symbols in the target.
    pub fn target_len(&self) -> usize {
        self.target.chars().count()
    }

    /// Clamps a requested population size into the supported range.
    pub fn clamp_population_size(requested: usize) -> usize {
        requested.clamp(MIN_POPULATION_SIZE, MAX_POPULATION_SIZE)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.target.is_empty() {
            return Err(EvolveError::EmptyTarget);
        }
        self.alphabet.check_text(&self.target)?;
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolveError::InvalidMutationRate(self.mutation_rate));
        }
        if !(MIN_POPULATION_SIZE..=MAX_POPULATION_SIZE).contains(&self.population_size) {
            return Err(EvolveError::InvalidPopulationSize {
                size: self.population_size,
                min: MIN_POPULATION_SIZE,
                max: MAX_POPULATION_SIZE,
            });
        }
        Ok(())
    }
}
