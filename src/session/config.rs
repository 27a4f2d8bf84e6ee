//! Session configuration.

use crate::error::Result;
use crate::ga::PopulationConfig;
use std::time::Duration;

/// Ranked members shown per generation unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// Configuration for a [`Session`](super::Session).
///
/// ```
/// use phrase_evolver::session::SessionConfig;
///
/// let config = SessionConfig::new("Hello")
///     .with_seed(42)
///     .with_max_generations(500)
///     .with_top_n(5);
/// assert_eq!(config.population.target, "Hello");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SessionConfig {
    /// Parameters of each population the session creates.
    pub population: PopulationConfig,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Pause between generations in [`Session::run`](super::Session::run).
    pub delay_ms: u64,

    /// Upper bound on generations per [`Session::run`](super::Session::run).
    ///
    /// `None` runs until the target is found.
    pub max_generations: Option<usize>,

    /// Number of ranked members included in each report.
    pub top_n: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            population: PopulationConfig::default(),
            seed: None,
            delay_ms: 0,
            max_generations: None,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl SessionConfig {
    /// Default parameters with the given target.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            population: PopulationConfig::new(target),
            ..Self::default()
        }
    }

    /// Replaces the population parameters.
    pub fn with_population(mut self, population: PopulationConfig) -> Self {
        self.population = population;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the pause between generations in milliseconds.
    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Sets the generation limit per run.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the number of ranked members per report.
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.population.validate()
    }
}
