//! Session lifecycle and the generation loop.

use super::config::SessionConfig;
use crate::error::Result;
use crate::ga::{Population, PopulationConfig};
use crate::report::{format_percent, GenerationReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of [`Session::run`].
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// State after the last generation of the run.
    pub report: GenerationReport,

    /// Generations stepped during this call.
    pub generations: usize,

    /// Whether the target was found.
    pub finished: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// One interactive run: configuration, random source and population.
///
/// # Usage
///
/// ```
/// use phrase_evolver::session::{Session, SessionConfig};
///
/// let config = SessionConfig::new("Hi!").with_seed(42).with_max_generations(5_000);
/// let mut session = Session::new(config).unwrap();
/// let outcome = session.run(|_report| {}).unwrap();
/// assert!(outcome.finished);
/// assert_eq!(outcome.report.best, "Hi!");
/// ```
pub struct Session {
    config: SessionConfig,
    rng: StdRng,
    population: Population,
}

impl Session {
    /// Validates `config` and creates the first population.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random::<u64>));
        let population = Population::initialize(&config.population, &mut rng)?;
        log_start(&config.population);
        Ok(Self {
            config,
            rng,
            population,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Replaces the population with a fresh random one.
    ///
    /// The random stream continues, so a restart of a seeded session does
    /// not repeat the previous run.
    pub fn restart(&mut self) -> Result<()> {
        self.population = Population::initialize(&self.config.population, &mut self.rng)?;
        log_start(&self.config.population);
        Ok(())
    }

    /// Changes the target and restarts. Returns `false` if unchanged.
    pub fn set_target(&mut self, target: &str) -> Result<bool> {
        if target == self.config.population.target {
            return Ok(false);
        }
        let candidate = self.config.population.clone().with_target(target);
        self.apply(candidate)
    }

    /// Changes the mutation rate and restarts. Returns `false` if unchanged.
    pub fn set_mutation_rate(&mut self, rate: f64) -> Result<bool> {
        if rate == self.config.population.mutation_rate {
            return Ok(false);
        }
        let candidate = self.config.population.clone().with_mutation_rate(rate);
        self.apply(candidate)
    }

    /// Changes the population size and restarts. Returns `false` if unchanged.
    pub fn set_population_size(&mut self, size: usize) -> Result<bool> {
        if size == self.config.population.population_size {
            return Ok(false);
        }
        let candidate = self.config.population.clone().with_population_size(size);
        self.apply(candidate)
    }

    fn apply(&mut self, population: PopulationConfig) -> Result<bool> {
        population.validate()?;
        self.config.population = population;
        self.restart()?;
        Ok(true)
    }

    /// Snapshot of the current generation.
    pub fn report(&self) -> GenerationReport {
        GenerationReport::capture(&self.population, self.config.top_n)
    }

    /// Advances one generation and reports it.
    pub fn step(&mut self) -> Result<GenerationReport> {
        self.population.step(&mut self.rng)?;
        log::debug!(
            "generation {}: best {:?} ({}), average {}",
            self.population.generation(),
            self.population.best().to_string(),
            format_percent(self.population.best_fitness()),
            format_percent(self.population.average_fitness()),
        );
        Ok(self.report())
    }

    /// Steps generations until finished or the generation limit is reached.
    ///
    /// `observer` is called with the report of every generation.
    pub fn run<F: FnMut(&GenerationReport)>(&mut self, observer: F) -> Result<RunOutcome> {
        self.run_with_cancel(None, observer)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the current state.
    pub fn run_with_cancel<F: FnMut(&GenerationReport)>(
        &mut self,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> Result<RunOutcome> {
        let delay = self.config.delay();
        let mut report = self.report();
        let mut generations = 0usize;
        let mut cancelled = false;

        while !self.population.finished() {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if self
                .config
                .max_generations
                .is_some_and(|max| generations >= max)
            {
                break;
            }

            report = self.step()?;
            generations += 1;
            observer(&report);

            if !report.finished && !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }

        let finished = self.population.finished();
        if finished {
            log::info!(
                "found {:?} after {} generations",
                self.population.target(),
                self.population.generation()
            );
        } else if cancelled {
            log::info!("cancelled at generation {}", self.population.generation());
        } else {
            log::info!(
                "stopped at generation {} with best fitness {}",
                self.population.generation(),
                format_percent(self.population.best_fitness())
            );
        }

        Ok(RunOutcome {
            report,
            generations,
            finished,
            cancelled,
        })
    }
}

fn log_start(config: &PopulationConfig) {
    log::info!(
        "evolving {:?}: population {}, mutation rate {}",
        config.target,
        config.population_size,
        format_percent(config.mutation_rate)
    );
}
