//! Interactive genetic-algorithm demo: evolve random strings into a target
//! phrase.
//!
//! - [`ga`]: Candidates, fitness scoring, the mating pool, crossover and
//!   mutation, and the [`Population`](ga::Population) step
//! - [`session`]: Driver-owned run state with restart-on-change and a
//!   bounded, cancellable generation loop
//! - [`report`]: Per-generation snapshots, percent formatting and text
//!   rendering
//!
//! All randomness flows through an injected [`rand::Rng`], so seeded runs
//! are reproducible.

pub mod error;
pub mod ga;
pub mod report;
pub mod session;

pub use error::{EvolveError, Result};
