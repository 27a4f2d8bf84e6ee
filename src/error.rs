//! Error type shared by the GA core and the session driver.

use thiserror::Error;

/// Errors raised by configuration checks and by the evolutionary loop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvolveError {
    #[error("target phrase must not be empty")]
    EmptyTarget,

    #[error("candidate must contain at least one symbol")]
    EmptyCandidate,

    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("alphabet lists {0:?} more than once")]
    DuplicateSymbol(char),

    #[error("symbol {0:?} is not part of the alphabet")]
    SymbolNotInAlphabet(char),

    #[error("mutation rate must be within [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("population size must be within [{min}, {max}], got {size}")]
    InvalidPopulationSize { size: usize, min: usize, max: usize },

    #[error("length mismatch: expected {expected} symbols, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("member {0} has not been evaluated")]
    Unevaluated(usize),

    #[error("mating pool is empty; build it before breeding")]
    EmptyMatingPool,
}

pub type Result<T> = std::result::Result<T, EvolveError>;
