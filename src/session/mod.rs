//! Driver-side run state.
//!
//! A [`Session`] owns the configuration, the random source and the current
//! [`Population`](crate::ga::Population) of one interactive run. Changing a
//! parameter restarts the run; [`Session::run`] steps generations until the
//! target is found, a generation limit is hit or the run is cancelled.

mod config;
mod runner;

pub use config::SessionConfig;
pub use runner::{RunOutcome, Session};
