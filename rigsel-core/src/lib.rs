//! This crate exposes a genetic algorithm and some helper functionality which can be used to
//! search for the best combination of items from a hardware catalog under a cost budget and
//! a memory floor.
//!
//! The crate does no I/O on its own: a catalog is built from plain models, evolution knobs are
//! collected with [`prelude::EvolutionConfigBuilder`] and a run is driven by
//! [`prelude::EvolutionSimulator`].

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evolution;
pub mod models;
pub mod prelude;
pub mod utils;
