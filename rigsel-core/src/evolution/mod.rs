//! Contains functionality to run evolution simulation.

mod config;
pub use self::config::*;

mod crossover;
pub use self::crossover::*;

mod mutation;
pub use self::mutation::*;

mod objective;
pub use self::objective::*;

mod selection;
pub use self::selection::*;

mod simulator;
pub use self::simulator::*;

pub mod telemetry;
pub use self::telemetry::*;

use crate::models::Gene;
use crate::utils::{Float, SolverError};

/// Defines evolution result type.
pub type EvolutionResult = Result<(SolverSolution, Option<TelemetryMetrics>), SolverError>;

/// A best gene found by the evolution with its fitness value.
#[derive(Clone, Debug)]
pub struct SolverSolution {
    /// A gene of the solution.
    pub gene: Gene,
    /// A fitness value of the solution.
    pub fitness: Float,
}
