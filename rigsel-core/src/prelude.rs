//! This module reimports commonly used types.

pub use crate::evolution::EvaluatedGene;
pub use crate::evolution::EvolutionConfig;
pub use crate::evolution::EvolutionConfigBuilder;
pub use crate::evolution::EvolutionResult;
pub use crate::evolution::EvolutionSimulator;
pub use crate::evolution::RigObjective;
pub use crate::evolution::SolverSolution;
pub use crate::evolution::TelemetryMetrics;
pub use crate::evolution::TelemetryMode;

pub use crate::models::Allele;
pub use crate::models::Catalog;
pub use crate::models::CatalogItem;
pub use crate::models::Gene;
pub use crate::models::GeneTotals;

pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::SolverError;
pub use crate::utils::SolverResult;
pub use crate::utils::compare_floats;
pub use crate::utils::{DefaultRandom, Random, RandomGen};
pub use crate::utils::{Float, Timer};
