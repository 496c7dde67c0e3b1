//! This module contains domain models: a hardware catalog and candidate solutions built from it.

mod catalog;
pub use self::catalog::*;

mod gene;
pub use self::gene::*;
