//! Catalog import helpers.

mod csv;
pub use self::csv::*;
