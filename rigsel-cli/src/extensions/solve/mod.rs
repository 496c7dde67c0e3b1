//! Solve command helpers.

mod writers;
pub use self::writers::*;
