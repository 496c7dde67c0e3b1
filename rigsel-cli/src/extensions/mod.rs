//! Module provides various helper functionality.

pub mod import;
pub mod solve;
