//! A command line interface to the GPU rig selection solver.

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

pub mod commands;
pub mod extensions;
