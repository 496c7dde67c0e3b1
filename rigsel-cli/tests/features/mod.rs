//! This module contains feature tests: end to end scenarios which run the solver through the command line surface.

mod solve;
