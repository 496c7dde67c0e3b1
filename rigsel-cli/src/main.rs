//! A command line interface to the GPU rig selection solver.

use rigsel_cli::commands::{get_app, run_subcommand};

fn main() {
    let matches = get_app().get_matches();

    run_subcommand(matches);
}
