//! Command line commands and their helpers.

use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod solve;

use self::solve::{get_solve_command, run_solve};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::process;
use std::str::FromStr;

/// Gets the command line application with all subcommands.
pub fn get_app() -> Command {
    Command::new("GPU Rig Selection Solver")
        .version("0.1")
        .about("A command line interface to the GPU rig selection solver")
        .subcommand(get_solve_command())
}

/// Runs the subcommand encoded in the given matches.
pub fn run_subcommand(matches: ArgMatches) {
    match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer).unwrap_or_else(|err| {
            eprintln!("cannot run solve command: '{err}'");
            process::exit(1);
        }),
        _ => {
            eprintln!("no subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    }
}

/// Creates a buffered writer over the given file or stdout when no file is given.
pub fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| {
        eprintln!("cannot open {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}
