use anyhow::Context;
use clap::Parser;
use station_importer::cli::{args::Args, commands};
use std::io::IsTerminal;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if let Err(error) = commands::setup_logging(&args) {
        eprintln!("Warning: {}", error);
    }

    let colored = std::io::stdout().is_terminal();
    let result = commands::run(&args, colored).context("Station import aborted");

    match result {
        Ok(summary) => {
            for (path, error) in &summary.failures {
                eprintln!("Error: failed to import {}: {}", path.display(), error);
            }

            if summary.is_success() {
                process::exit(0);
            }
            process::exit(1);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
