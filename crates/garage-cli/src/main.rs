//! Garage - a small vehicle fleet showcase
//!
//! Demonstrates a shared vehicle contract, an optional drivable capability,
//! and validated state through a CLI.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
