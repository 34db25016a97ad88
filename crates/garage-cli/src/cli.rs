//! CLI definition using clap

use clap::{Parser, Subcommand};
use garage_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "garage")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vehicle fleet showcase: shared contract, optional capabilities, validated state")]
#[command(long_about = None)]
pub struct Cli {
    /// Runs the full demonstration when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full demonstration scenario
    Demo,

    /// Display, start, drive and rate every vehicle in a fleet file
    Tour {
        /// Path to fleet JSON file
        fleet: PathBuf,
    },

    /// Rank vehicles by efficiency
    Efficiency {
        /// Path to fleet JSON file (built-in fleet if omitted)
        fleet: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Enable/disable verbose logging by default
        #[arg(long)]
        set_verbose: Option<bool>,
    },
}
