//! Command handlers

use crate::cli::{Cli, Commands};
use crate::logging;
use crate::output::{output_efficiency, output_section, output_transcript};
use garage_app::app::{run_showcase, tour_fleet};
use garage_app::config::Config;
use garage_app::fleet::{default_fleet, load_fleet};
use garage_domain::service::rank_by_efficiency;
use garage_types::{OutputFormat, Result};
use std::path::Path;
use tracing::{debug, warn};

pub fn execute(cli: Cli) -> Result<()> {
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    logging::init(cli.verbose || config.verbose);
    if let Some(e) = load_error {
        warn!(error = %e, "falling back to default configuration");
    }

    let format = cli.format.unwrap_or(config.output_format);
    debug!(%format, "resolved output format");

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => cmd_demo(format),
        Commands::Tour { fleet } => cmd_tour(&fleet, format),
        Commands::Efficiency { fleet } => cmd_efficiency(fleet.as_deref(), format),
        Commands::Config {
            show,
            set_output,
            set_verbose,
        } => cmd_config(config, show, set_output, set_verbose),
    }
}

fn cmd_demo(format: OutputFormat) -> Result<()> {
    let transcript = run_showcase();
    output_transcript(format, &transcript)
}

fn cmd_tour(path: &Path, format: OutputFormat) -> Result<()> {
    let mut fleet = load_fleet(path)?;
    let title = format!("Fleet tour: {}", path.display());
    let section = tour_fleet(&title, &mut fleet);
    output_section(format, &section)
}

fn cmd_efficiency(path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let fleet = match path {
        Some(p) => load_fleet(p)?,
        None => default_fleet(),
    };
    let rows = rank_by_efficiency(&fleet);
    output_efficiency(format, &rows)
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_verbose: Option<bool>,
) -> Result<()> {
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(verbose) = set_verbose {
        config.verbose = verbose;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
