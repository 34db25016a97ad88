//! Output formatting module

use garage_app::app::{Section, Transcript};
use garage_domain::service::{generate_efficiency_report, EfficiencyRow};
use garage_types::{OutputFormat, Result};

pub fn output_transcript(output_format: OutputFormat, transcript: &Transcript) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(transcript)?);
    } else {
        for section in &transcript.sections {
            print_section(section);
        }
    }
    Ok(())
}

pub fn output_section(output_format: OutputFormat, section: &Section) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(section)?);
    } else {
        print_section(section);
    }
    Ok(())
}

pub fn output_efficiency(output_format: OutputFormat, rows: &[EfficiencyRow]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        print!("{}", generate_efficiency_report(rows));
    }
    Ok(())
}

fn print_section(section: &Section) {
    println!("\n{}", section.title);
    println!("{}", "=".repeat(section.title.chars().count()));
    for step in &section.steps {
        println!("{}", step);
    }
}
