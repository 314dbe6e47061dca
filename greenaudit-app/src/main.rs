//! GreenAudit - Scope 1 & 2 emissions report for a single reporting period.

use anyhow::{Context, Result};
use clap::Parser;
use greenaudit_schemas::profile::IndustrySector;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

mod config;
mod plotting;
mod report;

#[derive(Parser, Debug)]
#[command(
    name = "greenaudit",
    version,
    about = "ESG carbon audit: Scope 1 & 2 emissions with an impact rating"
)]
pub struct Cli {
    /// Request YAML with a company profile and consumption figures
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    /// Factor-set YAML overriding the built-in emission factors and thresholds
    #[arg(short, long)]
    pub factors: Option<PathBuf>,

    /// Diesel consumption in liters
    #[arg(long, value_parser = config::parse_non_negative)]
    pub diesel: Option<f64>,

    /// Natural gas usage in cubic meters
    #[arg(long, value_parser = config::parse_non_negative)]
    pub gas: Option<f64>,

    /// Electricity consumption in kWh
    #[arg(long, value_parser = config::parse_non_negative)]
    pub electricity: Option<f64>,

    /// Company name shown on the report
    #[arg(long)]
    pub company: Option<String>,

    /// Industry sector (Logistics, Manufacturing or Retail)
    #[arg(long)]
    pub industry: Option<IndustrySector>,

    /// Directory for the chart and report files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Skip rendering the PNG bar chart
    #[arg(long)]
    pub no_chart: bool,

    /// Append the result to this CSV audit trail
    #[arg(long)]
    pub csv_log: Option<PathBuf>,

    /// Print the report as JSON instead of a text summary
    #[arg(long)]
    pub json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = config::AuditSettings::resolve(&cli)?;
    let mut audit = settings.to_builder().build()?;
    let audit_report = audit.run()?;

    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config::default_output_dir(&audit_report.profile.company_name));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    // Keep the request next to its results for traceability
    if let Some(request_path) = &cli.request {
        fs::copy(request_path, output_dir.join("request.yaml"))
            .with_context(|| format!("Failed to copy {}", request_path.display()))?;
    }

    let json = audit_report.to_json_pretty()?;
    write_file(&output_dir.join("report.json"), &json)?;

    if !cli.no_chart {
        let chart_path = plotting::plot_emissions_by_source(&output_dir, &audit_report)?;
        info!("Chart written to {}", chart_path.display());
    }

    if cli.json {
        println!("{}", json);
    } else {
        print!("{}", report::Summary(&audit_report));
        println!("\nResults are in '{}'", output_dir.display());
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
