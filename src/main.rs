use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod analysis;
mod config;
mod error;
mod export;
mod models;
mod reference;
mod report;
mod source;

#[cfg(test)]
mod analysis_tests;
#[cfg(test)]
mod pipeline_tests;

use crate::analysis::AnalysisPipeline;
use crate::config::load_config;
use crate::export::DashboardExporter;
use crate::report::ConsoleReport;
use crate::source::CsvDataSource;

#[derive(Parser)]
#[command(name = "metal-on-the-road")]
#[command(about = "Global metal band analysis and dashboard export")]
#[command(version)]
struct Args {
    /// Bands CSV (Band ID, Country, Genre, Status)
    #[arg(long = "bands")]
    bands: Option<PathBuf>,

    /// Discography CSV (Band ID, Year)
    #[arg(long = "discography")]
    discography: Option<PathBuf>,

    /// Streaming popularity CSV (Artist, Genre, Subgenre, Popularity, Monthly_Listeners)
    #[arg(long = "spotify")]
    spotify: Option<PathBuf>,

    /// Where to write the dashboard JSON
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Quiet mode - skip the console report
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug {
        "metal_on_the_road=debug"
    } else {
        "metal_on_the_road=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let started = Local::now();
    if !args.quiet {
        println!("{}", "=".repeat(60));
        println!("METAL ON THE ROAD: Global Metal Band Analysis");
        println!("Run started {}", started.format("%Y-%m-%d %H:%M:%S"));
        println!("{}", "=".repeat(60));
    }

    let config = load_config().with_overrides(args.bands, args.discography, args.spotify, args.output);

    // Every input is required; fail before doing any work if one is missing
    for (label, path) in config.inputs() {
        if !path.exists() {
            eprintln!("Error: {} file '{}' not found.", label, path.display());
            return Err(anyhow::anyhow!(
                "Input file '{}' not found",
                path.display()
            ));
        }
    }

    let source = CsvDataSource::new(&config);
    let results = AnalysisPipeline::new(&source).run()?;

    if !args.quiet {
        ConsoleReport::print_analysis(&results);
    }

    let dashboard = DashboardExporter::build(&results);
    DashboardExporter::write(&dashboard, &config.output_path)?;

    if !args.quiet {
        ConsoleReport::print_summary(&dashboard);
    }

    let elapsed = Local::now() - started;
    info!("Finished in {} ms", elapsed.num_milliseconds());
    Ok(())
}
