mod cli;

use clap::Parser;
use sdg_scoring::config::{self, ScoringConstants, DEFAULT_CONFIG_FILE};
use sdg_scoring::dataset;
use sdg_scoring::error::{Result, ScoringError};
use sdg_scoring::report::{self, OutputFormat};
use sdg_scoring::scoring::score_assessment;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NOT_FOUND: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_constants(explicit: Option<&PathBuf>) -> Result<ScoringConstants> {
    let path = explicit
        .cloned()
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE).to_path_buf());
    Ok(config::load_constants(&path)?.unwrap_or_default())
}

fn render_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let constants = load_constants(cmd.config.as_ref())?;
            let mut store = dataset::load_dataset(&cmd.dataset)?.into_store();
            let outcome = score_assessment(&mut store, cmd.assessment, &constants)?;

            match cmd.format {
                cli::ReportFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&outcome)?);
                }
                cli::ReportFormat::Md => {
                    println!("Overall score: {:.2}", outcome.overall_score);
                    for (category_id, total) in &outcome.category_scores {
                        println!("- category {category_id}: {total:.2}");
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Summary(cmd) => {
            let constants = load_constants(cmd.config.as_ref())?;
            let mut store = dataset::load_dataset(&cmd.dataset)?.into_store();
            // Recalculation is idempotent and cheap, so the summary always
            // reflects the dataset as loaded.
            score_assessment(&mut store, cmd.assessment, &constants)?;
            let summary = report::build_summary(&store, cmd.assessment)?;
            println!("{}", report::render(&summary, render_format(&cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Seed(cmd) => {
            dataset::write_dataset(&cmd.out, &dataset::Dataset::seed())?;
            println!("seed dataset written to {}", cmd.out.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                ScoringError::AssessmentNotFound(_) | ScoringError::DatasetNotFound(_) => {
                    exit_code::NOT_FOUND
                }
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
