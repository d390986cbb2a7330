use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sdgscore",
    version,
    about = "SDG assessment scoring and reporting CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Score(ScoreCommand),
    Summary(SummaryCommand),
    Seed(SeedCommand),
}

/// Run the scoring pipeline for one assessment in a dataset file.
#[derive(Args)]
pub struct ScoreCommand {
    pub dataset: PathBuf,
    #[arg(long)]
    pub assessment: i64,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Scoring constants override file (defaults to ./sdgscore.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Score an assessment and render the full goal/pillar report.
#[derive(Args)]
pub struct SummaryCommand {
    pub dataset: PathBuf,
    #[arg(long)]
    pub assessment: i64,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Write the reference goal catalog and relationship graph as a dataset file.
#[derive(Args)]
pub struct SeedCommand {
    #[arg(long, default_value = "sdg-seed.json")]
    pub out: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
