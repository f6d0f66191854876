use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "supplysight",
    version,
    about = "Supply-chain resilience scoring and risk assessment CLI"
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
    /// Evaluate factors supplied directly on the command line
    Assess(AssessCommand),
    /// Evaluate the first data row of an input CSV
    Score(ScoreCommand),
    /// Write the input CSV template
    Template(TemplateCommand),
    /// Validate an input CSV against the canonical schema
    Lint(LintCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct AssessCommand {
    /// Number of distinct suppliers (1-5)
    #[arg(long)]
    pub supplier_count: i64,

    /// Geographic diversification (1-5, higher is more diversified)
    #[arg(long)]
    pub geo_spread: i64,

    /// Cost volatility (1=low, 5=high)
    #[arg(long)]
    pub cost_volatility: i64,

    /// Lead time (1=short, 5=long)
    #[arg(long)]
    pub lead_time: i64,

    /// Alternative supplier options (1-5)
    #[arg(long)]
    pub alt_supplier_options: i64,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct TemplateCommand {
    /// Destination file; stdout when omitted
    pub path: Option<PathBuf>,

    #[arg(long)]
    pub no_overwrite: bool,
}

#[derive(Args)]
pub struct LintCommand {
    pub path: PathBuf,
}
