use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Terminal,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RiskPolicy {
    /// Risk-register thresholds (7/12/20); zero still classifies as Low
    General,
    /// Supplier thresholds (6/10/16); zero or below is unscored
    Supplier,
}

#[derive(Parser, Debug)]
#[command(name = "supplyscore")]
#[command(about = "Supplier KPI scoring and procurement risk classification", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the weighted KPI score for a metrics file
    Score {
        /// JSON file with an array of {key, score, weight} entries
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file overriding the default per-KPI weights
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score risk areas and classify the total
    Risk {
        /// JSON file with an array of {area, likelihood, impact} entries
        input: PathBuf,

        /// Threshold policy applied to the total
        #[arg(long, value_enum, default_value = "general")]
        policy: RiskPolicy,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a default supplyscore.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
