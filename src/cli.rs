use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::amav::NegativeMavPolicy;
use crate::input::table::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR};

#[derive(Debug, Parser)]
#[command(
    name = "kira-amav",
    version,
    about = "AMAV and fold-increase reconstruction from prevalence trends"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(
        long,
        help = "Input TSV (.tsv or .tsv.gz); default: data/Supplemental_Table_1.tsv and friends"
    )]
    pub input: Option<PathBuf>,

    #[arg(long, default_value = "output/AMAV_DATA", help = "Output directory")]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value_t = NegativeMavArg::Clamp)]
    pub negative_mav: NegativeMavArg,

    #[command(flatten)]
    pub years: YearArgs,

    #[arg(long, default_value_t = 0, help = "Number of threads (0 = auto)")]
    pub threads: usize,

    #[arg(long, default_value_t = false, help = "Also write amav_report.json")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Input TSV (.tsv or .tsv.gz)")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub years: YearArgs,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct YearArgs {
    #[arg(long, default_value_t = DEFAULT_MIN_YEAR, help = "Earliest header accepted as a year column")]
    pub min_year: i32,

    #[arg(long, default_value_t = DEFAULT_MAX_YEAR, help = "Latest header accepted as a year column")]
    pub max_year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NegativeMavArg {
    /// Negative yearly MAV adds zero to AMAV-POS.
    Clamp,
    /// Negative yearly MAV is summed as-is.
    Admit,
}

impl From<NegativeMavArg> for NegativeMavPolicy {
    fn from(arg: NegativeMavArg) -> Self {
        match arg {
            NegativeMavArg::Clamp => NegativeMavPolicy::Clamp,
            NegativeMavArg::Admit => NegativeMavPolicy::Admit,
        }
    }
}
