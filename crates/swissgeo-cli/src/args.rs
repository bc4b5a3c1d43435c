use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use swissgeo_core::{MatchMode, RemoteFilter};

/// CLI arguments for swissgeo
#[derive(Debug, Parser)]
#[command(
    name = "swissgeo",
    version,
    about = "CLI for inspecting the Swiss location hierarchy and filtering job listings"
)]
pub struct CliArgs {
    /// Log filter used when RUST_LOG is not set (e.g. warn, debug, swissgeo_core=trace)
    #[arg(long = "log-level", global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the classification tables
    Stats,

    /// List all regions with their cantons
    Regions,

    /// List all cantons
    Cantons,

    /// Show a canton by code (e.g. ZH, ge)
    Canton {
        /// Two-letter canton code
        code: String,
    },

    /// List sub-regions, optionally only those of one canton
    SubRegions {
        /// Two-letter canton code
        #[arg(short = 'c', long = "canton")]
        canton: Option<String>,
    },

    /// Detect the sub-region of a 4-digit postal code
    Detect {
        /// Postal code, compared exactly (e.g. 8001)
        postal_code: String,
    },

    /// Print the selection tree after applying toggles
    Tree {
        /// Toggle to apply, in order: region:<code>, canton:<code> or sub-region:<code>
        #[arg(short = 's', long = "select")]
        select: Vec<String>,
    },

    /// Filter job records from a JSON file by location
    Filter {
        /// JSON array of job records
        #[arg(short = 'j', long = "jobs")]
        jobs: PathBuf,

        /// Toggle to apply, in order: region:<code>, canton:<code> or sub-region:<code>
        #[arg(short = 's', long = "select")]
        select: Vec<String>,

        /// How selection levels are combined
        #[arg(long = "mode", value_enum, default_value_t = ModeArg::Strict)]
        mode: ModeArg,

        /// Remote work filter applied on top of the location match
        #[arg(long = "remote", value_enum, default_value_t = RemoteArg::Any)]
        remote: RemoteArg,

        /// Do not infer missing sub-regions from postal codes
        #[arg(long = "no-detect")]
        no_detect: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Strict,
    Union,
}

impl From<ModeArg> for MatchMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Strict => MatchMode::StrictPrecedence,
            ModeArg::Union => MatchMode::Union,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RemoteArg {
    Any,
    Only,
    OnSite,
}

impl From<RemoteArg> for RemoteFilter {
    fn from(r: RemoteArg) -> Self {
        match r {
            RemoteArg::Any => RemoteFilter::Any,
            RemoteArg::Only => RemoteFilter::RemoteOnly,
            RemoteArg::OnSite => RemoteFilter::OnSiteOnly,
        }
    }
}
