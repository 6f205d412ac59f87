//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::service::rate_matcher::AmbiguousRatePolicy;

/// Output format for terminal results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "freight-recalc")]
#[command(version)]
#[command(about = "Reprice historic freight shipments against carrier price lists")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recalculate and simulate shipment costs, write the comparison workbook
    Recalculate {
        /// Historic cost table (.xlsx or .csv), fixed 23-column layout
        shipments: PathBuf,

        /// Carrier price list file; repeat for up to four carriers
        #[arg(long = "price-list", short = 'p', required = true)]
        price_lists: Vec<PathBuf>,

        /// Output workbook path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// How to handle price lists with duplicate lane/category pairs.
        /// Uses config value if not specified.
        #[arg(long)]
        ambiguous_rates: Option<AmbiguousRatePolicy>,
    },

    /// List the supported geography schemes in simulation order
    Schemes,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default ambiguous-rate policy
        #[arg(long)]
        set_ambiguous_rates: Option<AmbiguousRatePolicy>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
