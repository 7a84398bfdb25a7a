pub mod clear;
pub mod demo;
pub mod edit;
pub mod export;
pub mod funnel;
pub mod import;
pub mod init;
pub mod load;
pub mod matrix;
pub mod monitor;
pub mod status;

use clap::{Args, Parser, Subcommand};

use crate::advisor::DecisionPolicy;

#[derive(Parser)]
#[command(
    name = "metamonitor",
    about = "Meta Ads campaign monitor: CSV ingestion, decision engine, funnel analysis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct PolicyArgs {
    /// Maximum acceptable CPC (PLN)
    #[arg(long = "max-cpc", default_value_t = 2.0)]
    pub max_cpc: f64,
    /// Maximum acceptable cost per purchase (PLN)
    #[arg(long = "max-cost", default_value_t = 29.0)]
    pub max_cost: f64,
    /// Minimum purchases required to scale
    #[arg(long = "min-purchases", default_value_t = 5)]
    pub min_purchases: u64,
}

impl PolicyArgs {
    pub fn to_policy(&self) -> DecisionPolicy {
        DecisionPolicy {
            max_cpc: self.max_cpc,
            max_cost: self.max_cost,
            min_purchases: self.min_purchases,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up MetaMonitor: choose a data directory and initialize storage.
    Init {
        /// Path for MetaMonitor data (default: ~/Documents/metamonitor)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Import a Meta Ads CSV export, replacing the current portfolio.
    Import {
        /// Path to the CSV export
        file: String,
    },
    /// Load a previously exported analysis (JSON), replacing the portfolio.
    Load {
        /// Path to a metamonitor_*.json file
        file: String,
    },
    /// Export the current portfolio as pretty-printed JSON.
    Export {
        /// Output path (default: metamonitor_<date>.json)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the portfolio: summary, per-ad-set metrics and recommendations.
    Monitor {
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Show the sales funnel breakdown for one ad set.
    Funnel {
        /// Record id (shown in `metamonitor monitor`)
        id: u32,
    },
    /// Show the decision matrix for the active thresholds.
    Matrix {
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Edit one record's fields.
    Set {
        /// Record id (shown in `metamonitor monitor`)
        id: u32,
        /// New spend amount
        #[arg(long)]
        spent: Option<String>,
        /// New CPC
        #[arg(long)]
        cpc: Option<String>,
        /// New conversion count
        #[arg(long)]
        conversions: Option<String>,
        /// New status: active, warning, stopped
        #[arg(long)]
        status: Option<String>,
        /// New notes text
        #[arg(long)]
        notes: Option<String>,
    },
    /// Load a small sample portfolio to explore MetaMonitor.
    Demo,
    /// Show current storage location and portfolio statistics.
    Status,
    /// Clear the portfolio and its persisted state.
    Clear,
}
