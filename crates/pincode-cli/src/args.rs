use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for pincode-cli
#[derive(Debug, Parser)]
#[command(
    name = "pincode",
    version,
    about = "Validate Indian pincodes and query the pincode-core reference table"
)]
pub struct CliArgs {
    /// Load this table instead of the packaged one (.json, .json.gz, .bin, .bin.gz)
    #[arg(short = 'd', long = "data", env = "PINCODE_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Print results as pretty JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the format of a pincode
    Validate { pincode: String },

    /// Resolve a pincode to its location (approximate if not in the table)
    Details { pincode: String },

    /// Cash-on-delivery eligibility
    Cod { pincode: String },

    /// Courier services summary
    Couriers { pincode: String },

    /// Delivery availability, optionally for one courier
    Delivery {
        pincode: String,
        /// Courier name (e.g. BlueDart, DTDC)
        #[arg(short, long)]
        courier: Option<String>,
    },

    /// Resolve several pincodes at once
    Bulk {
        #[arg(required = true)]
        pincodes: Vec<String>,
    },

    /// Distance and delivery estimate between two pincodes
    Distance { from: String, to: String },

    /// Table entries within a radius of a pincode
    Nearby {
        pincode: String,
        /// Radius in kilometres
        #[arg(short, long, default_value_t = pincode_core::geo::DEFAULT_NEARBY_RADIUS_KM)]
        radius: f64,
    },

    /// Search by city name (case-insensitive substring)
    City { query: String },

    /// Search by state name (case-insensitive substring)
    State { query: String },

    /// List metro entries
    Metros,

    /// List entries of one tier
    Tier {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
        tier: u8,
    },

    /// Show a summary of the table contents
    Stats,

    /// Convert a JSON table into a snapshot (.bin or .bin.gz)
    Build { input: PathBuf, output: PathBuf },
}
