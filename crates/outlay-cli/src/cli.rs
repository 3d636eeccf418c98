//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Outlay - Track expenses, spot cheaper alternatives
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Personal expense tracker with naive spending insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Product catalog JSON file (defaults to the embedded catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Allowed CORS origin (repeat for several)
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,
    },

    /// Summarize expenses from a JSON file
    Report {
        /// JSON file containing an array of expenses
        #[arg(short, long)]
        file: PathBuf,

        /// Grouping: category or month
        #[arg(short, long, default_value = "category")]
        group_by: String,
    },

    /// Recommend cheaper catalog products for expenses in a JSON file
    Recommend {
        /// JSON file containing an array of expenses
        #[arg(short, long)]
        file: PathBuf,

        /// Product catalog JSON file (defaults to the embedded catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Predict next month's spend from expenses in a JSON file
    Predict {
        /// JSON file containing an array of expenses
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Export expenses from a JSON file to CSV or JSON
    Export {
        /// JSON file containing an array of expenses
        #[arg(short, long)]
        file: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: csv or json
        #[arg(long, default_value = "csv")]
        format: String,

        /// Export the category summary instead of the raw expense rows
        /// (CSV only)
        #[arg(long)]
        summary: bool,
    },
}
