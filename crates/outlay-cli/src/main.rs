//! Outlay CLI - Personal expense tracker
//!
//! Usage:
//!   outlay serve --port 3000        Start web server
//!   outlay report --file FILE       Summarize expenses from a JSON file
//!   outlay recommend --file FILE    Find cheaper catalog alternatives
//!   outlay predict --file FILE      Forecast next month's spend
//!   outlay export --file FILE       Export expenses to CSV or JSON

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            catalog,
            static_dir,
            cors_origins,
        } => {
            commands::cmd_serve(
                &host,
                port,
                catalog.as_deref(),
                static_dir.as_deref(),
                cors_origins,
            )
            .await
        }
        Commands::Report { file, group_by } => {
            let expenses = commands::load_expenses(&file)?;
            match group_by.as_str() {
                "category" => commands::cmd_report_category(&expenses),
                "month" => commands::cmd_report_monthly(&expenses),
                other => anyhow::bail!("Unknown grouping: {} (use category or month)", other),
            }
        }
        Commands::Recommend { file, catalog } => {
            let expenses = commands::load_expenses(&file)?;
            let catalog = commands::load_catalog(catalog.as_deref())?;
            commands::cmd_recommend(&expenses, &catalog)
        }
        Commands::Predict { file } => {
            let expenses = commands::load_expenses(&file)?;
            commands::cmd_predict(&expenses)
        }
        Commands::Export {
            file,
            output,
            format,
            summary,
        } => {
            let expenses = commands::load_expenses(&file)?;
            let format = format
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            commands::cmd_export(&expenses, output.as_deref(), format, summary)
        }
    }
}
