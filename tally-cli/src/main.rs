use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tally_core::{FilterCriteria, SuperCategory, compute_savings, filter_transactions};
use tally_ingest::{parse_rules_csv, parse_transactions_csv};

mod config;

use config::load_config;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Budget analytics over bank transaction exports")]
struct Cli {
    /// Config file (default: ./tally.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List annotated transactions, optionally filtered
    Transactions {
        /// Window start (YYYY-MM-DD); only applies together with --end-date
        #[arg(long, value_parser = parse_date)]
        start_date: Option<NaiveDate>,

        /// Window end (YYYY-MM-DD), inclusive
        #[arg(long, value_parser = parse_date)]
        end_date: Option<NaiveDate>,

        /// Exact bank category match, e.g. "Eating Out"
        #[arg(long)]
        category: Option<String>,

        /// Needs, Wants, Income or Other
        #[arg(long)]
        super_category: Option<SuperCategory>,
    },

    /// Savings/spending report against the threshold rules
    Savings {
        /// Window start (YYYY-MM-DD); only applies together with --end-date
        #[arg(long, value_parser = parse_date)]
        start_date: Option<NaiveDate>,

        /// Window end (YYYY-MM-DD), inclusive
        #[arg(long, value_parser = parse_date)]
        end_date: Option<NaiveDate>,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;

    // Dataset and rules load once; everything after only reads them.
    let txns = parse_transactions_csv(&cfg.data.transactions)?;

    match cli.command {
        Command::Transactions {
            start_date,
            end_date,
            category,
            super_category,
        } => {
            let criteria = FilterCriteria {
                start_date,
                end_date,
                category,
                super_category,
            };
            let filtered = filter_transactions(&txns, &criteria);
            println!("{}", serde_json::to_string_pretty(&filtered).context("serialize transactions")?);
        }

        Command::Savings {
            start_date,
            end_date,
        } => {
            let rules = parse_rules_csv(&cfg.data.rules)
                .context("loading threshold rules (required for savings status)")?;

            let report = compute_savings(&txns, start_date, end_date, &rules)?;
            if report.is_degenerate_window() {
                eprintln!("warning: no credit in window; ratios defaulted to 0");
            }
            println!("{}", serde_json::to_string_pretty(&report).context("serialize report")?);
        }
    }

    Ok(())
}
