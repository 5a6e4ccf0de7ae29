//! EmitBench CLI: benchmark reports without the dashboard.
//!
//! Commands:
//! - `report` prints the markdown analysis for one company and year
//! - `list` prints the companies and years found in a table

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use emitbench_core::{render_pass, DashboardConfig, EmissionsTable, MarkdownReport, Selection, ViewToggles};

#[derive(Parser)]
#[command(
    name = "emitbench",
    about = "EmitBench: greenhouse-gas emissions benchmarking against industry peers"
)]
struct Cli {
    /// Debug logging on stderr (RUST_LOG overrides).
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the benchmark and trend report for one company.
    Report {
        /// Excel, CSV or Parquet table.
        #[arg(long)]
        file: PathBuf,

        /// Company name. Defaults to the configured company, else the first one.
        #[arg(long)]
        company: Option<String>,

        /// Reporting year. Defaults to the latest year in the table.
        #[arg(long)]
        year: Option<i32>,

        /// Include the historical trend analysis.
        #[arg(long, default_value_t = false)]
        trend: bool,

        /// With --trend, skip the current-year analysis.
        #[arg(long, default_value_t = false)]
        no_current: bool,

        /// Config file. Defaults to the platform config directory.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List the companies and years in a table.
    List {
        #[arg(long)]
        file: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match cli.command {
        Commands::Report {
            file,
            company,
            year,
            trend,
            no_current,
            config,
        } => {
            let toggles = ViewToggles {
                show_trend: trend,
                also_show_current: !no_current,
            };
            run_report(&file, company, year, toggles, config.as_deref())
        }
        Commands::List { file, config } => run_list(&file, config.as_deref()),
    }
}

fn load(file: &Path, config: Option<&Path>) -> Result<(DashboardConfig, EmissionsTable)> {
    let config = DashboardConfig::load(config).context("loading config")?;
    let table = EmissionsTable::load(file, &config)
        .map_err(|err| anyhow!("Error processing data: {err}"))?;
    tracing::info!(file = %file.display(), rows = table.len(), "table loaded");
    Ok((config, table))
}

/// Company and year for the report, filling in the defaults.
fn resolve_selection(
    table: &EmissionsTable,
    config: &DashboardConfig,
    company: Option<String>,
    year: Option<i32>,
) -> Result<Selection> {
    let company = match company {
        Some(c) => c,
        None => table
            .default_company(config.default_company.as_deref())
            .ok_or_else(|| anyhow!("table has no companies after filtering"))?,
    };
    let year = match year {
        Some(y) => y,
        None => table
            .years()
            .last()
            .copied()
            .ok_or_else(|| anyhow!("table has no years after filtering"))?,
    };
    Ok(Selection::new(company, year))
}

fn run_report(
    file: &Path,
    company: Option<String>,
    year: Option<i32>,
    toggles: ViewToggles,
    config: Option<&Path>,
) -> Result<()> {
    let (config, table) = load(file, config)?;
    let selection = resolve_selection(&table, &config, company, year)?;
    let view = render_pass(&table, &selection, toggles);

    for err in view.errors() {
        eprintln!("{}: {err}", if err.is_warning() { "warning" } else { "error" });
    }
    print!("{}", MarkdownReport::render(&view));
    Ok(())
}

fn run_list(file: &Path, config: Option<&Path>) -> Result<()> {
    let (config, table) = load(file, config)?;

    println!("Item:      {}", config.filters.item);
    println!("Rows:      {}", table.len());
    println!(
        "Years:     {}",
        table
            .years()
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();
    println!("{:<24} {:>6}", "Company", "Years");
    println!("{}", "-".repeat(31));
    for company in table.companies() {
        let reported = table
            .company_history(&company)
            .iter()
            .filter(|p| p.value.is_some())
            .count();
        println!("{:<24} {:>6}", company, reported);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use emitbench_core::DisclosureRecord;

    fn table() -> EmissionsTable {
        EmissionsTable::new(
            vec![
                DisclosureRecord::new("Beta", 2020, "t", Some(1.0)),
                DisclosureRecord::new("Acme", 2022, "t", Some(2.0)),
            ],
            "t",
        )
    }

    #[test]
    fn report_args_parse() {
        let cli = Cli::try_parse_from([
            "emitbench", "report", "--file", "a.csv", "--trend", "--no-current", "--verbose",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Report { trend, no_current, year, .. } => {
                assert!(trend);
                assert!(no_current);
                assert!(year.is_none());
            }
            Commands::List { .. } => panic!("expected report"),
        }
    }

    #[test]
    fn report_requires_file() {
        assert!(Cli::try_parse_from(["emitbench", "report"]).is_err());
    }

    #[test]
    fn selection_defaults_to_first_company_and_latest_year() {
        let config = DashboardConfig::default();
        let sel = resolve_selection(&table(), &config, None, None).unwrap();
        assert_eq!(sel, Selection::new("Acme", 2022));

        let sel = resolve_selection(&table(), &config, Some("Beta".into()), Some(2020)).unwrap();
        assert_eq!(sel, Selection::new("Beta", 2020));
    }

    #[test]
    fn empty_table_has_no_selection() {
        let empty = EmissionsTable::new(Vec::new(), "t");
        assert!(resolve_selection(&empty, &DashboardConfig::default(), None, None).is_err());
    }
}
