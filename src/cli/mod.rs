//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;
use types::Year;

/// Fetch salary and statistics of players from teams in the NBA playoffs.
///
/// All data is fetched first and written to the database afterwards, so a
/// fetch error leaves the database untouched. On any error the run aborts.
#[derive(Debug, Parser)]
#[clap(name = "nba-salaries", about = "NBA playoff salary and statistics scraper")]
pub struct NbaSalaries {
    /// Season year (e.g. 2021 for the 2020/21 season).
    #[clap(default_value_t = Year::default())]
    pub year: Year,

    /// SQLite file to store results in. Created if absent; when omitted an
    /// in-memory database is used and results are only printed.
    #[clap(long)]
    pub sqlite: Option<PathBuf>,

    /// Only log errors and suppress the final salary report.
    #[clap(long)]
    pub quiet: bool,

    /// Enable debug logging.
    #[clap(long)]
    pub debug: bool,

    /// Skip all scraping and report from the existing database.
    #[clap(long)]
    pub skip_scraping: bool,

    /// Output the salary report as JSON instead of CSV.
    #[clap(long)]
    pub json: bool,
}
