//! NBA playoff salary and statistics scraper.
//!
//! Fetches player salaries and per-game statistics for the teams in a
//! season's playoffs from espn.com, stores everything in a local SQLite
//! database and prints the highest salaries.
//!
//! ## Pipeline
//!
//! - **Fetch**: HTTP GET of the playoff standings, the paginated salary
//!   list and every playoff team's statistics page
//! - **Parse**: CSS-selector extraction of teams, salaries and statistics
//! - **Persist**: merge-style inserts into SQLite (file or in-memory)
//! - **Report**: top-10 salaries among playoff players, as CSV or JSON
//!
//! Everything runs once per invocation, start to finish. All fetching
//! happens before the first database write, so a fetch error leaves the
//! database untouched.

pub mod cli;
pub mod commands;
pub mod error;
pub mod scrape;
pub mod storage;

// Re-export commonly used types
pub use cli::types::Year;
pub use error::{NbaError, Result};
pub use storage::NbaDatabase;
