//! Scraping layer: page fetching and HTML parsing.
//!
//! Organized into one module per page family:
//! - `http`: the shared HTTP client and page fetching
//! - `playoffs`: which teams made the playoffs in a season
//! - `salaries`: the paginated player salary list
//! - `stats`: team pages and per-player statistics tables
//!
//! Parsers are plain functions over the raw document text, so they can be
//! exercised against HTML fixtures without any network access.

pub mod http;
pub mod playoffs;
pub mod salaries;
pub mod stats;
pub mod types;

use crate::error::{NbaError, Result};
use scraper::Selector;

/// Parse a CSS selector, mapping syntax errors into [`NbaError::Selector`].
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| NbaError::Selector {
        message: e.to_string(),
    })
}
