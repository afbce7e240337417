//! Data models for scraped pages.

use crate::cli::types::Year;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An NBA team as it appears on the playoff standings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// ESPN's `data-clubhouse-uid` attribute identifying the team.
    pub clubhouse_uid: String,
}

/// A player's salary for one season, as scraped from the salary list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSalary {
    pub name: String,
    pub position: String,
    pub team: String,
    pub year: Year,
    pub salary: i64,
    pub currency: String,
}

/// Which part of a season a statistic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Postseason,
    RegularSeason,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Postseason => write!(f, "postseason"),
            Season::RegularSeason => write!(f, "regularseason"),
        }
    }
}

/// One player's row of a team statistics table.
///
/// Statistics are kept as raw column-name/text pairs at this stage; typing
/// and validation happen before persisting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatLine {
    pub name: String,
    pub team: String,
    pub year: Year,
    pub season: Season,
    pub stats: BTreeMap<String, String>,
}
