//! Merge-style insert operations.
//!
//! All writes are `INSERT OR IGNORE`, so re-running the scraper against the
//! same data never duplicates rows and existing rows are never overwritten.

use super::{models::StatValue, schema::NbaDatabase};
use crate::{cli::types::Year, scrape::types::Season};
use anyhow::Result;
use rusqlite::params;

impl NbaDatabase {
    /// Insert a team if not present.
    pub fn merge_team(&mut self, team: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO nba_teams (name) VALUES (?)",
            params![team],
        )?;
        Ok(())
    }

    /// Mark a team as a playoff participant for a year, if not already.
    pub fn merge_playoff_team(&mut self, team: &str, year: Year) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO nba_playoff_teams (year, team_name) VALUES (?, ?)",
            params![year.as_u16(), team],
        )?;
        Ok(())
    }

    /// Insert a player if not present.
    pub fn merge_player(&mut self, player: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO nba_players (name) VALUES (?)",
            params![player],
        )?;
        Ok(())
    }

    /// Record which team a player belonged to in a year, if not already.
    pub fn merge_team_player(&mut self, team: &str, player: &str, year: Year) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO nba_team_players (player_name, team_name, year)
             VALUES (?, ?, ?)",
            params![player, team, year.as_u16()],
        )?;
        Ok(())
    }

    /// Record a player's salary for a year, if not already.
    pub fn merge_player_salary(
        &mut self,
        player: &str,
        year: Year,
        salary: i64,
        currency: &str,
    ) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO nba_player_salaries (player_name, year, salary, salary_currency)
             VALUES (?, ?, ?, ?)",
            params![player, year.as_u16(), salary, currency],
        )?;
        Ok(())
    }

    /// Record a player's statistics for a year and season, if not already.
    pub fn merge_player_stats(
        &mut self,
        player: &str,
        year: Year,
        season: Season,
        stats: &[(String, StatValue)],
    ) -> Result<()> {
        for (name, value) in stats {
            self.conn.execute(
                "INSERT OR IGNORE INTO nba_player_stats
                 (player_name, year, season, stat_name, stat_value, stat_type)
                 VALUES (?, ?, ?, ?, ?, ?)",
                params![
                    player,
                    year.as_u16(),
                    season.to_string(),
                    name,
                    value.to_string(),
                    value.type_name()
                ],
            )?;
        }
        Ok(())
    }
}
