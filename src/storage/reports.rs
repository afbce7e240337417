//! Report queries over the stored data

use super::{models::TopSalary, schema::NbaDatabase};
use crate::cli::types::Year;
use anyhow::Result;
use rusqlite::params;

impl NbaDatabase {
    /// Salaries of players on playoff teams for `year`, highest first.
    ///
    /// With `limit` of `None` all matching rows are returned.
    pub fn top_playoff_salaries(&self, year: Year, limit: Option<u32>) -> Result<Vec<TopSalary>> {
        let mut stmt = self.conn.prepare(
            "SELECT pt.year, pt.team_name, tp.player_name, ps.salary, ps.salary_currency
             FROM nba_playoff_teams pt
             JOIN nba_team_players tp
               ON tp.team_name = pt.team_name AND tp.year = pt.year
             JOIN nba_player_salaries ps
               ON ps.player_name = tp.player_name AND ps.year = tp.year
             WHERE pt.year = ?
             ORDER BY ps.salary DESC
             LIMIT ?",
        )?;

        // SQLite treats a negative limit as no limit.
        let limit = limit.map_or(-1, i64::from);
        let rows = stmt.query_map(params![year.as_u16(), limit], |row| {
            Ok(TopSalary {
                year: Year::new(row.get(0)?),
                team: row.get(1)?,
                player: row.get(2)?,
                salary: row.get(3)?,
                currency: row.get(4)?,
            })
        })?;

        let mut salaries = Vec::new();
        for row in rows {
            salaries.push(row?);
        }
        Ok(salaries)
    }
}
