//! Database schema and connection management

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// Database connection manager for scraped NBA data.
pub struct NbaDatabase {
    pub(crate) conn: Connection,
}

impl NbaDatabase {
    /// Open a database file and ensure the schema exists.
    ///
    /// The file and any missing parent directories are created if absent.
    /// Without a path an in-memory database is used, so results are only
    /// kept for the duration of the run.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let conn = match path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                Connection::open(path)?
            }
            None => Connection::open_in_memory()?,
        };

        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open a fresh in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::open(None)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Names of all scraped teams and players
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS nba_teams (
                name TEXT PRIMARY KEY
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS nba_players (
                name TEXT PRIMARY KEY
            )",
            [],
        )?;

        // Which teams participated in the playoffs for every year
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS nba_playoff_teams (
                id INTEGER PRIMARY KEY,
                year INTEGER NOT NULL,
                team_name TEXT NOT NULL REFERENCES nba_teams(name),
                UNIQUE (year, team_name)
            )",
            [],
        )?;

        // Team <-> player relation per year; assumes one team per player per year
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS nba_team_players (
                id INTEGER PRIMARY KEY,
                player_name TEXT NOT NULL REFERENCES nba_players(name),
                team_name TEXT NOT NULL REFERENCES nba_teams(name),
                year INTEGER NOT NULL,
                UNIQUE (year, player_name)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS nba_player_salaries (
                id INTEGER PRIMARY KEY,
                player_name TEXT NOT NULL REFERENCES nba_players(name),
                year INTEGER NOT NULL,
                salary INTEGER NOT NULL,
                salary_currency TEXT NOT NULL,
                UNIQUE (year, player_name)
            )",
            [],
        )?;

        // Statistics as typed name/value rows
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS nba_player_stats (
                id INTEGER PRIMARY KEY,
                player_name TEXT NOT NULL REFERENCES nba_players(name),
                year INTEGER NOT NULL,
                season TEXT NOT NULL CHECK (season IN ('postseason', 'regularseason')),
                stat_name TEXT NOT NULL,
                stat_value TEXT NOT NULL,
                stat_type TEXT NOT NULL,
                UNIQUE (year, player_name, season, stat_name)
            )",
            [],
        )?;

        // The report sorts salaries within a year
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_salary_year
             ON nba_player_salaries(year, salary)",
            [],
        )?;

        Ok(())
    }
}
