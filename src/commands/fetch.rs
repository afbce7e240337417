//! The fetch-and-report pipeline.
//!
//! One run scrapes the playoff teams, the full salary list and every playoff
//! team's player statistics, writes the results into the database and prints
//! the highest salaries. All fetching happens before the first write, so a
//! fetch error leaves the database untouched.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::{
    cli::types::Year,
    scrape::{
        http::build_client,
        playoffs::fetch_playoff_teams,
        salaries::fetch_salaries,
        stats::{fetch_team_player_stats, fetch_team_stat_urls},
        types::PlayerStatLine,
    },
    storage::{NbaDatabase, StatValue, TopSalary},
    Result,
};

/// Number of salary rows in the printed report.
pub const REPORT_LIMIT: u32 = 10;

/// Per-game statistics persisted as floats.
const FLOAT_STATS: [&str; 4] = [
    "points_per_game",
    "assists_per_game",
    "rebounds_per_game",
    "minutes_per_game",
];

/// Configuration for a single scrape-and-report run.
#[derive(Debug)]
pub struct FetchParams {
    pub year: Year,
    pub sqlite: Option<PathBuf>,
    pub quiet: bool,
    pub as_json: bool,
    pub skip_scraping: bool,
}

/// Scrape a season into the database and print the top salaries.
pub async fn handle_fetch_and_report(params: FetchParams) -> Result<()> {
    if let Some(path) = &params.sqlite {
        debug!(path = %path.display(), "using sqlite file to store data");
    }
    let mut db = NbaDatabase::open(params.sqlite.as_deref())?;

    if !params.skip_scraping {
        scrape_season(&mut db, params.year).await?;
    }

    let top_salaries = db.top_playoff_salaries(params.year, Some(REPORT_LIMIT))?;
    if !params.quiet {
        if params.as_json {
            println!("{}", serde_json::to_string_pretty(&top_salaries)?);
        } else {
            print_salaries_as_csv(&top_salaries);
        }
    }
    Ok(())
}

/// Fetch one season's data and merge it into the database.
async fn scrape_season(db: &mut NbaDatabase, year: Year) -> Result<()> {
    let client = build_client()?;

    info!("Scraping teams...");
    let playoff_teams = fetch_playoff_teams(&client, year).await?;
    let team_names: BTreeSet<String> = playoff_teams.into_iter().map(|t| t.name).collect();

    info!("Scraping salaries...");
    let salaries: Vec<_> = fetch_salaries(&client, year)
        .await?
        .into_iter()
        .filter(|p| team_names.contains(&p.team))
        .collect();

    let team_urls: Vec<(String, String)> = fetch_team_stat_urls(&client)
        .await?
        .into_iter()
        .filter(|(team, _)| team_names.contains(team))
        .collect();

    info!("Scraping player statistics...");
    let mut player_stats = Vec::new();
    for (team, url) in &team_urls {
        player_stats.extend(fetch_team_player_stats(&client, team, url, year).await?);
    }

    // Everything is fetched; only now touch the database.
    info!("Insert teams into DB...");
    for team in &team_names {
        debug!(team = %team, "insert team");
        db.merge_team(team)?;
        db.merge_playoff_team(team, year)?;
    }

    info!("Insert player salaries into DB...");
    for player in &salaries {
        debug!(player = %player.name, "insert player salary");
        db.merge_player(&player.name)?;
        db.merge_team_player(&player.team, &player.name, year)?;
        db.merge_player_salary(&player.name, year, player.salary, &player.currency)?;
    }

    info!("Insert player statistics into DB...");
    for line in &player_stats {
        debug!(player = %line.name, "insert player statistics");
        // Salaries and statistics come from different pages and may
        // disagree, so merge the player and team relation here again.
        db.merge_player(&line.name)?;
        db.merge_team_player(&line.team, &line.name, year)?;
        if let Some(stats) = typed_stats(line) {
            db.merge_player_stats(&line.name, year, line.season, &stats)?;
        }
    }
    Ok(())
}

/// Convert the raw per-game statistics we persist into typed values.
///
/// A missing or unparsable statistic is logged and the player is skipped
/// rather than aborting the run.
fn typed_stats(line: &PlayerStatLine) -> Option<Vec<(String, StatValue)>> {
    let mut stats = Vec::new();

    match line.stats.get("games_played").map(|v| v.parse::<i64>()) {
        Some(Ok(games)) => stats.push(("games_played".to_string(), StatValue::Integer(games))),
        _ => {
            error!(player = %line.name, stat = "games_played", "missing or invalid statistic");
            return None;
        }
    }

    for name in FLOAT_STATS {
        match line.stats.get(name).map(|v| v.parse::<f64>()) {
            Some(Ok(value)) => stats.push((name.to_string(), StatValue::Float(value))),
            _ => {
                error!(player = %line.name, stat = name, "missing or invalid statistic");
                return None;
            }
        }
    }
    Some(stats)
}

/// Print the salary report in `#Player,Team,Salary` CSV form.
pub fn print_salaries_as_csv(salaries: &[TopSalary]) {
    println!("#Player,Team,Salary");
    for row in salaries {
        println!("{},{},{}{}", row.player, row.team, row.currency, row.salary);
    }
}
