//! Scraping of team pages and per-player statistics tables.

use super::{
    http, selector,
    types::{PlayerStatLine, Season},
};
use crate::{cli::types::Year, error::NbaError, Result};
use reqwest::Client;
use scraper::Html;
use std::collections::BTreeMap;
use tracing::error;

/// Teams in the league, as listed on the team index page.
pub const LEAGUE_TEAM_COUNT: usize = 30;

/// A playoff roster should list at least this many players.
pub const MIN_PLAYERS_PER_TEAM: usize = 8;

pub const TEAM_INDEX_URL: &str = "https://www.espn.com/nba/teams";

/// Column order of the per-player statistics table.
pub const STAT_COLUMNS: [&str; 14] = [
    "games_played",
    "games_started",
    "minutes_per_game",
    "points_per_game",
    "offensive_rebounds_per_game",
    "defensive_rebounds_per_game",
    "rebounds_per_game",
    "assists_per_game",
    "steals_per_game",
    "blocks_per_game",
    "turnovers_per_game",
    "fouls_per_game",
    "assists_to_turnover_ratio",
    "player_efficiency_rating",
];

/// Postseason statistics page for a team, given its stats base URL.
pub fn team_stats_url(base_url: &str, year: Year) -> String {
    format!("{}/season/{}/seasontype/3", base_url, year)
}

/// Extract each team's statistics base URL from the team index page.
///
/// Every one of the 30 `section.TeamLinks` blocks carries the team name in
/// its single `h2` and a "Statistics" link; the link's last path segment is
/// dropped so season and type can be appended later.
pub fn parse_team_stat_urls(html: &str) -> Result<BTreeMap<String, String>> {
    let document = Html::parse_document(html);
    let section_sel = selector("section.TeamLinks")?;
    let header_sel = selector("h2")?;
    let stats_link_sel = selector(r#"a[href^="/nba/team/stats"]"#)?;

    let sections: Vec<_> = document.select(&section_sel).collect();
    if sections.len() != LEAGUE_TEAM_COUNT {
        return Err(NbaError::unexpected_page(format!(
            "found {} team sections on the team index page, expected {}",
            sections.len(),
            LEAGUE_TEAM_COUNT
        )));
    }

    let mut urls = BTreeMap::new();
    for section in sections {
        let headers: Vec<_> = section.select(&header_sel).collect();
        if headers.len() != 1 {
            return Err(NbaError::unexpected_page(format!(
                "unexpected number of h2 headers in team section: {}",
                headers.len()
            )));
        }
        let team: String = headers[0].text().collect();

        let links: Vec<_> = section.select(&stats_link_sel).collect();
        if links.len() != 1 {
            return Err(NbaError::unexpected_page(format!(
                "found {} stats links for team `{}`, expected one",
                links.len(),
                team
            )));
        }
        let href = links[0].value().attr("href").unwrap_or_default();
        let base = match href.rfind('/') {
            Some(idx) => &href[..idx],
            None => {
                return Err(NbaError::unexpected_page(format!(
                    "malformed stats link `{}` for team `{}`",
                    href, team
                )))
            }
        };

        urls.insert(team, format!("https://www.espn.com{}", base));
    }
    Ok(urls)
}

/// Extract per-player postseason statistics from a team statistics page.
///
/// The page holds several `div.ResponsiveTable` blocks; the one titled
/// "Player Stats" pairs a column of player links with a right-aligned data
/// table whose rows follow [`STAT_COLUMNS`]. The trailing row is the team
/// total and is dropped.
pub fn parse_team_player_stats(team: &str, html: &str, year: Year) -> Result<Vec<PlayerStatLine>> {
    let document = Html::parse_document(html);
    let table_sel = selector("div.ResponsiveTable")?;
    let title_sel = selector("div.Table__Title")?;
    let player_sel = selector("a.AnchorLink[data-player-uid]")?;
    let data_table_sel = selector("table.Table--align-right")?;
    let row_sel = selector("tr.Table__even[data-idx]")?;
    let cell_sel = selector("td")?;

    let stat_tables: Vec<_> = document
        .select(&table_sel)
        .filter(|table| {
            table
                .select(&title_sel)
                .next()
                .is_some_and(|title| title.text().collect::<String>().contains("Player Stats"))
        })
        .collect();
    if stat_tables.len() != 1 {
        return Err(NbaError::unexpected_page(format!(
            "found {} player stats tables for team `{}`, expected one",
            stat_tables.len(),
            team
        )));
    }
    let stat_table = stat_tables[0];

    let players: Vec<String> = stat_table
        .select(&player_sel)
        .map(|a| a.text().collect())
        .collect();
    if players.len() < MIN_PLAYERS_PER_TEAM {
        return Err(NbaError::unexpected_page(format!(
            "unreasonable number of players {} for team `{}` in {}",
            players.len(),
            team,
            year
        )));
    }

    let data_tables: Vec<_> = stat_table.select(&data_table_sel).collect();
    if data_tables.len() != 1 {
        return Err(NbaError::unexpected_page(format!(
            "found {} data tables for team `{}`, expected one",
            data_tables.len(),
            team
        )));
    }

    let rows: Vec<_> = data_tables[0].select(&row_sel).collect();
    // Last row is the team total.
    if rows.len() != players.len() + 1 {
        return Err(NbaError::unexpected_page(
            "number of rows for player and data table does not fit",
        ));
    }

    let mut result = Vec::new();
    for (player, row) in players.iter().zip(&rows) {
        let cells: Vec<String> = row
            .select(&cell_sel)
            .map(|td| td.text().collect::<String>().trim().to_string())
            .collect();
        if cells.len() != STAT_COLUMNS.len() {
            error!(
                player = %player,
                team = %team,
                expected = STAT_COLUMNS.len(),
                found = cells.len(),
                "number of statistics does not fit"
            );
        }

        let stats: BTreeMap<String, String> = STAT_COLUMNS
            .iter()
            .zip(&cells)
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();

        result.push(PlayerStatLine {
            name: player.clone(),
            team: team.to_string(),
            year,
            season: Season::Postseason,
            stats,
        });
    }
    Ok(result)
}

/// Fetch the statistics base URL of every team in the league.
pub async fn fetch_team_stat_urls(client: &Client) -> Result<BTreeMap<String, String>> {
    let body = http::get_document(client, TEAM_INDEX_URL).await?;
    parse_team_stat_urls(&body)
}

/// Fetch postseason player statistics for one team.
pub async fn fetch_team_player_stats(
    client: &Client,
    team: &str,
    base_url: &str,
    year: Year,
) -> Result<Vec<PlayerStatLine>> {
    let body = http::get_document(client, &team_stats_url(base_url, year)).await?;
    parse_team_player_stats(team, &body, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_index_page(section_count: usize) -> String {
        let mut body = String::from("<html><body>");
        for i in 0..section_count {
            body.push_str(&format!(
                r#"<section class="TeamLinks flex items-center">
                    <h2>Team {i}</h2>
                    <a href="/nba/team/_/name/t{i}">Home</a>
                    <a href="/nba/team/stats/_/name/t{i}">Statistics</a>
                </section>"#
            ));
        }
        body.push_str("</body></html>");
        body
    }

    #[test]
    fn test_parse_team_stat_urls() {
        let urls = parse_team_stat_urls(&team_index_page(30)).unwrap();
        assert_eq!(urls.len(), 30);
        assert_eq!(
            urls["Team 0"],
            "https://www.espn.com/nba/team/stats/_/name"
        );
    }

    #[test]
    fn test_parse_team_stat_urls_wrong_section_count() {
        let err = parse_team_stat_urls(&team_index_page(29)).unwrap_err();
        assert!(err.to_string().contains("expected 30"));
    }

    #[test]
    fn test_team_stats_url() {
        let url = team_stats_url("https://www.espn.com/nba/team/stats/_/name/gs", Year::new(2021));
        assert_eq!(
            url,
            "https://www.espn.com/nba/team/stats/_/name/gs/season/2021/seasontype/3"
        );
    }

    fn stats_page(player_count: usize) -> String {
        let mut players = String::new();
        for i in 0..player_count {
            players.push_str(&format!(
                r##"<tr><td><a class="AnchorLink" data-player-uid="s:40~a:{i}" href="#">Player {i}</a></td></tr>"##
            ));
        }

        let mut rows = String::new();
        // One data row per player plus the team total row.
        for idx in 0..=player_count {
            rows.push_str(&format!(
                r#"<tr class="Table__TR Table__TR--sm Table__even" data-idx="{idx}">
                    <td><span>10</span></td><td><span>5</span></td><td><span>30.5</span></td>
                    <td><span>25.1</span></td><td><span>1.0</span></td><td><span>4.5</span></td>
                    <td><span>5.5</span></td><td><span>6.3</span></td><td><span>1.2</span></td>
                    <td><span>0.4</span></td><td><span>3.0</span></td><td><span>2.1</span></td>
                    <td><span>2.1</span></td><td><span>22.9</span></td>
                </tr>"#
            ));
        }

        format!(
            r#"<html><body>
            <div class="ResponsiveTable Team">
                <div class="Table__Title">Game Stats</div>
            </div>
            <div class="ResponsiveTable Team">
                <div class="Table__Title">2020-21 Postseason Player Stats</div>
                <table class="Table Table--fixed">{players}</table>
                <table class="Table Table--align-right"><tbody>{rows}</tbody></table>
            </div>
            </body></html>"#
        )
    }

    #[test]
    fn test_parse_team_player_stats() {
        let lines = parse_team_player_stats("Team A", &stats_page(9), Year::new(2021)).unwrap();
        assert_eq!(lines.len(), 9);

        let line = &lines[0];
        assert_eq!(line.name, "Player 0");
        assert_eq!(line.team, "Team A");
        assert_eq!(line.season, Season::Postseason);
        assert_eq!(line.stats["games_played"], "10");
        assert_eq!(line.stats["points_per_game"], "25.1");
        assert_eq!(line.stats["player_efficiency_rating"], "22.9");
        assert_eq!(line.stats.len(), STAT_COLUMNS.len());
    }

    #[test]
    fn test_parse_team_player_stats_too_few_players() {
        let err =
            parse_team_player_stats("Team A", &stats_page(5), Year::new(2021)).unwrap_err();
        assert!(err.to_string().contains("unreasonable number of players"));
    }

    #[test]
    fn test_parse_team_player_stats_no_table() {
        let err = parse_team_player_stats("Team A", "<html></html>", Year::new(2021)).unwrap_err();
        assert!(err.to_string().contains("player stats tables"));
    }
}
