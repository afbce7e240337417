//! Scraping of the playoff team list.

use super::{http, selector, types::Team};
use crate::{cli::types::Year, error::NbaError, Result};
use reqwest::Client;
use scraper::Html;

/// Teams in an NBA playoff bracket.
pub const PLAYOFF_TEAM_COUNT: usize = 16;

/// Postseason team statistics page; any postseason stat listing works, it is
/// only used to enumerate the teams that made the playoffs.
pub fn playoff_teams_url(year: Year) -> String {
    format!(
        "https://www.espn.com/nba/stats/team/_/season/{}/seasontype/3/table/offensive/sort/avgPoints/dir/desc",
        year
    )
}

/// Extract the playoff teams from the postseason stats page.
///
/// Team links carry a `data-clubhouse-uid` attribute; exactly
/// [`PLAYOFF_TEAM_COUNT`] of them must be present.
pub fn parse_playoff_teams(html: &str) -> Result<Vec<Team>> {
    let document = Html::parse_document(html);
    let team_link = selector("a[data-clubhouse-uid]")?;

    let teams: Vec<Team> = document
        .select(&team_link)
        .map(|a| Team {
            name: a.text().collect(),
            clubhouse_uid: a
                .value()
                .attr("data-clubhouse-uid")
                .unwrap_or_default()
                .to_string(),
        })
        .collect();

    if teams.len() != PLAYOFF_TEAM_COUNT {
        return Err(NbaError::unexpected_page(format!(
            "number of teams in playoffs must be {}, found {}",
            PLAYOFF_TEAM_COUNT,
            teams.len()
        )));
    }

    Ok(teams)
}

/// Fetch the teams that participated in the playoffs of `year`.
pub async fn fetch_playoff_teams(client: &Client, year: Year) -> Result<Vec<Team>> {
    let body = http::get_document(client, &playoff_teams_url(year)).await?;
    parse_playoff_teams(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playoff_page(team_count: usize) -> String {
        let mut body = String::from("<html><body><table>");
        for i in 0..team_count {
            body.push_str(&format!(
                "<tr><td><a data-clubhouse-uid=\"s:40~l:46~t:{i}\" href=\"/nba/team/_/name/t{i}\">Team {i}</a></td></tr>"
            ));
        }
        body.push_str("</table></body></html>");
        body
    }

    #[test]
    fn test_parse_playoff_teams() {
        let teams = parse_playoff_teams(&playoff_page(16)).unwrap();
        assert_eq!(teams.len(), 16);
        assert_eq!(teams[0].name, "Team 0");
        assert_eq!(teams[0].clubhouse_uid, "s:40~l:46~t:0");
        assert_eq!(teams[15].name, "Team 15");
    }

    #[test]
    fn test_parse_playoff_teams_wrong_count() {
        let err = parse_playoff_teams(&playoff_page(12)).unwrap_err();
        assert!(err.to_string().contains("must be 16"));
    }

    #[test]
    fn test_parse_playoff_teams_empty_page() {
        assert!(parse_playoff_teams("<html><body></body></html>").is_err());
    }

    #[test]
    fn test_playoff_teams_url_contains_year() {
        let url = playoff_teams_url(Year::new(2021));
        assert!(url.contains("/season/2021/seasontype/3"));
    }
}
