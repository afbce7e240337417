//! Scraping of the paginated player salary list.

use super::{http, selector, types::PlayerSalary};
use crate::{cli::types::Year, error::NbaError, Result};
use reqwest::Client;
use scraper::Html;
use tracing::debug;

/// Hard cap on salary pages; past this the site layout must have changed.
pub const MAX_SALARY_PAGES: u32 = 50;

/// Salary list page for a year. Every page number yields a valid page, pages
/// past the end just contain an empty table.
pub fn salary_page_url(year: Year, page: u32) -> String {
    format!(
        "https://www.espn.com/nba/salaries/_/year/{}/page/{}/seasontype/4",
        year, page
    )
}

/// Extract all player salaries from one salary list page.
///
/// The page must contain exactly one `table.tablehead`; each `oddrow` /
/// `evenrow` row holds rank, "Name, POS", team and a `$1,234,567` salary.
pub fn parse_salary_page(html: &str, year: Year) -> Result<Vec<PlayerSalary>> {
    let document = Html::parse_document(html);
    let table_sel = selector("table.tablehead")?;
    let row_sel = selector("tr.oddrow, tr.evenrow")?;
    let cell_sel = selector("td")?;

    let tables: Vec<_> = document.select(&table_sel).collect();
    if tables.len() != 1 {
        return Err(NbaError::unexpected_page(format!(
            "found {} salary tables, expected exactly one",
            tables.len()
        )));
    }

    let mut salaries = Vec::new();
    for row in tables[0].select(&row_sel) {
        let cells: Vec<String> = row
            .select(&cell_sel)
            .map(|td| td.text().collect::<String>())
            .collect();
        if cells.len() < 4 {
            return Err(NbaError::unexpected_page(format!(
                "salary row has {} cells, expected at least 4",
                cells.len()
            )));
        }

        // Second cell is "Name, POS".
        let (name, position) = cells[1].split_once(',').ok_or_else(|| {
            NbaError::unexpected_page(format!("no position in player cell `{}`", cells[1]))
        })?;

        let salary_text = cells[3].trim();
        let amount = salary_text
            .strip_prefix('$')
            .ok_or_else(|| NbaError::unexpected_page("currency symbol is not $"))?;
        let salary: i64 = amount
            .replace(',', "")
            .parse()
            .map_err(|_| NbaError::unexpected_page("salary conversion to integer failed"))?;

        salaries.push(PlayerSalary {
            name: name.trim().to_string(),
            position: position.trim().to_string(),
            team: cells[2].trim().to_string(),
            year,
            salary,
            currency: "$".to_string(),
        });
    }

    Ok(salaries)
}

/// Decide whether pagination continues after the page just fetched.
///
/// The first empty page ends the walk. A non-empty page past
/// [`MAX_SALARY_PAGES`] is an error: every page number resolves (no 404),
/// so without the cap a changed layout could keep the loop going forever.
fn continue_pagination(page: u32, page_was_empty: bool) -> Result<bool> {
    if page_was_empty {
        return Ok(false);
    }
    if page > MAX_SALARY_PAGES {
        return Err(NbaError::unexpected_page(
            "aborted fetching salaries, too many pages",
        ));
    }
    Ok(true)
}

/// Fetch the salaries of all players for `year`.
///
/// Walks the paginated list from page 1 until a page comes back with an
/// empty table.
pub async fn fetch_salaries(client: &Client, year: Year) -> Result<Vec<PlayerSalary>> {
    let mut all_salaries = Vec::new();
    let mut page = 1;
    loop {
        debug!(%year, page, "retrieving salary page");
        let body = http::get_document(client, &salary_page_url(year, page)).await?;
        let salaries = parse_salary_page(&body, year)?;

        if !continue_pagination(page, salaries.is_empty())? {
            debug!(%year, "fetched all salaries");
            break;
        }
        all_salaries.extend(salaries);
        page += 1;
    }
    Ok(all_salaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<html><body>
        <table class="tablehead">
          <tr class="colhead"><td>RK</td><td>NAME</td><td>TEAM</td><td>SALARY</td></tr>
          <tr class="oddrow"><td>1</td><td><a href="#">Stephen Curry</a>, PG</td><td><a href="#">Golden State Warriors</a></td><td>$43,006,362</td></tr>
          <tr class="evenrow"><td>2</td><td><a href="#">Chris Paul</a>, PG</td><td><a href="#">Phoenix Suns</a></td><td>$41,358,814</td></tr>
          <tr class="oddrow"><td>3</td><td><a href="#">Russell Westbrook</a>, PG</td><td><a href="#">Washington Wizards</a></td><td>$41,358,814</td></tr>
        </table>
    </body></html>"##;

    #[test]
    fn test_parse_salary_page() {
        let salaries = parse_salary_page(PAGE, Year::new(2021)).unwrap();
        assert_eq!(salaries.len(), 3);

        let curry = &salaries[0];
        assert_eq!(curry.name, "Stephen Curry");
        assert_eq!(curry.position, "PG");
        assert_eq!(curry.team, "Golden State Warriors");
        assert_eq!(curry.year, Year::new(2021));
        assert_eq!(curry.salary, 43_006_362);
        assert_eq!(curry.currency, "$");
    }

    #[test]
    fn test_parse_salary_page_empty_table() {
        let page = r#"<table class="tablehead"><tr class="colhead"><td>RK</td></tr></table>"#;
        let salaries = parse_salary_page(page, Year::new(2021)).unwrap();
        assert!(salaries.is_empty());
    }

    #[test]
    fn test_parse_salary_page_no_table() {
        let err = parse_salary_page("<html><body></body></html>", Year::new(2021)).unwrap_err();
        assert!(err.to_string().contains("salary tables"));
    }

    #[test]
    fn test_parse_salary_page_two_tables() {
        let page = r#"<table class="tablehead"></table><table class="tablehead"></table>"#;
        assert!(parse_salary_page(page, Year::new(2021)).is_err());
    }

    #[test]
    fn test_parse_salary_page_bad_currency() {
        let page = r#"<table class="tablehead">
            <tr class="oddrow"><td>1</td><td>Some Player, C</td><td>Some Team</td><td>€1,000,000</td></tr>
        </table>"#;
        let err = parse_salary_page(page, Year::new(2021)).unwrap_err();
        assert!(err.to_string().contains("currency symbol"));
    }

    #[test]
    fn test_parse_salary_page_missing_position() {
        let page = r#"<table class="tablehead">
            <tr class="oddrow"><td>1</td><td>Some Player</td><td>Some Team</td><td>$1,000,000</td></tr>
        </table>"#;
        let err = parse_salary_page(page, Year::new(2021)).unwrap_err();
        assert!(err.to_string().contains("no position"));
    }

    #[test]
    fn test_pagination_stops_on_first_empty_page() {
        assert!(!continue_pagination(1, true).unwrap());
    }

    #[test]
    fn test_pagination_continues_on_rows_within_cap() {
        assert!(continue_pagination(1, false).unwrap());
        assert!(continue_pagination(MAX_SALARY_PAGES, false).unwrap());
    }

    #[test]
    fn test_pagination_errors_on_rows_past_cap() {
        let err = continue_pagination(MAX_SALARY_PAGES + 1, false).unwrap_err();
        assert!(err.to_string().contains("too many pages"));
    }

    #[test]
    fn test_pagination_empty_page_past_cap_still_terminates() {
        assert!(!continue_pagination(MAX_SALARY_PAGES + 1, true).unwrap());
    }

    #[test]
    fn test_salary_page_url() {
        let url = salary_page_url(Year::new(2021), 3);
        assert!(url.contains("/year/2021/page/3/"));
    }
}
