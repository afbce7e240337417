//! HTTP utilities for fetching pages from espn.com.

use crate::Result;
use reqwest::Client;
use tracing::debug;

const USER_AGENT: &str = concat!("nba-salaries/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by all fetches of a run.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// GET a page and return its body text.
///
/// Non-success status codes are errors; there is no retry.
pub async fn get_document(client: &Client, url: &str) -> Result<String> {
    debug!(%url, "fetching page");
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}
