//! Entry point: parse CLI, set up logging, run the pipeline.

use clap::Parser;
use nba_salaries::{
    cli::NbaSalaries,
    commands::{handle_fetch_and_report, FetchParams},
    Result,
};
use tracing::Level;

/// Set the log level based on the `quiet` and `debug` flags.
fn init_logging(quiet: bool, debug: bool) {
    let level = if debug {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaSalaries::parse();
    init_logging(app.quiet, app.debug);

    handle_fetch_and_report(FetchParams {
        year: app.year,
        sqlite: app.sqlite,
        quiet: app.quiet,
        as_json: app.json,
        skip_scraping: app.skip_scraping,
    })
    .await
}
