//! Command handlers.

pub mod fetch;

pub use fetch::{handle_fetch_and_report, FetchParams};
