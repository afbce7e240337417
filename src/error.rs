//! Error types for the NBA salary scraper.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Unexpected page content: {message}")]
    UnexpectedPage { message: String },

    #[error("Invalid selector: {message}")]
    Selector { message: String },

    #[error("Failed to parse year: {0}")]
    InvalidYear(#[from] std::num::ParseIntError),
}

impl NbaError {
    /// Shorthand for the error raised when a page's structure or content
    /// does not match what the parsers expect (site layout changed).
    pub fn unexpected_page(message: impl Into<String>) -> Self {
        NbaError::UnexpectedPage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests;
