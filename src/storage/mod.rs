//! Storage layer for scraped NBA data.
//!
//! A thin abstraction over the SQLite database, organized into:
//! - `models`: data structures
//! - `schema`: database connection and schema management
//! - `queries`: merge-style insert operations
//! - `reports`: report queries over the stored data

pub mod models;
pub mod queries;
pub mod reports;
pub mod schema;


pub use models::*;
pub use schema::NbaDatabase;
