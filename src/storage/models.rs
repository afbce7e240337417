//! Data models for the storage layer

use crate::cli::types::Year;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed value of a persisted statistic.
///
/// Statistics are stored as name/value rows with a type tag, so the scraper
/// does not need a schema change for every new column on the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl StatValue {
    /// Type tag written to the `stat_type` column.
    pub fn type_name(&self) -> &'static str {
        match self {
            StatValue::Integer(_) => "Integer",
            StatValue::Float(_) => "Float",
            StatValue::Text(_) => "String",
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Integer(v) => write!(f, "{}", v),
            StatValue::Float(v) => write!(f, "{}", v),
            StatValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// One row of the salary report: a playoff player's salary for a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSalary {
    pub year: Year,
    pub team: String,
    pub player: String,
    pub salary: i64,
    pub currency: String,
}
