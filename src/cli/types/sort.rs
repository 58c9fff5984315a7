//! Sort keys understood by the filtered player search.

use crate::error::EvalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column the backend sorts a filtered player search by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Wins Above Replacement
    War,
    /// Surplus value
    Value,
}

impl SortBy {
    /// The query-string value sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::War => "war",
            SortBy::Value => "value",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "war" => Ok(SortBy::War),
            "value" => Ok(SortBy::Value),
            _ => Err(EvalError::InvalidSortBy {
                value: s.to_string(),
            }),
        }
    }
}
