//! Error types for the MLB player evaluation client

use crate::api::Operation;
use reqwest::StatusCode;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered, but with a non-success status.
    #[error("{operation} (HTTP {status})")]
    Status {
        operation: Operation,
        status: StatusCode,
    },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base URL {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Invalid sort key: {value} (expected `war` or `value`)")]
    InvalidSortBy { value: String },

    #[error("Failed to install log subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}
