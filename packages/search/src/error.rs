//! Error types for the search client.
//!
//! An empty result set is not an error: it is reported as
//! [`SearchOutcome::Empty`](crate::controller::SearchOutcome::Empty).

use std::error::Error as StdError;

use thiserror::Error;

/// Main error type for a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Date input is not a real calendar date.
    #[error("Invalid date: '{0}'. Expected YYYY-MM-DD (e.g., 2024-01-01)")]
    InvalidDate(String),

    /// Start date falls after end date.
    #[error("Start date {start} is after end date {end}")]
    Validation { start: String, end: String },

    /// Transport-level failure (unreachable host, TLS, connection reset).
    #[error("Network failure: {}", source_chain(.0))]
    Network(#[from] reqwest::Error),

    /// The registry answered with a non-success status.
    #[error("API error: {status} - {reason}")]
    Api { status: u16, reason: String },

    /// A success response whose body is not the expected JSON.
    #[error("Failed to parse API response: {0}")]
    ResponseParse(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SearchError {
    /// HTTP status carried by an [`SearchError::Api`] failure.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure was detected before any request was sent.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidDate(_) | Self::Validation { .. })
    }
}

/// An error and all of its causes, outermost first, joined by `": "`.
///
/// reqwest's own `Display` stops at the outermost layer.
#[must_use]
pub fn source_chain(error: &(dyn StdError + 'static)) -> String {
    std::iter::successors(Some(error), |&e| e.source())
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
