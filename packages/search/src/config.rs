//! Configuration constants, input validation and request URL building.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use url::Url;

use crate::error::{Result, SearchError};
use crate::types::DateRange;

/// CNPJá `office` collection endpoint.
pub const CNPJA_OFFICE_URL: &str = "https://api.cnpja.com/office";

/// Maximum number of records requested per search.
pub const RESULT_LIMIT: u32 = 5;

/// Query parameter restricting results to MEI (SIMEI opt-in) entities.
pub const MEI_FILTER_PARAM: &str = "company.simei.optant.eq";

/// Lower bound of the founding-date filter.
pub const FOUNDED_FROM_PARAM: &str = "founded.gte";

/// Upper bound of the founding-date filter.
pub const FOUNDED_TO_PARAM: &str = "founded.lte";

/// Maximum number of characters of a response kept in the debug preview.
pub const DEBUG_PREVIEW_LIMIT: usize = 500;

/// Length of the default search window, in calendar days.
pub const DEFAULT_LOOKBACK_DAYS: u64 = 180;

/// The only status text rendered with the active style.
///
/// The registry reports statuses in Portuguese; "Ativa" means active.
pub const ACTIVE_STATUS: &str = "Ativa";

/// Placeholder for any field missing from a record.
pub const NOT_AVAILABLE: &str = "N/A";

const API_KEY_VAR: &str = "CNPJA_API_KEY";
const API_BASE_URL_VAR: &str = "CNPJA_API_BASE_URL";
const TIMEOUT_VAR: &str = "CNPJA_TIMEOUT_SECS";

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Parse a form date (YYYY-MM-DD).
///
/// # Examples
/// ```
/// use cnpj_search::config::parse_date;
///
/// assert!(parse_date("2024-01-01").is_ok());
/// assert!(parse_date("01/01/2024").is_err());
/// assert!(parse_date("2024-02-30").is_err()); // Invalid day
/// ```
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    let trimmed = date_str.trim();
    if !DATE_PATTERN.is_match(trimmed) {
        return Err(SearchError::InvalidDate(date_str.to_string()));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| SearchError::InvalidDate(date_str.to_string()))
}

/// Build the search URL for a founding-date range.
///
/// Parameters are appended in a fixed order: lower bound, upper bound,
/// MEI filter, result limit.
///
/// # Examples
/// ```
/// use cnpj_search::config::{build_search_url, CNPJA_OFFICE_URL};
/// use cnpj_search::types::DateRange;
///
/// let range = DateRange::parse("2024-01-01", "2024-06-30").unwrap();
/// let url = build_search_url(CNPJA_OFFICE_URL, &range).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://api.cnpja.com/office?founded.gte=2024-01-01&founded.lte=2024-06-30&company.simei.optant.eq=true&limit=5"
/// );
/// ```
pub fn build_search_url(base_url: &str, range: &DateRange) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| SearchError::Config(format!("Invalid API base URL '{base_url}': {e}")))?;

    url.query_pairs_mut()
        .append_pair(FOUNDED_FROM_PARAM, &range.start_iso())
        .append_pair(FOUNDED_TO_PARAM, &range.end_iso())
        .append_pair(MEI_FILTER_PARAM, "true")
        .append_pair("limit", &RESULT_LIMIT.to_string());

    Ok(url)
}

/// Runtime configuration for the registry client.
///
/// `Debug` is implemented by hand so the API key never reaches a log line.
#[derive(Clone)]
pub struct SearchConfig {
    pub api_key: String,
    pub api_base_url: String,
    /// Client-level timeout. `None` waits for the registry indefinitely.
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SearchConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| SearchError::Config(format!("{API_KEY_VAR} not set")))?;

        let api_base_url =
            std::env::var(API_BASE_URL_VAR).unwrap_or_else(|_| CNPJA_OFFICE_URL.into());

        let timeout_secs = match std::env::var(TIMEOUT_VAR) {
            Ok(v) => Some(v.parse::<u64>().map_err(|e| {
                SearchError::Config(format!("Invalid {TIMEOUT_VAR} '{v}': {e}"))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            api_key,
            api_base_url,
            timeout_secs,
        })
    }

    /// Create a config builder, mainly for tests.
    pub fn builder(api_key: impl Into<String>) -> SearchConfigBuilder {
        SearchConfigBuilder {
            api_key: api_key.into(),
            api_base_url: CNPJA_OFFICE_URL.into(),
            timeout_secs: None,
        }
    }
}

/// Builder for constructing `SearchConfig` without touching the environment.
pub struct SearchConfigBuilder {
    api_key: String,
    api_base_url: String,
    timeout_secs: Option<u64>,
}

impl SearchConfigBuilder {
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn build(self) -> SearchConfig {
        SearchConfig {
            api_key: self.api_key,
            api_base_url: self.api_base_url,
            timeout_secs: self.timeout_secs,
        }
    }
}
