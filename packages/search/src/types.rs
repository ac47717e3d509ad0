//! Core data types for a registry search.
//!
//! Record types mirror the JSON returned by the CNPJá `office` collection.
//! Every field is optional there, so every field is optional here.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::{parse_date, DEFAULT_LOOKBACK_DAYS};
use crate::error::{Result, SearchError};

/// Inclusive founding-date range.
///
/// Construction guarantees `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting a start that falls after the end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(SearchError::Validation {
                start: start.format("%Y-%m-%d").to_string(),
                end: end.format("%Y-%m-%d").to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse both bounds from YYYY-MM-DD form input.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// The default search window: the last [`DEFAULT_LOOKBACK_DAYS`] calendar
    /// days up to and including `today`.
    #[must_use]
    pub fn default_ending(today: NaiveDate) -> Self {
        let start = today
            .checked_sub_days(Days::new(DEFAULT_LOOKBACK_DAYS))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Lower bound as an ISO 8601 date.
    #[must_use]
    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// Upper bound as an ISO 8601 date.
    #[must_use]
    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

/// Company-level data nested in a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Contact data nested in a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
}

/// Registration status of an establishment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInfo {
    #[serde(default)]
    pub text: Option<String>,
}

/// One establishment returned by the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    /// CNPJ, normally 14 digits without punctuation.
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<CompanyInfo>,
    #[serde(default)]
    pub contact: Option<ContactInfo>,
    /// Registration date as sent by the API (ISO 8601).
    #[serde(default)]
    pub founded: Option<String>,
    #[serde(default)]
    pub status: Option<StatusInfo>,
}

impl CompanyRecord {
    #[must_use]
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().and_then(|c| c.name.as_deref())
    }

    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.text.as_deref())
    }
}

/// Success body of a search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching records in API order. A missing key or `null` means no matches.
    #[serde(default)]
    pub records: Option<Vec<CompanyRecord>>,
}

impl SearchResponse {
    #[must_use]
    pub fn records(&self) -> &[CompanyRecord] {
        self.records.as_deref().unwrap_or_default()
    }
}

/// Request URL and response preview of the current search.
///
/// Lives for one search only; the controller resets it on every submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugTrace {
    pub request_url: Option<String>,
    pub response_preview: Option<String>,
}

impl DebugTrace {
    pub fn clear(&mut self) {
        self.request_url = None;
        self.response_preview = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_date_range_accepts_equal_bounds() {
        let range = DateRange::parse("2024-03-10", "2024-03-10").unwrap();
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn test_date_range_rejects_inverted_bounds() {
        let err = DateRange::parse("2024-06-30", "2024-01-01").unwrap_err();
        assert!(matches!(err, SearchError::Validation { .. }));
    }

    #[test]
    fn test_date_range_invalid_date_wins_over_order() {
        let err = DateRange::parse("2024-99-01", "2024-01-01").unwrap_err();
        assert!(matches!(err, SearchError::InvalidDate(_)));
    }

    #[test]
    fn test_default_range_is_180_calendar_days() {
        let range = DateRange::default_ending(date("2024-06-30"));
        assert_eq!(range.end_iso(), "2024-06-30");
        assert_eq!(range.start_iso(), "2024-01-02");
        assert_eq!((range.end() - range.start()).num_days(), 180);
    }

    #[test]
    fn test_default_range_across_leap_day() {
        let range = DateRange::default_ending(date("2024-03-01"));
        assert_eq!(range.start_iso(), "2023-09-03");
    }

    #[test]
    fn test_record_deserializes_nested_fields() {
        let json = r#"{
            "taxId": "12345678000199",
            "company": {"name": "Acme LTDA", "email": "contato@acme.com.br", "equity": 1000},
            "founded": "2024-03-10",
            "status": {"id": 2, "text": "Ativa"},
            "address": {"city": "São Paulo"}
        }"#;
        let record: CompanyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tax_id.as_deref(), Some("12345678000199"));
        assert_eq!(record.company_name(), Some("Acme LTDA"));
        assert_eq!(record.status_text(), Some("Ativa"));
        assert_eq!(record.founded.as_deref(), Some("2024-03-10"));
        assert!(record.contact.is_none());
    }

    #[test]
    fn test_record_all_fields_optional() {
        let record: CompanyRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, CompanyRecord::default());
        assert_eq!(record.company_name(), None);
        assert_eq!(record.status_text(), None);
    }

    #[test]
    fn test_search_response_missing_records() {
        let response: SearchResponse = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(response.records().is_empty());
    }

    #[test]
    fn test_search_response_null_records() {
        let response: SearchResponse = serde_json::from_str(r#"{"records": null}"#).unwrap();
        assert_eq!(response.records, None);
        assert!(response.records().is_empty());
    }

    #[test]
    fn test_debug_trace_clear() {
        let mut trace = DebugTrace {
            request_url: Some("https://api.cnpja.com/office".to_string()),
            response_preview: Some("{}".to_string()),
        };
        trace.clear();
        assert_eq!(trace, DebugTrace::default());
    }
}
