//! Display formatting for record fields.
//!
//! All functions here are pure and fall back to their input when it cannot
//! be formatted.

use chrono::{DateTime, NaiveDate};

/// Number of digits in a CNPJ.
const CNPJ_DIGITS: usize = 14;

/// Mask a CNPJ as `XX.XXX.XXX/XXXX-XX`.
///
/// Non-digit characters are stripped first. Input that does not hold exactly
/// 14 digits is returned unchanged.
///
/// # Examples
/// ```
/// use cnpj_search::format::mask_tax_id;
///
/// assert_eq!(mask_tax_id("12345678000199"), "12.345.678/0001-99");
/// assert_eq!(mask_tax_id("123"), "123");
/// ```
#[must_use]
pub fn mask_tax_id(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != CNPJ_DIGITS {
        return raw.to_string();
    }

    format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    )
}

/// Render an API date in the Brazilian convention (`DD/MM/YYYY`).
///
/// Accepts a plain ISO date or an RFC 3339 timestamp. For timestamps the
/// calendar date as written is used, not a timezone-shifted one.
///
/// # Examples
/// ```
/// use cnpj_search::format::localize_date;
///
/// assert_eq!(localize_date("2024-03-10"), "10/03/2024");
/// assert_eq!(localize_date("not a date"), "not a date");
/// ```
#[must_use]
pub fn localize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        });

    match parsed {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

const ELLIPSIS: &str = "...";

/// Keep at most `limit` characters of `text`. A cut is marked with `...`,
/// which counts toward the limit.
///
/// # Examples
/// ```
/// use cnpj_search::format::truncate_preview;
///
/// assert_eq!(truncate_preview("abcdef", 5), "ab...");
/// assert_eq!(truncate_preview("abc", 5), "abc");
/// ```
#[must_use]
pub fn truncate_preview(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let keep = limit.saturating_sub(ELLIPSIS.len());
    let cut = text
        .char_indices()
        .nth(keep)
        .map_or(text.len(), |(byte_idx, _)| byte_idx);
    format!("{}{ELLIPSIS}", &text[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mask_tax_id_plain_digits() {
        assert_eq!(mask_tax_id("12345678000199"), "12.345.678/0001-99");
    }

    #[test]
    fn test_mask_tax_id_ignores_interspersed_characters() {
        assert_eq!(mask_tax_id("12.345.678/0001-99"), "12.345.678/0001-99");
        assert_eq!(mask_tax_id("12 345 678 0001 99"), "12.345.678/0001-99");
        assert_eq!(mask_tax_id("ab12345678000199cd"), "12.345.678/0001-99");
    }

    #[test]
    fn test_mask_tax_id_wrong_length_unchanged() {
        assert_eq!(mask_tax_id(""), "");
        assert_eq!(mask_tax_id("1234567800019"), "1234567800019"); // 13 digits
        assert_eq!(mask_tax_id("123456780001999"), "123456780001999"); // 15 digits
        assert_eq!(mask_tax_id("12.345.678/0001"), "12.345.678/0001");
        assert_eq!(mask_tax_id("N/A"), "N/A");
    }

    #[test]
    fn test_localize_date_iso() {
        assert_eq!(localize_date("2024-03-10"), "10/03/2024");
        assert_eq!(localize_date("1999-12-31"), "31/12/1999");
    }

    #[test]
    fn test_localize_date_timestamp() {
        assert_eq!(localize_date("2024-03-10T00:00:00Z"), "10/03/2024");
        assert_eq!(localize_date("2024-03-10T23:30:00-03:00"), "10/03/2024");
    }

    #[test]
    fn test_localize_date_changes_separator_style() {
        let localized = localize_date("2024-01-05");
        assert!(!localized.is_empty());
        assert!(localized.contains('/'));
        assert!(!localized.contains('-'));
    }

    #[test]
    fn test_localize_date_unparseable_unchanged() {
        assert_eq!(localize_date(""), "");
        assert_eq!(localize_date("ontem"), "ontem");
        assert_eq!(localize_date("2024-02-30"), "2024-02-30");
        assert_eq!(localize_date("10/03/2024"), "10/03/2024");
    }

    #[test]
    fn test_truncate_preview_short_text_untouched() {
        assert_eq!(truncate_preview("{}", 500), "{}");
        assert_eq!(truncate_preview("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_preview_cuts_on_char_boundary() {
        assert_eq!(truncate_preview("abcdef", 5), "ab...");
        // Multi-byte characters count as one
        assert_eq!(truncate_preview("ãéíõúç", 5), "ãé...");
    }

    #[test]
    fn test_truncate_preview_never_exceeds_limit() {
        let text = "x".repeat(2_000);
        let preview = truncate_preview(&text, 500);
        assert_eq!(preview.chars().count(), 500);
        assert!(preview.ends_with("..."));

        assert_eq!(truncate_preview(&"y".repeat(500), 500).chars().count(), 500);
        assert!(!truncate_preview(&"y".repeat(500), 500).ends_with("..."));
    }
}
