//! Mapping of registry records onto display rows.

use serde::Serialize;

use crate::config::{ACTIVE_STATUS, NOT_AVAILABLE};
use crate::format::{localize_date, mask_tax_id};
use crate::types::CompanyRecord;

/// Visual style of the status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusStyle {
    Active,
    Inactive,
}

impl StatusStyle {
    /// Classify a status text. Only the exact string [`ACTIVE_STATUS`] is active.
    #[must_use]
    pub fn classify(text: Option<&str>) -> Self {
        match text {
            Some(ACTIVE_STATUS) => Self::Active,
            _ => Self::Inactive,
        }
    }
}

/// One rendered table row. Every cell is display-ready.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub tax_id: String,
    pub name: String,
    pub email: String,
    pub founded: String,
    pub status: String,
    pub status_style: StatusStyle,
}

/// Accessor for one candidate email location.
pub type EmailSource = fn(&CompanyRecord) -> Option<&str>;

/// Email locations in priority order: record, company, contact.
pub const EMAIL_SOURCES: &[EmailSource] = &[record_email, company_email, contact_email];

fn record_email(record: &CompanyRecord) -> Option<&str> {
    record.email.as_deref()
}

fn company_email(record: &CompanyRecord) -> Option<&str> {
    record.company.as_ref().and_then(|c| c.email.as_deref())
}

fn contact_email(record: &CompanyRecord) -> Option<&str> {
    record.contact.as_ref().and_then(|c| c.email.as_deref())
}

/// First non-empty email found along [`EMAIL_SOURCES`].
#[must_use]
pub fn resolve_email(record: &CompanyRecord) -> Option<&str> {
    EMAIL_SOURCES
        .iter()
        .find_map(|source| source(record).filter(|e| !e.is_empty()))
}

/// Render a single record.
#[must_use]
pub fn render_row(record: &CompanyRecord) -> ResultRow {
    let status = non_empty(record.status_text());

    ResultRow {
        tax_id: non_empty(record.tax_id.as_deref())
            .map(mask_tax_id)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        name: or_placeholder(non_empty(record.company_name())),
        email: or_placeholder(resolve_email(record)),
        founded: non_empty(record.founded.as_deref())
            .map(localize_date)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        status: or_placeholder(status),
        status_style: StatusStyle::classify(status),
    }
}

/// Render records in the order they were returned.
#[must_use]
pub fn render_rows(records: &[CompanyRecord]) -> Vec<ResultRow> {
    records.iter().map(render_row).collect()
}

/// Result count label, e.g. `"3 empresa(s) encontrada(s)"`.
#[must_use]
pub fn count_label(count: usize) -> String {
    format!("{count} empresa(s) encontrada(s)")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn or_placeholder(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CompanyInfo, ContactInfo, StatusInfo};
    use pretty_assertions::assert_eq;

    fn acme() -> CompanyRecord {
        CompanyRecord {
            tax_id: Some("12345678000199".to_string()),
            company: Some(CompanyInfo {
                name: Some("Acme LTDA".to_string()),
                email: None,
            }),
            founded: Some("2024-03-10".to_string()),
            status: Some(StatusInfo {
                text: Some("Ativa".to_string()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_full_record() {
        let row = render_row(&acme());
        assert_eq!(
            row,
            ResultRow {
                tax_id: "12.345.678/0001-99".to_string(),
                name: "Acme LTDA".to_string(),
                email: "N/A".to_string(),
                founded: "10/03/2024".to_string(),
                status: "Ativa".to_string(),
                status_style: StatusStyle::Active,
            }
        );
    }

    #[test]
    fn test_render_empty_record_uses_placeholders() {
        let row = render_row(&CompanyRecord::default());
        assert_eq!(row.tax_id, "N/A");
        assert_eq!(row.name, "N/A");
        assert_eq!(row.email, "N/A");
        assert_eq!(row.founded, "N/A");
        assert_eq!(row.status, "N/A");
        assert_eq!(row.status_style, StatusStyle::Inactive);
    }

    #[test]
    fn test_render_passes_through_unmaskable_values() {
        let record = CompanyRecord {
            tax_id: Some("123".to_string()),
            founded: Some("sometime".to_string()),
            ..Default::default()
        };
        let row = render_row(&record);
        assert_eq!(row.tax_id, "123");
        assert_eq!(row.founded, "sometime");
    }

    #[test]
    fn test_email_priority_order() {
        let mut record = CompanyRecord {
            email: Some("record@acme.com.br".to_string()),
            company: Some(CompanyInfo {
                name: None,
                email: Some("company@acme.com.br".to_string()),
            }),
            contact: Some(ContactInfo {
                email: Some("contact@acme.com.br".to_string()),
            }),
            ..Default::default()
        };
        assert_eq!(resolve_email(&record), Some("record@acme.com.br"));

        record.email = None;
        assert_eq!(resolve_email(&record), Some("company@acme.com.br"));

        record.company = None;
        assert_eq!(resolve_email(&record), Some("contact@acme.com.br"));

        record.contact = None;
        assert_eq!(resolve_email(&record), None);
    }

    #[test]
    fn test_email_skips_empty_strings() {
        let record = CompanyRecord {
            email: Some(String::new()),
            contact: Some(ContactInfo {
                email: Some("contact@acme.com.br".to_string()),
            }),
            ..Default::default()
        };
        assert_eq!(resolve_email(&record), Some("contact@acme.com.br"));
    }

    #[test]
    fn test_status_classification_is_exact() {
        assert_eq!(StatusStyle::classify(Some("Ativa")), StatusStyle::Active);
        assert_eq!(StatusStyle::classify(Some("ativa")), StatusStyle::Inactive);
        assert_eq!(StatusStyle::classify(Some("Ativa ")), StatusStyle::Inactive);
        assert_eq!(StatusStyle::classify(Some("Baixada")), StatusStyle::Inactive);
        assert_eq!(StatusStyle::classify(None), StatusStyle::Inactive);
    }

    #[test]
    fn test_render_rows_preserves_order() {
        let names = ["Beta ME", "Alfa LTDA", "Gama SA"];
        let records: Vec<CompanyRecord> = names
            .iter()
            .map(|n| CompanyRecord {
                company: Some(CompanyInfo {
                    name: Some((*n).to_string()),
                    email: None,
                }),
                ..Default::default()
            })
            .collect();

        let rows = render_rows(&records);
        let rendered: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(rendered, names);
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1), "1 empresa(s) encontrada(s)");
        assert_eq!(count_label(5), "5 empresa(s) encontrada(s)");
    }
}
