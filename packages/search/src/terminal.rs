//! Terminal front-end for a search.
//!
//! The spinner is live while a request is in flight; everything else is
//! collected in a [`MemoryView`] and printed once the search has finished.

use std::fmt::Write as _;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::render::{ResultRow, StatusStyle};
use crate::view::{MemoryView, Panel, ViewPort};

const HEADERS: [&str; 5] = ["CNPJ", "Razão Social", "E-mail", "Abertura", "Situação"];

pub struct TerminalView {
    state: MemoryView,
    spinner: Option<ProgressBar>,
    always_show_debug: bool,
}

impl TerminalView {
    /// `always_show_debug` prints the request URL and response preview even
    /// after a successful search.
    pub fn new(always_show_debug: bool) -> Self {
        Self {
            state: MemoryView::new(),
            spinner: None,
            always_show_debug,
        }
    }

    pub fn state(&self) -> &MemoryView {
        &self.state
    }

    fn start_spinner(&mut self) {
        if self.spinner.is_some() {
            return;
        }
        let pb = ProgressBar::new_spinner();
        #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("valid template"),
        );
        pb.set_message("Consultando CNPJá...");
        pb.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(pb);
    }

    fn stop_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    /// Everything currently visible, as printable text.
    #[must_use]
    pub fn report(&self) -> String {
        let state = &self.state;
        let mut out = String::new();

        if state.error_visible {
            let _ = writeln!(out, "{} {}", style("Error:").red().bold(), state.error_message);
        }

        if state.no_results_visible {
            let _ = writeln!(
                out,
                "{}",
                style("Nenhuma empresa encontrada para o período informado.").yellow()
            );
        }

        if state.results_visible {
            let _ = writeln!(out, "{}", style(&state.result_count).bold());
            out.push_str(&format_table(&state.rows));
        }

        if state.debug_visible || (self.always_show_debug && !state.request_url.is_empty()) {
            let _ = writeln!(out, "{} {}", style("Request:").dim(), state.request_url);
            if !state.response_preview.is_empty() {
                let _ = writeln!(out, "{}\n{}", style("Response:").dim(), state.response_preview);
            }
        }

        out
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}

impl ViewPort for TerminalView {
    fn set_visible(&mut self, panel: Panel, visible: bool) {
        if panel == Panel::Loading {
            if visible {
                self.start_spinner();
            } else {
                self.stop_spinner();
            }
        }
        self.state.set_visible(panel, visible);
    }

    fn set_error_message(&mut self, message: &str) {
        self.state.set_error_message(message);
    }

    fn set_request_url(&mut self, url: &str) {
        self.state.set_request_url(url);
    }

    fn set_response_preview(&mut self, preview: &str) {
        self.state.set_response_preview(preview);
    }

    fn clear_rows(&mut self) {
        self.state.clear_rows();
    }

    fn append_row(&mut self, row: ResultRow) {
        self.state.append_row(row);
    }

    fn set_result_count(&mut self, label: &str) {
        self.state.set_result_count(label);
    }

    fn set_search_enabled(&mut self, enabled: bool) {
        self.state.set_search_enabled(enabled);
    }

    fn set_date_inputs(&mut self, start: &str, end: &str) {
        self.state.set_date_inputs(start, end);
    }
}

/// Lay rows out as a padded, left-aligned table.
fn format_table(rows: &[ResultRow]) -> String {
    let cells: Vec<[&str; 5]> = rows
        .iter()
        .map(|r| {
            [
                r.tax_id.as_str(),
                r.name.as_str(),
                r.email.as_str(),
                r.founded.as_str(),
                r.status.as_str(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(h, w))
        .collect();
    let _ = writeln!(out, "{}", style(header.join("  ").trim_end()).bold());

    for (row, cells) in rows.iter().zip(&cells) {
        let mut line: Vec<String> = cells[..4]
            .iter()
            .zip(widths)
            .map(|(c, w)| pad(c, w))
            .collect();
        let status = match row.status_style {
            StatusStyle::Active => style(cells[4]).green().to_string(),
            StatusStyle::Inactive => style(cells[4]).red().to_string(),
        };
        line.push(status);
        let _ = writeln!(out, "{}", line.join("  "));
    }

    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}
