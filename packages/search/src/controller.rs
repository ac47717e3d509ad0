//! Search controller: validate, request, render.
//!
//! One call to [`SearchController::search`] runs the whole pipeline for one
//! form submission:
//!
//! 1. parse and validate the date range (no network on failure)
//! 2. reset the transient view state
//! 3. build the request URL and reveal it in the debug panel
//! 4. issue a single GET
//! 5. render rows, the empty state, or an error
//! 6. hide the spinner and re-enable the search control, on every path
//!
//! `search` borrows the controller mutably, so a second search cannot start
//! while one is still awaiting its response.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::client::RegistryApi;
use crate::config::{build_search_url, SearchConfig, DEBUG_PREVIEW_LIMIT};
use crate::error::{Result, SearchError};
use crate::format::truncate_preview;
use crate::render::{count_label, render_rows};
use crate::types::{CompanyRecord, DateRange, DebugTrace, SearchResponse};
use crate::view::{Panel, ViewPort};

/// Successful end of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// This many rows were rendered.
    Rendered(usize),
    /// The registry matched nothing; the empty-state panel is shown.
    Empty,
}

pub struct SearchController<C, V> {
    client: C,
    view: V,
    config: SearchConfig,
    trace: DebugTrace,
}

impl<C: RegistryApi, V: ViewPort> SearchController<C, V> {
    pub fn new(client: C, view: V, config: SearchConfig) -> Self {
        Self {
            client,
            view,
            config,
            trace: DebugTrace::default(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Request URL and response preview of the most recent search.
    pub fn last_trace(&self) -> &DebugTrace {
        &self.trace
    }

    /// Fill the view's date inputs with the default range ending `today`.
    pub fn populate_defaults(&mut self, today: NaiveDate) -> DateRange {
        let range = DateRange::default_ending(today);
        self.view.set_date_inputs(&range.start_iso(), &range.end_iso());
        range
    }

    /// Run one search for the raw form inputs `start` and `end` (YYYY-MM-DD).
    ///
    /// Every failure is also written to the view's error slot before it is
    /// returned.
    pub async fn search(&mut self, start: &str, end: &str) -> Result<SearchOutcome> {
        let result = match DateRange::parse(start, end) {
            Ok(range) => {
                self.reset();
                self.view.show(Panel::Loading);
                self.view.set_search_enabled(false);
                self.execute(&range).await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            self.report(e);
        }
        self.finish();

        result
    }

    async fn execute(&mut self, range: &DateRange) -> Result<SearchOutcome> {
        let url = build_search_url(&self.config.api_base_url, range)?;
        info!(url = %url, "searching registry");

        self.trace.request_url = Some(url.to_string());
        self.view.set_request_url(url.as_str());
        self.view.show(Panel::Debug);

        let reply = self.client.get(&url).await?;

        if !reply.is_success() {
            self.record_preview(&format!(
                "Status: {}. Resposta: {}",
                reply.status, reply.body
            ));
            return Err(SearchError::Api {
                status: reply.status,
                reason: reply.reason,
            });
        }

        let value: serde_json::Value = match serde_json::from_str(&reply.body) {
            Ok(value) => value,
            Err(e) => {
                self.record_preview(&reply.body);
                return Err(SearchError::ResponseParse(e.to_string()));
            }
        };
        let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| reply.body.clone());
        self.record_preview(&pretty);

        let response: SearchResponse = serde_json::from_value(value)
            .map_err(|e| SearchError::ResponseParse(e.to_string()))?;
        let records = response.records();
        debug!(records = records.len(), "parsed registry response");

        if records.is_empty() {
            self.show_no_results();
            return Ok(SearchOutcome::Empty);
        }

        Ok(SearchOutcome::Rendered(self.display_results(records)))
    }

    fn display_results(&mut self, records: &[CompanyRecord]) -> usize {
        self.view.clear_rows();
        let rows = render_rows(records);
        let count = rows.len();
        for row in rows {
            self.view.append_row(row);
        }

        self.view.set_result_count(&count_label(count));
        self.view.show(Panel::Results);
        self.view.hide(Panel::NoResults);
        self.view.hide(Panel::Debug);
        count
    }

    fn show_no_results(&mut self) {
        self.view.hide(Panel::Results);
        self.view.show(Panel::NoResults);
    }

    fn record_preview(&mut self, text: &str) {
        let preview = truncate_preview(text, DEBUG_PREVIEW_LIMIT);
        self.view.set_response_preview(&preview);
        self.trace.response_preview = Some(preview);
    }

    fn reset(&mut self) {
        self.trace.clear();
        self.view.clear_rows();
        self.view.set_request_url("");
        self.view.set_response_preview("");
        for panel in [Panel::Error, Panel::Results, Panel::NoResults, Panel::Debug] {
            self.view.hide(panel);
        }
    }

    fn report(&mut self, error: &SearchError) {
        warn!(error = %error, "search failed");
        let message = if error.is_input_error() {
            error.to_string()
        } else {
            format!("Search failed: {error}")
        };
        self.view.set_error_message(&message);
        self.view.show(Panel::Error);
    }

    fn finish(&mut self) {
        self.view.hide(Panel::Loading);
        self.view.set_search_enabled(true);
    }
}
