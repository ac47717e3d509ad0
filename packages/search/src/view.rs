//! View port: the surface a search reads from and renders into.
//!
//! The controller never looks views up by itself. Everything it touches is a
//! named slot on the [`ViewPort`] it was constructed with.

use crate::render::ResultRow;

/// Panels a view can show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Spinner shown while a request is in flight.
    Loading,
    /// User-visible error message.
    Error,
    /// Request URL and response preview.
    Debug,
    /// Result table and count label.
    Results,
    /// "No results" placeholder.
    NoResults,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Loading,
        Panel::Error,
        Panel::Debug,
        Panel::Results,
        Panel::NoResults,
    ];
}

/// Sink for everything a search displays.
pub trait ViewPort {
    fn set_visible(&mut self, panel: Panel, visible: bool);

    fn set_error_message(&mut self, message: &str);

    fn set_request_url(&mut self, url: &str);

    fn set_response_preview(&mut self, preview: &str);

    /// Remove every row from the result table.
    fn clear_rows(&mut self);

    fn append_row(&mut self, row: ResultRow);

    fn set_result_count(&mut self, label: &str);

    /// Enable or disable the search control.
    fn set_search_enabled(&mut self, enabled: bool);

    /// Fill the two date inputs (YYYY-MM-DD).
    fn set_date_inputs(&mut self, start: &str, end: &str);

    fn show(&mut self, panel: Panel) {
        self.set_visible(panel, true);
    }

    fn hide(&mut self, panel: Panel) {
        self.set_visible(panel, false);
    }
}

/// Headless view keeping every slot in memory.
///
/// All panels start hidden and the search control starts enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryView {
    pub loading: bool,
    pub error_visible: bool,
    pub debug_visible: bool,
    pub results_visible: bool,
    pub no_results_visible: bool,
    pub error_message: String,
    pub request_url: String,
    pub response_preview: String,
    pub rows: Vec<ResultRow>,
    pub result_count: String,
    pub search_enabled: bool,
    pub start_input: String,
    pub end_input: String,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self {
            loading: false,
            error_visible: false,
            debug_visible: false,
            results_visible: false,
            no_results_visible: false,
            error_message: String::new(),
            request_url: String::new(),
            response_preview: String::new(),
            rows: Vec::new(),
            result_count: String::new(),
            search_enabled: true,
            start_input: String::new(),
            end_input: String::new(),
        }
    }
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_visible(&self, panel: Panel) -> bool {
        match panel {
            Panel::Loading => self.loading,
            Panel::Error => self.error_visible,
            Panel::Debug => self.debug_visible,
            Panel::Results => self.results_visible,
            Panel::NoResults => self.no_results_visible,
        }
    }

    /// Panels currently shown, in [`Panel::ALL`] order.
    #[must_use]
    pub fn visible_panels(&self) -> Vec<Panel> {
        Panel::ALL
            .into_iter()
            .filter(|p| self.is_visible(*p))
            .collect()
    }
}

impl ViewPort for MemoryView {
    fn set_visible(&mut self, panel: Panel, visible: bool) {
        let slot = match panel {
            Panel::Loading => &mut self.loading,
            Panel::Error => &mut self.error_visible,
            Panel::Debug => &mut self.debug_visible,
            Panel::Results => &mut self.results_visible,
            Panel::NoResults => &mut self.no_results_visible,
        };
        *slot = visible;
    }

    fn set_error_message(&mut self, message: &str) {
        self.error_message = message.to_string();
    }

    fn set_request_url(&mut self, url: &str) {
        self.request_url = url.to_string();
    }

    fn set_response_preview(&mut self, preview: &str) {
        self.response_preview = preview.to_string();
    }

    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    fn set_result_count(&mut self, label: &str) {
        self.result_count = label.to_string();
    }

    fn set_search_enabled(&mut self, enabled: bool) {
        self.search_enabled = enabled;
    }

    fn set_date_inputs(&mut self, start: &str, end: &str) {
        self.start_input = start.to_string();
        self.end_input = end.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_view_starts_hidden_and_enabled() {
        let view = MemoryView::new();
        assert!(view.visible_panels().is_empty());
        assert!(view.search_enabled);
    }

    #[test]
    fn test_show_and_hide() {
        let mut view = MemoryView::new();
        view.show(Panel::Debug);
        view.show(Panel::Loading);
        assert_eq!(view.visible_panels(), vec![Panel::Loading, Panel::Debug]);

        view.hide(Panel::Loading);
        assert!(!view.is_visible(Panel::Loading));
        assert!(view.is_visible(Panel::Debug));
    }
}
