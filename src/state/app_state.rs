//! Per-view application state.

use ratatui::widgets::TableState;

use crate::logic::{Activation, FetchController, FetchOutcome};
use crate::state::{FetchState, InteractionRecord};

/// Glyphs cycled by the loading indicator.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Everything one history view instance owns.
///
/// Dropped with the view; nothing here is shared with other instances.
#[derive(Debug, Default)]
pub struct AppState {
    /// Fetch lifecycle of the current activation.
    pub controller: FetchController,
    /// Row selection in the table.
    pub table_state: TableState,
    /// Whether the detail pane for the selected row is visible.
    pub show_details: bool,
    /// Current loading-indicator frame.
    pub spinner_frame: usize,
    /// Endpoint shown in the header, for orientation only.
    pub endpoint_label: String,
}

impl AppState {
    /// What: Create state for a view reading from `endpoint_label`.
    ///
    /// Inputs:
    /// - `endpoint_label`: Human-readable endpoint for the header
    ///
    /// Output:
    /// - Fresh, not yet activated state
    #[must_use]
    pub fn new(endpoint_label: impl Into<String>) -> Self {
        Self {
            endpoint_label: endpoint_label.into(),
            ..Self::default()
        }
    }

    /// Current fetch state.
    #[must_use]
    pub const fn fetch_state(&self) -> &FetchState {
        self.controller.state()
    }

    /// What: Mount the view: start a new activation.
    ///
    /// Output:
    /// - Ticket for the one fetch this activation issues
    ///
    /// Details:
    /// - Tears down any running activation first and clears selection and spinner.
    pub fn activate(&mut self) -> Activation {
        self.controller.teardown();
        self.table_state = TableState::default();
        self.spinner_frame = 0;
        self.controller.activate()
    }

    /// What: Apply a fetch outcome if it belongs to the live activation.
    ///
    /// Inputs:
    /// - `activation`: Ticket the outcome was issued with
    /// - `outcome`: Fetch result
    ///
    /// Output:
    /// - `true` when the state changed
    ///
    /// Details:
    /// - Selects the first row when a non-empty record set arrives.
    pub fn apply_outcome(&mut self, activation: Activation, outcome: FetchOutcome) -> bool {
        let applied = self.controller.complete(activation, outcome);
        if applied && !self.fetch_state().records().is_empty() {
            self.table_state.select(Some(0));
        }
        applied
    }

    /// Advance the loading indicator; no effect once the fetch settled.
    pub const fn tick(&mut self) {
        if self.controller.state().is_pending() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Glyph for the current spinner frame.
    #[must_use]
    pub fn spinner_glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Record under the selection, if any.
    #[must_use]
    pub fn selected_record(&self) -> Option<&InteractionRecord> {
        self.table_state
            .selected()
            .and_then(|i| self.fetch_state().records().get(i))
    }

    /// Move the selection down one row, stopping at the last row.
    pub fn select_next(&mut self) {
        let len = self.fetch_state().records().len();
        if len == 0 {
            return;
        }
        let next = self.table_state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.table_state.select(Some(next));
    }

    /// Move the selection up one row, stopping at the first row.
    pub fn select_prev(&mut self) {
        if self.fetch_state().records().is_empty() {
            return;
        }
        let prev = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(prev));
    }

    /// Select the first row.
    pub fn select_first(&mut self) {
        if !self.fetch_state().records().is_empty() {
            self.table_state.select(Some(0));
        }
    }

    /// Select the last row.
    pub fn select_last(&mut self) {
        let len = self.fetch_state().records().len();
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    /// Show or hide the detail pane.
    pub const fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
    }
}
