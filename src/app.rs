//! Application state and core logic for the dashboard.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive terminal UI: the active tab, table filters, the row cursor
//! and the claim selected for the details modal.

use ratatui::layout::{Position, Rect};
use ratatui::widgets::TableState;

use crate::models::{Claim, ClaimBook, ClaimFilter, Tab};

/// Application state
pub struct App {
    pub claims: ClaimBook,
    pub active_tab: Tab,
    pub claim_filter: ClaimFilter,
    // None = every village
    pub village_filter: Option<String>,
    // Row cursor over the filtered claims table
    pub table_state: TableState,
    // Id of the claim shown in the details modal
    pub selected_claim: Option<String>,
    // Modal bounds from the last draw, used for outside-click detection
    pub modal_area: Option<Rect>,
    // Lines scrolled past in the modal; clamped on draw
    pub modal_scroll: u16,
    // Claims table bounds from the last draw, None when no table is shown
    pub table_area: Option<Rect>,
    pub should_quit: bool,
}

impl App {
    pub fn new(claims: ClaimBook) -> Self {
        let mut table_state = TableState::default();
        if !claims.claims.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            claims,
            active_tab: Tab::default(),
            claim_filter: ClaimFilter::default(),
            village_filter: None,
            table_state,
            selected_claim: None,
            modal_area: None,
            modal_scroll: 0,
            table_area: None,
            should_quit: false,
        }
    }

    /// Claims currently visible in the table
    pub fn visible_claims(&self) -> Vec<&Claim> {
        self.claims
            .filtered(self.claim_filter, self.village_filter.as_deref())
    }

    /// Switch tab; selecting the active tab is a no-op
    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab == tab {
            return;
        }
        tracing::debug!(tab = tab.label(), "switching tab");
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.toggle());
    }

    pub fn set_claim_filter(&mut self, filter: ClaimFilter) {
        self.claim_filter = filter;
        self.reset_cursor();
    }

    pub fn cycle_claim_filter(&mut self) {
        self.set_claim_filter(self.claim_filter.next());
    }

    /// Cycle None -> each known village -> None
    pub fn cycle_village_filter(&mut self) {
        let villages = self.claims.villages();
        let next = match &self.village_filter {
            None => villages.first().map(|v| v.to_string()),
            Some(current) => villages
                .iter()
                .position(|v| v == current)
                .and_then(|i| villages.get(i + 1))
                .map(|v| v.to_string()),
        };
        self.village_filter = next;
        self.reset_cursor();
    }

    pub fn village_label(&self) -> &str {
        self.village_filter.as_deref().unwrap_or("All Villages")
    }

    fn reset_cursor(&mut self) {
        let selection = if self.visible_claims().is_empty() {
            None
        } else {
            Some(0)
        };
        self.table_state.select(selection);
    }

    pub fn cursor_down(&mut self) {
        let len = self.visible_claims().len();
        if len == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn cursor_up(&mut self) {
        if let Some(i) = self.table_state.selected() {
            self.table_state.select(Some(i.saturating_sub(1)));
        }
    }

    /// Select the claim under the cursor (the "View" action)
    pub fn open_selected_row(&mut self) {
        let id = self
            .table_state
            .selected()
            .and_then(|i| self.visible_claims().get(i).map(|c| c.id.clone()));
        if let Some(id) = id {
            self.select_claim(&id);
        }
    }

    /// Select a claim by id, replacing any previous selection
    pub fn select_claim(&mut self, id: &str) {
        if self.claims.get(id).is_none() {
            tracing::warn!(claim = id, "ignoring selection of unknown claim");
            return;
        }
        tracing::debug!(claim = id, "claim selected");
        self.selected_claim = Some(id.to_string());
        self.modal_scroll = 0;
    }

    pub fn selected(&self) -> Option<&Claim> {
        self.selected_claim.as_deref().and_then(|id| self.claims.get(id))
    }

    pub fn close_modal(&mut self) {
        self.selected_claim = None;
        self.modal_area = None;
        self.modal_scroll = 0;
    }

    pub fn scroll_modal_down(&mut self) {
        self.modal_scroll = self.modal_scroll.saturating_add(1);
    }

    pub fn scroll_modal_up(&mut self) {
        self.modal_scroll = self.modal_scroll.saturating_sub(1);
    }

    /// Handle a mouse click.
    ///
    /// With the modal open, a click outside it closes it. Otherwise a click
    /// on a claims table row moves the cursor there and opens that claim.
    pub fn click(&mut self, column: u16, row: u16) {
        if self.selected_claim.is_some() {
            let inside = self
                .modal_area
                .is_some_and(|area| area.contains(Position::new(column, row)));
            if !inside {
                self.close_modal();
            }
            return;
        }

        if let Some(index) = self.table_row_at(column, row) {
            self.table_state.select(Some(index));
            self.open_selected_row();
        }
    }

    /// Index into `visible_claims` of the table row at a screen position
    fn table_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.table_area?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        // Top border and header row sit above the first claim
        let first_row = area.y + 2;
        let last_row = area.bottom().saturating_sub(1);
        if row < first_row || row >= last_row {
            return None;
        }
        let index = (row - first_row) as usize + self.table_state.offset();
        (index < self.visible_claims().len()).then_some(index)
    }
}
