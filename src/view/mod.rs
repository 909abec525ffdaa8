//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Top bar (search input, category tabs) and hint bar
//! - `content`: Main content area rendering from the search state
//! - `overlays`: Modal overlays (error, detail, help)

mod content;
mod layout;
mod overlays;
mod utils;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::model::{SearchState, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, ui_state: &UiState, search_state: &SearchState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + category tabs
                Constraint::Min(0),    // Search outcome
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state);

        content::render_main_content(frame, chunks[1], ui_state, search_state);

        layout::render_hint_bar(frame, chunks[2], ui_state);

        // Detail overlay for the selected result (if open)
        if ui_state.show_detail {
            if let SearchState::Results(results) = search_state {
                if let Some(result) = results.get(ui_state.selected_result) {
                    overlays::render_detail_popup(frame, result);
                }
            }
        }

        // Error notification overlay (if there's an error)
        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
