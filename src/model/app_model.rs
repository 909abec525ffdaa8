//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;

use super::catalog::Category;
use super::search::SearchSession;
use super::store_client::StoreClient;
use super::types::{ActiveSection, UiState};

/// Main application model containing all state
pub struct AppModel {
    pub search: SearchSession<StoreClient>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(client: StoreClient) -> Self {
        Self {
            search: SearchSession::new(client),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    // ========================================================================
    // Search bar
    // ========================================================================

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop();
    }

    pub async fn clear_search_query(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_query.clear();
    }

    /// Moves the category filter one step and returns the new value.
    pub async fn cycle_category(&self, forward: bool) -> Category {
        let mut state = self.ui_state.lock().await;
        state.category = if forward {
            state.category.next()
        } else {
            state.category.prev()
        };
        state.category
    }

    // ========================================================================
    // Sections & selection
    // ========================================================================

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        if state.selected_result > 0 {
            state.selected_result -= 1;
        }
    }

    pub async fn move_selection_down(&self) {
        let count = self.search.result_count().await;
        let mut state = self.ui_state.lock().await;
        if state.selected_result < count.saturating_sub(1) {
            state.selected_result += 1;
        }
    }

    /// Resets the result cursor and closes any open detail view; called when
    /// a new search is submitted.
    pub async fn reset_result_view(&self) {
        let mut state = self.ui_state.lock().await;
        state.selected_result = 0;
        state.show_detail = false;
    }

    // ========================================================================
    // Detail overlay
    // ========================================================================

    /// Opens the detail overlay for the selected row. Rows only exist in the
    /// results state, so this is a no-op while loading, empty, or unsearched.
    pub async fn open_detail(&self) {
        let count = self.search.result_count().await;
        let mut state = self.ui_state.lock().await;
        if state.selected_result < count {
            state.show_detail = true;
        }
    }

    pub async fn close_detail(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_detail = false;
    }

    pub async fn is_detail_open(&self) -> bool {
        self.ui_state.lock().await.show_detail
    }

    // ========================================================================
    // Help popup
    // ========================================================================

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    // ========================================================================
    // Error notice
    // ========================================================================

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > 5 {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }
}
