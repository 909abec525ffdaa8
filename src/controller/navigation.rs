//! Search submission and result navigation

use std::sync::Arc;

use crate::model::ActiveSection;

use super::AppController;

/// User-facing notice for any failed search; the session already logged the
/// specific cause.
pub const STORE_ERROR_NOTICE: &str =
    "There was an error accessing the iTunes Store. Please try again.";

impl AppController {
    /// Submits the current query and category to the search session.
    ///
    /// Returns immediately once the session is loading; the completion
    /// closure surfaces failures as an error notice. Superseded searches
    /// resolve silently inside the session and never reach this closure.
    pub async fn perform_search(&self) {
        let model = self.model.lock().await;
        let (query, category) = {
            let ui_state = model.ui_state.lock().await;
            (ui_state.search_query.clone(), ui_state.category)
        };

        if query.trim().is_empty() {
            return;
        }

        tracing::debug!(query = %query, category = ?category, "performing search");
        model.reset_result_view().await;

        let model_for_completion = Arc::clone(&self.model);
        model
            .search
            .start_search(&query, category, move |success| {
                if !success {
                    tokio::spawn(async move {
                        let model = model_for_completion.lock().await;
                        model.set_error(STORE_ERROR_NOTICE.to_string()).await;
                    });
                }
            })
            .await;

        // Move focus off the search bar so the arrows drive the results.
        model.set_active_section(ActiveSection::Results).await;
    }

    /// Category change while a query is present re-runs the search, matching
    /// the segment-control behavior of the storefront UI.
    pub async fn change_category(&self, forward: bool) {
        let model = self.model.lock().await;
        let category = model.cycle_category(forward).await;
        let has_query = {
            let ui_state = model.ui_state.lock().await;
            !ui_state.search_query.trim().is_empty()
        };
        drop(model);

        tracing::debug!(category = ?category, has_query, "category changed");
        if has_query {
            self.perform_search().await;
        }
    }
}
