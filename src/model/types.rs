//! Core type definitions for the application

use std::time::Instant;

use super::catalog::Category;

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }

    pub fn prev(self) -> Self {
        // Two sections, so forward and backward coincide.
        self.next()
    }
}

/// UI state for the application
#[derive(Clone)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_query: String,
    pub category: Category,
    pub selected_result: usize,
    pub show_detail: bool,
    pub show_help_popup: bool,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Search,
            search_query: String::new(),
            category: Category::All,
            selected_result: 0,
            show_detail: false,
            show_help_popup: false,
            error_message: None,
            error_timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_cycling_toggles_between_the_two_sections() {
        assert_eq!(ActiveSection::Search.next(), ActiveSection::Results);
        assert_eq!(ActiveSection::Results.next(), ActiveSection::Search);
        assert_eq!(ActiveSection::Search.prev(), ActiveSection::Results);
    }
}
