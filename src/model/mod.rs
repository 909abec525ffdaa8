//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (enums, UI state, etc.)
//! - `catalog`: Catalog data types (categories, search results)
//! - `search`: Search session state machine
//! - `store_client`: iTunes Search API client
//! - `app_model`: Main application model with state management methods

mod app_model;
mod catalog;
mod search;
mod store_client;
mod types;

// Re-export all public types for convenient access
pub use types::{ActiveSection, UiState};

pub use catalog::{Category, SearchResult};

pub use search::SearchState;

pub use store_client::StoreClient;

pub use app_model::AppModel;
