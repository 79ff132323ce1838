//! General UI state store

use dioxus::prelude::*;

/// Cross-page UI state.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct UiState {
    /// Dismissible notice for unexpected server/network errors.
    pub notice: Option<String>,
    /// Whether the small-screen nav menu is expanded.
    pub menu_open: bool,
}
