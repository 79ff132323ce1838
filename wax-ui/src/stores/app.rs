//! Top-level application state store
//!
//! Combines all sub-states into a single Store for the entire app.
//! Components access state via lensing: `app.state.catalog().artists()`.

use super::catalog::CatalogState;
use super::session::SessionState;
use super::ui::UiState;
use dioxus::prelude::*;

/// Top-level application state combining all sub-states.
///
/// The two session stores are deliberately separate fields, not a union: an
/// admin session and an artist session can coexist and never share state.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Artist login domain.
    pub artist_session: SessionState,
    /// Admin login domain.
    pub admin_session: SessionState,
    /// Bulk-fetched artist catalog.
    pub catalog: CatalogState,
    /// General UI state (notices, nav menu).
    pub ui: UiState,
}
