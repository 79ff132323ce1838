//! Catalog cache store
//!
//! Holds the bulk-fetched artist listing shared by the artist pages and the
//! release pages' artist picker. Fetched once at application start and
//! replaced wholesale on an explicit refresh; independent of auth state.

use crate::display_types::CatalogArtist;
use dioxus::prelude::*;

/// Client-side cache of the full artist listing.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CatalogState {
    /// Artists in server response order.
    pub artists: Vec<CatalogArtist>,
    /// Whether the bulk fetch is in flight.
    pub loading: bool,
    /// Set when the last fetch errored. Consumers use this (not emptiness)
    /// to tell "no artists" from "fetch failed".
    pub failed: bool,
    /// Error message from the last failed fetch.
    pub error: Option<String>,
}

impl CatalogState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.failed = false;
        self.error = None;
    }

    /// Replace the cache wholesale with a fresh listing.
    pub fn fetch_succeeded(&mut self, artists: Vec<CatalogArtist>) {
        self.artists = artists;
        self.loading = false;
        self.failed = false;
        self.error = None;
    }

    /// A failed fetch leaves the cache empty; there is no automatic retry.
    pub fn fetch_failed(&mut self, message: String) {
        self.artists.clear();
        self.loading = false;
        self.failed = true;
        self.error = Some(message);
    }

    /// Look up one artist by id.
    pub fn artist(&self, id: i64) -> Option<&CatalogArtist> {
        self.artists.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(id: i64, name: &str) -> CatalogArtist {
        CatalogArtist {
            id,
            name: name.to_string(),
            image_url: None,
            bio: None,
        }
    }

    #[test]
    fn fetch_replaces_wholesale() {
        let mut c = CatalogState::default();
        c.begin_fetch();
        assert!(c.loading);
        c.fetch_succeeded(vec![artist(1, "Aya"), artist(2, "Blixa")]);
        assert_eq!(c.artists.len(), 2);

        c.begin_fetch();
        c.fetch_succeeded(vec![artist(3, "Coil")]);
        assert_eq!(c.artists.len(), 1);
        assert_eq!(c.artist(3).map(|a| a.name.as_str()), Some("Coil"));
        assert!(c.artist(1).is_none());
    }

    #[test]
    fn preserves_server_order() {
        let mut c = CatalogState::default();
        c.fetch_succeeded(vec![artist(9, "Z"), artist(1, "A"), artist(5, "M")]);
        let ids: Vec<i64> = c.artists.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![9, 1, 5]);
    }

    #[test]
    fn failed_fetch_leaves_cache_empty_with_flag() {
        let mut c = CatalogState::default();
        c.fetch_succeeded(vec![artist(1, "Aya")]);
        c.begin_fetch();
        c.fetch_failed("network error".into());
        assert!(c.artists.is_empty());
        assert!(c.failed);
        assert_eq!(c.error.as_deref(), Some("network error"));
        assert!(!c.loading);
    }

    #[test]
    fn retry_clears_failure_flag() {
        let mut c = CatalogState::default();
        c.fetch_failed("boom".into());
        c.begin_fetch();
        assert!(!c.failed);
        assert!(c.error.is_none());
    }
}
