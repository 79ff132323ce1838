//! Artist catalog page.

use crate::app_service::use_app;
use crate::Route;
use dioxus::prelude::*;
use wax_ui::stores::{AppStateStoreExt, CatalogStateStoreExt};
use wax_ui::{ArtistCard, EmptyState, ErrorBanner, LoadingSpinner, PageContainer};

#[component]
pub fn Artists() -> Element {
    let app = use_app();
    let loading = *app.state.catalog().loading().read();
    let failed = *app.state.catalog().failed().read();
    let error = app.state.catalog().error().read().clone();
    let artists = app.state.catalog().artists().read().clone();

    let retry_app = app.clone();

    rsx! {
        PageContainer { title: "Artists".to_string(),
            if loading {
                LoadingSpinner { message: "Loading artists...".to_string() }
            } else if failed {
                // An empty catalog with the failure flag set is a fetch
                // failure, not an empty roster.
                ErrorBanner {
                    heading: "Could not load the artist catalog".to_string(),
                    detail: error.unwrap_or_else(|| "unknown error".to_string()),
                    button_label: "Retry".to_string(),
                    on_retry: move |_| retry_app.refresh_catalog(),
                }
            } else if artists.is_empty() {
                EmptyState {
                    message: "No artists yet".to_string(),
                    detail: "The roster is being put together. Check back soon.".to_string(),
                }
            } else {
                div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-4",
                    for artist in artists {
                        ArtistCard {
                            artist: artist.clone(),
                            on_click: move |id| {
                                navigator().push(Route::ArtistDetail { id });
                            },
                        }
                    }
                }
            }
        }
    }
}
