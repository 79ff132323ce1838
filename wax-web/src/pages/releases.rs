//! Releases page: artist picker backed by the catalog cache, plus that
//! artist's releases.

use crate::app_service::use_app;
use dioxus::prelude::*;
use wax_ui::display_types::Release;
use wax_ui::stores::{AppStateStoreExt, CatalogState};
use wax_ui::{EmptyState, ErrorBanner, ErrorDisplay, LoadingSpinner, PageContainer, ReleaseCard};

fn release_cards(releases: &[Release], catalog: &CatalogState) -> Vec<(Release, Vec<String>)> {
    releases
        .iter()
        .map(|release| {
            let artist_names: Vec<String> = release
                .artist_ids
                .iter()
                .filter_map(|aid| catalog.artist(*aid))
                .map(|a| a.name.clone())
                .collect();
            (release.clone(), artist_names)
        })
        .collect()
}

#[component]
pub fn Releases() -> Element {
    let app = use_app();
    let catalog = app.state.catalog().read().clone();

    let mut selected: Signal<Option<i64>> = use_signal(|| None);

    let api = app.api.clone();
    let releases = use_resource(move || {
        let api = api.clone();
        let picked = selected();
        async move {
            match picked {
                Some(id) => api
                    .artist_releases(id)
                    .await
                    .map(Some)
                    .map_err(|e| e.to_string()),
                None => Ok(None),
            }
        }
    });
    let releases_read = releases.read();

    if catalog.loading {
        return rsx! {
            PageContainer { title: "Releases".to_string(),
                LoadingSpinner { message: "Loading artists...".to_string() }
            }
        };
    }
    if catalog.failed {
        let retry_app = app.clone();
        return rsx! {
            PageContainer { title: "Releases".to_string(),
                ErrorBanner {
                    heading: "Could not load the artist catalog".to_string(),
                    detail: catalog.error.clone().unwrap_or_else(|| "unknown error".to_string()),
                    button_label: "Retry".to_string(),
                    on_retry: move |_| retry_app.refresh_catalog(),
                }
            }
        };
    }
    if catalog.artists.is_empty() {
        return rsx! {
            PageContainer { title: "Releases".to_string(),
                EmptyState { message: "No artists yet".to_string() }
            }
        };
    }

    let releases_section = match &*releases_read {
        None => rsx! {
            LoadingSpinner { message: "Loading releases...".to_string() }
        },
        Some(Err(e)) => rsx! {
            ErrorDisplay { message: "Failed to load releases: {e}" }
        },
        Some(Ok(None)) => rsx! {
            p { class: "text-gray-500", "Pick an artist to browse their releases." }
        },
        Some(Ok(Some(releases))) if releases.is_empty() => rsx! {
            EmptyState { message: "No releases for this artist yet".to_string() }
        },
        Some(Ok(Some(releases))) => {
            let cards = release_cards(releases, &catalog);
            rsx! {
                div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4",
                    for (release, artist_names) in cards {
                        ReleaseCard { release, artist_names }
                    }
                }
            }
        }
    };

    rsx! {
        PageContainer { title: "Releases".to_string(),
            div { class: "mb-6 max-w-xs",
                label { class: "block text-sm font-medium text-gray-300 mb-1", "Artist" }
                select {
                    class: "w-full bg-neutral-800/60 rounded px-3 py-2 text-gray-200",
                    onchange: move |e| {
                        selected.set(e.value().parse::<i64>().ok());
                    },
                    option { value: "", selected: selected().is_none(), "Pick an artist" }
                    for artist in catalog.artists.clone() {
                        option {
                            value: "{artist.id}",
                            selected: selected() == Some(artist.id),
                            "{artist.name}"
                        }
                    }
                }
            }
            {releases_section}
        }
    }
}
