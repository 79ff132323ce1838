//! Discography page: one artist's releases as a flat chronological list.

use crate::app_service::use_app;
use dioxus::prelude::*;
use wax_ui::display_types::Release;
use wax_ui::stores::AppStateStoreExt;
use wax_ui::{EmptyState, ErrorBanner, ErrorDisplay, LoadingSpinner, PageContainer};

#[component]
pub fn Discography() -> Element {
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
            PageContainer { title: "Discography".to_string(),
                LoadingSpinner {}
            }
        };
    }
    if catalog.failed {
        let retry_app = app.clone();
        return rsx! {
            PageContainer { title: "Discography".to_string(),
                ErrorBanner {
                    heading: "Could not load the artist catalog".to_string(),
                    detail: catalog.error.clone().unwrap_or_else(|| "unknown error".to_string()),
                    button_label: "Retry".to_string(),
                    on_retry: move |_| retry_app.refresh_catalog(),
                }
            }
        };
    }

    let list_section = match &*releases_read {
        None => rsx! {
            LoadingSpinner {}
        },
        Some(Err(e)) => rsx! {
            ErrorDisplay { message: "Failed to load releases: {e}" }
        },
        Some(Ok(None)) => rsx! {
            p { class: "text-gray-500", "Pick an artist to see their discography." }
        },
        Some(Ok(Some(releases))) if releases.is_empty() => rsx! {
            EmptyState { message: "Nothing released yet".to_string() }
        },
        Some(Ok(Some(releases))) => {
            // Newest first; undated releases sink to the bottom.
            let mut ordered: Vec<Release> = releases.clone();
            ordered.sort_by(|a, b| b.release_date.cmp(&a.release_date));
            rsx! {
                ul { class: "divide-y divide-neutral-800",
                    for release in ordered {
                        li { class: "py-3 flex items-baseline gap-4",
                            span { class: "text-gray-500 w-12 shrink-0",
                                if let Some(year) = release.year() {
                                    "{year}"
                                } else {
                                    "-"
                                }
                            }
                            span { class: "text-gray-100 font-medium", "{release.title}" }
                            if let Some(ref kind) = release.release_type {
                                span { class: "text-xs uppercase text-gray-500", "{kind}" }
                            }
                            if let Some(ref genre) = release.genre {
                                span { class: "text-xs text-gray-500", "{genre}" }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        PageContainer { title: "Discography".to_string(),
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
            {list_section}
        }
    }
}
