//! Artist detail page: catalog lookup plus that artist's releases.

use crate::app_service::use_app;
use dioxus::prelude::*;
use wax_ui::stores::AppStateStoreExt;
use wax_ui::{EmptyState, ErrorBanner, ErrorDisplay, LoadingSpinner, PageContainer, ReleaseCard};

#[component]
pub fn ArtistDetail(id: i64) -> Element {
    let app = use_app();
    let catalog = app.state.catalog().read().clone();

    let api = app.api.clone();
    let releases = use_resource(move || {
        let api = api.clone();
        async move { api.artist_releases(id).await.map_err(|e| e.to_string()) }
    });
    let releases_read = releases.read();

    if catalog.loading {
        return rsx! {
            LoadingSpinner { message: "Loading artist...".to_string() }
        };
    }

    let Some(artist) = catalog.artist(id).cloned() else {
        let retry_app = app.clone();
        return rsx! {
            PageContainer { title: "Artist".to_string(),
                if catalog.failed {
                    ErrorBanner {
                        heading: "Could not load the artist catalog".to_string(),
                        detail: catalog.error.clone().unwrap_or_else(|| "unknown error".to_string()),
                        button_label: "Retry".to_string(),
                        on_retry: move |_| retry_app.refresh_catalog(),
                    }
                } else {
                    EmptyState { message: "Artist not found".to_string() }
                }
            }
        };
    };

    let releases_section = match &*releases_read {
        None => rsx! {
            LoadingSpinner { message: "Loading releases...".to_string() }
        },
        Some(Err(e)) => rsx! {
            ErrorDisplay { message: "Failed to load releases: {e}" }
        },
        Some(Ok(releases)) if releases.is_empty() => rsx! {
            EmptyState { message: "No releases yet".to_string() }
        },
        Some(Ok(releases)) => {
            let cards: Vec<_> = releases
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
                .collect();
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
        PageContainer { title: artist.name.clone(),
            div { class: "flex flex-col md:flex-row gap-8 mb-10",
                if let Some(ref url) = artist.image_url {
                    img {
                        class: "w-48 h-48 rounded-lg object-cover",
                        src: "{url}",
                        alt: "{artist.name}",
                    }
                }
                if let Some(ref bio) = artist.bio {
                    p { class: "text-gray-400 max-w-2xl whitespace-pre-line", "{bio}" }
                }
            }

            h2 { class: "text-2xl font-bold text-white mb-4", "Releases" }
            {releases_section}
        }
    }
}
