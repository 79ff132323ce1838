//! Release card for release listings

use crate::components::icons::{DiscIcon, ExternalLinkIcon};
use crate::display_types::Release;
use dioxus::prelude::*;

/// Release tile with cover, title, metadata, and streaming links.
#[component]
pub fn ReleaseCard(release: Release, artist_names: Vec<String>) -> Element {
    let subtitle = if artist_names.is_empty() {
        None
    } else {
        Some(artist_names.join(", "))
    };

    rsx! {
        div { class: "bg-neutral-800/50 rounded-lg overflow-hidden",
            div { class: "aspect-square bg-neutral-800",
                if let Some(ref url) = release.cover_url {
                    img {
                        class: "w-full h-full object-cover",
                        src: "{url}",
                        alt: "{release.title}",
                    }
                } else {
                    div { class: "w-full h-full flex items-center justify-center text-gray-600",
                        DiscIcon { class: "w-12 h-12" }
                    }
                }
            }
            div { class: "p-3",
                p { class: "font-semibold text-gray-100 truncate", "{release.title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "text-sm text-gray-400 truncate", "{subtitle}" }
                }
                div { class: "flex gap-2 text-xs text-gray-500 mt-1",
                    if let Some(year) = release.year() {
                        span { "{year}" }
                    }
                    if let Some(ref genre) = release.genre {
                        span { "{genre}" }
                    }
                    if let Some(ref kind) = release.release_type {
                        span { class: "uppercase", "{kind}" }
                    }
                }
                if !release.links.entries().is_empty() {
                    div { class: "flex flex-wrap gap-x-3 gap-y-1 mt-2",
                        for (label, url) in release.links.entries() {
                            a {
                                class: "inline-flex items-center gap-1 text-xs text-red-400 hover:text-red-300",
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener",
                                "{label}"
                                ExternalLinkIcon { class: "w-3 h-3" }
                            }
                        }
                    }
                }
            }
        }
    }
}
