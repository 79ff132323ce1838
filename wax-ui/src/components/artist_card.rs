//! Artist card for the catalog grid

use crate::components::icons::DiscIcon;
use crate::display_types::CatalogArtist;
use dioxus::prelude::*;

/// Clickable artist tile with image and name.
#[component]
pub fn ArtistCard(artist: CatalogArtist, on_click: EventHandler<i64>) -> Element {
    let artist_id = artist.id;

    rsx! {
        div {
            class: "group cursor-pointer",
            onclick: move |_| on_click.call(artist_id),
            div { class: "aspect-square rounded-lg overflow-hidden bg-neutral-800 mb-2",
                if let Some(ref url) = artist.image_url {
                    img {
                        class: "w-full h-full object-cover group-hover:scale-105 transition-transform",
                        src: "{url}",
                        alt: "{artist.name}",
                    }
                } else {
                    div { class: "w-full h-full flex items-center justify-center text-gray-600",
                        DiscIcon { class: "w-12 h-12" }
                    }
                }
            }
            p { class: "text-sm font-medium text-gray-200 group-hover:text-white truncate",
                "{artist.name}"
            }
        }
    }
}
