//! Landing page: hero, artists preview, about/demos/contact sections.

use crate::app_service::use_app;
use crate::Route;
use dioxus::prelude::*;
use wax_ui::stores::{AppStateStoreExt, CatalogStateStoreExt};
use wax_ui::{ArtistCard, Button, ButtonSize, ButtonVariant};

#[component]
pub fn Home() -> Element {
    let app = use_app();
    let artists = app.state.catalog().artists().read().clone();
    let preview: Vec<_> = artists.into_iter().take(4).collect();

    rsx! {
        // Hero
        section { class: "py-24 text-center bg-gradient-to-b from-neutral-900 to-neutral-950",
            h1 { class: "text-5xl font-extrabold text-white tracking-tight",
                "PRESSED TO WAX"
            }
            h2 { class: "text-2xl text-gray-400 mt-2", "Hard techno label" }
        }

        // Artists preview (reads the catalog cache; failures render on /artists)
        if !preview.is_empty() {
            section { class: "container mx-auto px-4 py-12",
                h2 { class: "text-2xl font-bold text-white mb-4", "Artists" }
                div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                    for artist in preview {
                        ArtistCard {
                            artist: artist.clone(),
                            on_click: move |id| {
                                navigator().push(Route::ArtistDetail { id });
                            },
                        }
                    }
                }
                div { class: "mt-6",
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        onclick: move |_| {
                            navigator().push(Route::Artists {});
                        },
                        "All artists"
                    }
                }
            }
        }

        section { id: "about", class: "container mx-auto px-4 py-12",
            h2 { class: "text-2xl font-bold text-white mb-4", "About" }
            p { class: "text-gray-400 max-w-2xl",
                "An independent label for uncompromising hard techno. We press small runs, \
                 we pay artists fairly, and we keep the catalog online for everyone."
            }
        }

        section { id: "demos", class: "container mx-auto px-4 py-12",
            h2 { class: "text-2xl font-bold text-white mb-4", "Demos" }
            p { class: "text-gray-400 max-w-2xl",
                "We listen to everything. Register an artist account and send your demo from \
                 your profile page, or mail "
                a { class: "text-red-400 hover:text-red-300", href: "mailto:demos@wax.example",
                    "demos@wax.example"
                }
                "."
            }
        }

        section { id: "contact", class: "container mx-auto px-4 py-12",
            h2 { class: "text-2xl font-bold text-white mb-4", "Contact" }
            p { class: "text-gray-400",
                a { class: "text-red-400 hover:text-red-300", href: "mailto:label@wax.example",
                    "label@wax.example"
                }
            }
        }
    }
}
