//! Admin dashboard: artist roster management. Only reachable through the
//! admin route guard.

use crate::api::ArtistInput;
use crate::app_service::use_app;
use dioxus::prelude::*;
use tracing::info;
use wax_ui::display_types::CatalogArtist;
use wax_ui::stores::{
    AppStateStoreExt, CatalogStateStoreExt, SessionDomain, SessionStateStoreExt,
};
use wax_ui::{
    ArtistEditorView, Button, ButtonSize, ButtonVariant, EmptyState, ErrorBanner,
    LoadingSpinner, PageContainer,
};

/// Editor buffer for the create/edit form.
#[derive(Clone, Debug, Default, PartialEq)]
struct EditorState {
    id: Option<i64>,
    name: String,
    image_url: String,
    bio: String,
}

impl EditorState {
    fn from_artist(artist: &CatalogArtist) -> Self {
        Self {
            id: Some(artist.id),
            name: artist.name.clone(),
            image_url: artist.image_url.clone().unwrap_or_default(),
            bio: artist.bio.clone().unwrap_or_default(),
        }
    }

    fn input(&self) -> ArtistInput {
        ArtistInput {
            name: self.name.clone(),
            image_url: (!self.image_url.is_empty()).then(|| self.image_url.clone()),
            bio: (!self.bio.is_empty()).then(|| self.bio.clone()),
        }
    }
}

#[component]
fn AdminArtistRow(
    artist: CatalogArtist,
    on_edit: EventHandler<CatalogArtist>,
    on_delete: EventHandler<i64>,
) -> Element {
    let artist_id = artist.id;
    let edit_artist = artist.clone();

    rsx! {
        li { class: "py-3 flex items-center gap-4",
            span { class: "text-gray-100 flex-1", "{artist.name}" }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                onclick: move |_| on_edit.call(edit_artist.clone()),
                "Edit"
            }
            Button {
                variant: ButtonVariant::Danger,
                size: ButtonSize::Small,
                onclick: move |_| on_delete.call(artist_id),
                "Delete"
            }
        }
    }
}

#[component]
pub fn Admin() -> Element {
    let app = use_app();
    let admin_name = app
        .state
        .admin_session()
        .profile()
        .read()
        .clone()
        .map(|p| p.username)
        .unwrap_or_default();

    let loading = *app.state.catalog().loading().read();
    let failed = *app.state.catalog().failed().read();
    let catalog_error = app.state.catalog().error().read().clone();
    let artists = app.state.catalog().artists().read().clone();

    let mut editing: Signal<Option<EditorState>> = use_signal(|| None);
    let mut saving = use_signal(|| false);
    let mut editor_error: Signal<Option<String>> = use_signal(|| None);

    let logout_app = app.clone();
    let retry_app = app.clone();
    let save_app = app.clone();
    let delete_app = app.clone();

    let editor = editing().map(|ed| {
        let heading = if ed.id.is_some() {
            "Edit artist"
        } else {
            "New artist"
        };
        rsx! {
            div { class: "mb-8",
                ArtistEditorView {
                    heading: heading.to_string(),
                    name: ed.name.clone(),
                    image_url: ed.image_url.clone(),
                    bio: ed.bio.clone(),
                    submitting: saving(),
                    error: editor_error(),
                    on_name_change: move |v| {
                        editing.with_mut(|e| {
                            if let Some(e) = e {
                                e.name = v;
                            }
                        })
                    },
                    on_image_url_change: move |v| {
                        editing.with_mut(|e| {
                            if let Some(e) = e {
                                e.image_url = v;
                            }
                        })
                    },
                    on_bio_change: move |v| {
                        editing.with_mut(|e| {
                            if let Some(e) = e {
                                e.bio = v;
                            }
                        })
                    },
                    on_save: {
                        let save_app = save_app.clone();
                        move |_| {
                            let Some(ed) = editing() else { return };
                            let app = save_app.clone();
                            saving.set(true);
                            editor_error.set(None);
                            spawn(async move {
                                let result = match ed.id {
                                    Some(id) => {
                                        app.api.update_artist(id, &ed.input()).await.map(|_| ())
                                    }
                                    None => app.api.create_artist(&ed.input()).await.map(|_| ()),
                                };
                                match result {
                                    Ok(()) => {
                                        info!(name = %ed.name, "artist saved");
                                        editing.set(None);
                                        app.refresh_catalog();
                                    }
                                    Err(e) => editor_error.set(Some(e.to_string())),
                                }
                                saving.set(false);
                            });
                        }
                    },
                    on_cancel: move |_| {
                        editing.set(None);
                        editor_error.set(None);
                    },
                }
            }
        }
    });

    rsx! {
        PageContainer { title: "Admin dashboard".to_string(),
            div { class: "flex items-center gap-3 mb-8",
                span { class: "text-gray-400 flex-1", "Signed in as {admin_name}" }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Small,
                    onclick: move |_| {
                        editing.set(Some(EditorState::default()));
                        editor_error.set(None);
                    },
                    "New artist"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    size: ButtonSize::Small,
                    onclick: move |_| logout_app.logout(SessionDomain::Admin),
                    "Log out"
                }
            }

            {editor}

            h2 { class: "text-xl font-semibold text-white mb-2", "Roster" }
            if loading {
                LoadingSpinner { message: "Loading roster...".to_string() }
            } else if failed {
                ErrorBanner {
                    heading: "Could not load the roster".to_string(),
                    detail: catalog_error.unwrap_or_else(|| "unknown error".to_string()),
                    button_label: "Retry".to_string(),
                    on_retry: move |_| retry_app.refresh_catalog(),
                }
            } else if artists.is_empty() {
                EmptyState { message: "No artists yet".to_string() }
            } else {
                ul { class: "divide-y divide-neutral-800",
                    for artist in artists {
                        AdminArtistRow {
                            artist: artist.clone(),
                            on_edit: move |artist: CatalogArtist| {
                                editing.set(Some(EditorState::from_artist(&artist)));
                                editor_error.set(None);
                            },
                            on_delete: {
                                let delete_app = delete_app.clone();
                                move |id: i64| {
                                    let app = delete_app.clone();
                                    spawn(async move {
                                        match app.api.delete_artist(id).await {
                                            Ok(()) => {
                                                info!(id, "artist deleted");
                                                app.refresh_catalog();
                                            }
                                            Err(e) => {
                                                app.notify(format!(
                                                    "Failed to delete artist: {e}"
                                                ));
                                            }
                                        }
                                    });
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
