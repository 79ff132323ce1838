//! Artist editor view for the admin dashboard.

use crate::components::{
    Button, ButtonSize, ButtonVariant, TextInput, TextInputSize,
};
use dioxus::prelude::*;

/// Pure view component for creating or editing one artist record.
#[component]
pub fn ArtistEditorView(
    /// "New artist" vs "Edit artist" heading.
    heading: String,
    name: String,
    image_url: String,
    bio: String,
    submitting: bool,
    error: Option<String>,

    on_name_change: EventHandler<String>,
    on_image_url_change: EventHandler<String>,
    on_bio_change: EventHandler<String>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let can_save = !submitting && !name.is_empty();

    rsx! {
        div { class: "bg-neutral-800/40 rounded-lg p-6",
            h2 { class: "text-xl font-semibold text-white mb-4", "{heading}" }

            if let Some(ref error) = error {
                p { class: "text-sm text-red-400 mb-4", "{error}" }
            }

            div { class: "space-y-4",
                div {
                    label { class: "block text-sm font-medium text-gray-300 mb-1", "Name" }
                    TextInput {
                        value: name,
                        on_input: move |v| on_name_change.call(v),
                        size: TextInputSize::Medium,
                        disabled: submitting,
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-300 mb-1", "Image URL" }
                    TextInput {
                        value: image_url,
                        on_input: move |v| on_image_url_change.call(v),
                        size: TextInputSize::Medium,
                        placeholder: "https://...",
                        disabled: submitting,
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-300 mb-1", "Bio" }
                    textarea {
                        class: "w-full bg-neutral-800/60 rounded px-3 py-2 text-gray-200 h-28",
                        value: "{bio}",
                        disabled: submitting,
                        oninput: move |e| on_bio_change.call(e.value()),
                    }
                }
                div { class: "flex gap-2",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        disabled: !can_save,
                        loading: submitting,
                        onclick: move |_| on_save.call(()),
                        "Save"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        disabled: submitting,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
