//! Dismissible notice toast for unexpected errors

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use dioxus::prelude::*;

/// A dismissible toast for unexpected server/network errors.
#[component]
pub fn NoticeToast(
    /// The message to display
    message: String,
    /// Called when the user dismisses the toast
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "fixed bottom-6 right-4 bg-neutral-800 border border-red-700 text-gray-100 px-6 py-4 rounded-lg shadow-lg z-50 max-w-md",
            div { class: "flex items-center justify-between gap-4",
                div { class: "flex-1",
                    span { "{message}" }
                }
                ChromelessButton {
                    class: Some("text-gray-400 hover:text-white".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(()),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
