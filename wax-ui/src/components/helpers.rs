//! Common helper UI components

use crate::components::icons::DiscIcon;
use dioxus::prelude::*;

/// Loading spinner with optional message
#[component]
pub fn LoadingSpinner(
    #[props(default = "Loading...".to_string())] message: String,
) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-red-600" }
            p { class: "ml-4 text-gray-300", "{message}" }
        }
    }
}

/// Generic error display box
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div { class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
            p { "{message}" }
        }
    }
}

/// Standard page wrapper with title
#[component]
pub fn PageContainer(title: String, children: Element) -> Element {
    rsx! {
        div { class: "container mx-auto px-4 py-10 flex-grow",
            h1 { class: "text-3xl font-bold text-white mb-6", "{title}" }
            {children}
        }
    }
}

/// Centered empty-state message with the label's disc mark
#[component]
pub fn EmptyState(message: String, #[props(default)] detail: Option<String>) -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "text-gray-500 mb-4",
                DiscIcon { class: "w-16 h-16 mx-auto" }
            }
            h2 { class: "text-xl font-semibold text-gray-300 mb-2", "{message}" }
            if let Some(detail) = detail {
                p { class: "text-gray-500", "{detail}" }
            }
        }
    }
}
