//! Nav bar view component
//!
//! Pure, props-based component for the site navigation bar.

use crate::components::icons::{DiscIcon, MenuIcon};
use crate::components::ChromelessButton;
use dioxus::prelude::*;

/// Navigation item for the nav bar
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Nav bar view (pure, props-based)
///
/// Renders the brand, nav links, and the artist-session controls; all
/// interactions go through callbacks.
#[component]
pub fn NavBarView(
    brand: String,
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    /// Username shown when the artist session is authenticated.
    session_user: Option<String>,
    on_login_click: EventHandler<()>,
    on_logout_click: EventHandler<()>,
    /// Small-screen menu state.
    menu_open: bool,
    on_menu_toggle: EventHandler<()>,
) -> Element {
    let menu_class = if menu_open {
        "flex flex-col absolute top-full left-0 right-0 bg-neutral-900 border-b border-neutral-700 md:static md:flex-row md:border-0"
    } else {
        "hidden md:flex md:flex-row"
    };

    rsx! {
        nav { class: "sticky top-0 z-40 bg-neutral-900/90 border-b border-neutral-800 shadow-lg",
            div { class: "relative flex items-center justify-between px-4 h-16",
                // Brand
                ChromelessButton {
                    class: Some("flex items-center gap-2 text-white font-extrabold text-xl".to_string()),
                    onclick: move |_| on_nav_click.call("home".to_string()),
                    DiscIcon { class: "w-6 h-6 text-red-600" }
                    span { "{brand}" }
                }

                div { class: "{menu_class} items-center gap-1 md:gap-4 p-4 md:p-0",
                    for item in nav_items {
                        NavLink {
                            item: item.clone(),
                            on_click: move |_| on_nav_click.call(item.id.clone()),
                        }
                    }
                    if let Some(name) = session_user {
                        span { class: "text-sm text-gray-400 md:ml-4", "{name}" }
                        ChromelessButton {
                            class: Some("text-sm text-gray-300 hover:text-white px-2 py-1".to_string()),
                            onclick: move |_| on_logout_click.call(()),
                            "Log out"
                        }
                    } else {
                        ChromelessButton {
                            class: Some("text-sm text-gray-300 hover:text-white px-2 py-1".to_string()),
                            onclick: move |_| on_login_click.call(()),
                            "Log in"
                        }
                    }
                }

                // Small-screen menu toggle
                ChromelessButton {
                    class: Some("md:hidden text-gray-300 hover:text-white".to_string()),
                    aria_label: Some("Toggle menu".to_string()),
                    onclick: move |_| on_menu_toggle.call(()),
                    MenuIcon { class: "w-6 h-6" }
                }
            }
        }
    }
}

#[component]
fn NavLink(item: NavItem, on_click: EventHandler<()>) -> Element {
    let active_class = if item.is_active {
        "text-white border-b-2 border-red-600"
    } else {
        "text-gray-400 hover:text-white"
    };

    rsx! {
        ChromelessButton {
            class: Some(format!("px-2 py-1 text-sm uppercase tracking-wide {active_class}")),
            onclick: move |_| on_click.call(()),
            "{item.label}"
        }
    }
}
