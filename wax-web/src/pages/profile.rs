//! Artist profile page. Only reachable through the artist route guard.

use crate::app_service::use_app;
use dioxus::prelude::*;
use wax_ui::stores::{AppStateStoreExt, SessionDomain, SessionStateStoreExt};
use wax_ui::{Button, ButtonSize, ButtonVariant, PageContainer};

#[component]
pub fn Profile() -> Element {
    let app = use_app();
    // The guard only mounts this page while the session is authenticated, so
    // a missing profile never renders; the empty branch covers the teardown
    // frame after logout.
    let profile = app.state.artist_session().profile().read().clone();

    let refresh_app = app.clone();
    let logout_app = app.clone();

    rsx! {
        PageContainer { title: "Your profile".to_string(),
            if let Some(profile) = profile {
                div { class: "max-w-md bg-neutral-800/40 rounded-lg p-6 space-y-3",
                    div {
                        p { class: "text-sm text-gray-500", "Artist name" }
                        p { class: "text-gray-100", "{profile.username}" }
                    }
                    div {
                        p { class: "text-sm text-gray-500", "Email" }
                        p { class: "text-gray-100", "{profile.email}" }
                    }
                    if let Some(ref role) = profile.role {
                        div {
                            p { class: "text-sm text-gray-500", "Role" }
                            p { class: "text-gray-100", "{role}" }
                        }
                    }
                    div { class: "flex gap-2 pt-2",
                        Button {
                            variant: ButtonVariant::Secondary,
                            size: ButtonSize::Small,
                            onclick: move |_| refresh_app.verify(SessionDomain::Artist),
                            "Refresh"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            size: ButtonSize::Small,
                            onclick: move |_| logout_app.logout(SessionDomain::Artist),
                            "Log out"
                        }
                    }
                }
            }
        }
    }
}
