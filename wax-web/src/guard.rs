//! Route guards for the protected subtrees.
//!
//! A guard renders its Outlet only once the wrapped domain's session is
//! `Authenticated`. While the first verification is still unresolved it shows
//! a neutral placeholder - redirecting during that window would bounce a
//! valid returning session to the login page. Only a committed
//! `Unauthenticated` triggers the redirect to the domain's login route.

use crate::app_service::use_app;
use crate::Route;
use dioxus::prelude::*;
use wax_ui::stores::{AppStateStoreExt, SessionStateStoreExt, SessionStatus};
use wax_ui::LoadingSpinner;

/// Gate for the artist domain (`/profile`).
#[component]
pub fn RequireArtistSession() -> Element {
    let app = use_app();

    let redirect_app = app.clone();
    use_effect(move || {
        let status = *redirect_app.state.artist_session().status().read();
        if status == SessionStatus::Unauthenticated {
            navigator().replace(Route::Login {});
        }
    });

    let status = *app.state.artist_session().status().read();
    match status {
        SessionStatus::Authenticated => rsx! {
            Outlet::<Route> {}
        },
        SessionStatus::Unknown | SessionStatus::Verifying => rsx! {
            LoadingSpinner { message: "Checking your session...".to_string() }
        },
        // The effect above has already issued the redirect.
        SessionStatus::Unauthenticated => rsx! {},
    }
}

/// Gate for the admin domain (`/admin`).
#[component]
pub fn RequireAdminSession() -> Element {
    let app = use_app();

    let redirect_app = app.clone();
    use_effect(move || {
        let status = *redirect_app.state.admin_session().status().read();
        if status == SessionStatus::Unauthenticated {
            navigator().replace(Route::AdminLogin {});
        }
    });

    let status = *app.state.admin_session().status().read();
    match status {
        SessionStatus::Authenticated => rsx! {
            Outlet::<Route> {}
        },
        SessionStatus::Unknown | SessionStatus::Verifying => rsx! {
            LoadingSpinner { message: "Checking your session...".to_string() }
        },
        SessionStatus::Unauthenticated => rsx! {},
    }
}
