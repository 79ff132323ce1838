//! Artist login page.

use crate::app_service::use_app;
use crate::Route;
use dioxus::prelude::*;
use wax_ui::display_types::Credentials;
use wax_ui::stores::{
    AppStateStoreExt, SessionDomain, SessionStateStoreExt, SessionStatus,
};
use wax_ui::LoginFormView;

#[component]
pub fn Login() -> Element {
    let app = use_app();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    // Once the artist session resolves as authenticated (fresh login or a
    // valid cookie), leave the login page.
    let nav_app = app.clone();
    use_effect(move || {
        if *nav_app.state.artist_session().status().read() == SessionStatus::Authenticated {
            navigator().replace(Route::Profile {});
        }
    });

    let status = *app.state.artist_session().status().read();
    let error = app.state.artist_session().last_error().read().clone();
    let submitting = status == SessionStatus::Verifying;

    let submit_app = app.clone();
    let retry_app = app.clone();

    rsx! {
        div { class: "flex-grow py-16 px-4",
            LoginFormView {
                title: "Artist sign in".to_string(),
                email: email(),
                password: password(),
                submitting,
                error,
                on_email_change: move |v| email.set(v),
                on_password_change: move |v| password.set(v),
                on_submit: move |_| {
                    submit_app.login(
                        SessionDomain::Artist,
                        Credentials {
                            email: email(),
                            password: password(),
                        },
                    );
                },
                on_retry: Some(EventHandler::new(move |_| {
                    retry_app.verify(SessionDomain::Artist)
                })),
            }
            p { class: "text-center text-sm text-gray-500 mt-6",
                "No account yet? "
                a {
                    class: "text-red-400 hover:text-red-300 cursor-pointer",
                    onclick: move |_| {
                        navigator().push(Route::Register {});
                    },
                    "Register"
                }
            }
        }
    }
}
