//! Admin login page. Same form, different session domain; signing in here
//! never touches the artist session.

use crate::app_service::use_app;
use crate::Route;
use dioxus::prelude::*;
use wax_ui::display_types::Credentials;
use wax_ui::stores::{
    AppStateStoreExt, SessionDomain, SessionStateStoreExt, SessionStatus,
};
use wax_ui::LoginFormView;

#[component]
pub fn AdminLogin() -> Element {
    let app = use_app();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let nav_app = app.clone();
    use_effect(move || {
        if *nav_app.state.admin_session().status().read() == SessionStatus::Authenticated {
            navigator().replace(Route::Admin {});
        }
    });

    let status = *app.state.admin_session().status().read();
    let error = app.state.admin_session().last_error().read().clone();
    let submitting = status == SessionStatus::Verifying;

    let submit_app = app.clone();
    let retry_app = app.clone();

    rsx! {
        div { class: "flex-grow py-16 px-4",
            LoginFormView {
                title: "Admin sign in".to_string(),
                email: email(),
                password: password(),
                submitting,
                error,
                on_email_change: move |v| email.set(v),
                on_password_change: move |v| password.set(v),
                on_submit: move |_| {
                    submit_app.login(
                        SessionDomain::Admin,
                        Credentials {
                            email: email(),
                            password: password(),
                        },
                    );
                },
                on_retry: Some(EventHandler::new(move |_| {
                    retry_app.verify(SessionDomain::Admin)
                })),
            }
        }
    }
}
