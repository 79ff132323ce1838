//! Artist registration page with role picker.

use crate::app_service::use_app;
use crate::api::ApiError;
use crate::Route;
use dioxus::prelude::*;
use tracing::info;
use wax_ui::display_types::RegisterPayload;
use wax_ui::RegisterFormView;

#[component]
pub fn Register() -> Element {
    let app = use_app();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role: Signal<Option<i64>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let roles_api = app.api.clone();
    let roles_res = use_resource(move || {
        let api = roles_api.clone();
        async move { api.list_roles().await }
    });
    // A role is optional; if the roles fetch failed the picker is just empty.
    let roles = match &*roles_res.read() {
        Some(Ok(roles)) => roles.clone(),
        _ => Vec::new(),
    };

    let submit_app = app.clone();

    rsx! {
        div { class: "flex-grow py-16 px-4",
            RegisterFormView {
                username: username(),
                email: email(),
                password: password(),
                roles,
                selected_role: role(),
                submitting: submitting(),
                error: error(),
                on_username_change: move |v| username.set(v),
                on_email_change: move |v| email.set(v),
                on_password_change: move |v| password.set(v),
                on_role_change: move |v| role.set(v),
                on_submit: move |_| {
                    let api = submit_app.api.clone();
                    let payload = RegisterPayload {
                        username: username(),
                        email: email(),
                        password: password(),
                        role_id: role(),
                    };
                    submitting.set(true);
                    error.set(None);
                    spawn(async move {
                        match api.register(&payload).await {
                            Ok(profile) => {
                                info!(username = %profile.username, "account registered");
                                navigator().replace(Route::Login {});
                            }
                            Err(ApiError::Validation(m)) => error.set(Some(m)),
                            Err(e) => error.set(Some(e.to_string())),
                        }
                        submitting.set(false);
                    });
                },
            }
        }
    }
}
