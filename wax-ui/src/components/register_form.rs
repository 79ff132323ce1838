//! Register form view with role picker.

use crate::components::{
    Button, ButtonSize, ButtonVariant, TextInput, TextInputSize, TextInputType,
};
use crate::display_types::Role;
use dioxus::prelude::*;

/// Pure view component for the artist registration form.
#[component]
pub fn RegisterFormView(
    username: String,
    email: String,
    password: String,
    /// Roles fetched from the server for the picker.
    roles: Vec<Role>,
    selected_role: Option<i64>,
    submitting: bool,
    error: Option<String>,

    on_username_change: EventHandler<String>,
    on_email_change: EventHandler<String>,
    on_password_change: EventHandler<String>,
    on_role_change: EventHandler<Option<i64>>,
    on_submit: EventHandler<()>,
) -> Element {
    let can_submit =
        !submitting && !username.is_empty() && !email.is_empty() && !password.is_empty();

    rsx! {
        div { class: "max-w-md mx-auto bg-neutral-800/40 rounded-lg p-8",
            h1 { class: "text-2xl font-bold text-white mb-6", "Register" }

            if let Some(ref error) = error {
                p { class: "text-sm text-red-400 mb-4", "{error}" }
            }

            form {
                onsubmit: move |e| {
                    e.prevent_default();
                    if can_submit {
                        on_submit.call(());
                    }
                },
                div { class: "space-y-4",
                    div {
                        label { class: "block text-sm font-medium text-gray-300 mb-1", "Artist name" }
                        TextInput {
                            value: username,
                            on_input: move |v| on_username_change.call(v),
                            size: TextInputSize::Medium,
                            disabled: submitting,
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-300 mb-1", "Email" }
                        TextInput {
                            value: email,
                            on_input: move |v| on_email_change.call(v),
                            size: TextInputSize::Medium,
                            input_type: TextInputType::Email,
                            disabled: submitting,
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-300 mb-1", "Password" }
                        TextInput {
                            value: password,
                            on_input: move |v| on_password_change.call(v),
                            size: TextInputSize::Medium,
                            input_type: TextInputType::Password,
                            disabled: submitting,
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-300 mb-1", "Role" }
                        select {
                            class: "w-full bg-neutral-800/60 rounded px-3 py-2 text-gray-200",
                            disabled: submitting,
                            onchange: move |e| {
                                on_role_change.call(e.value().parse::<i64>().ok());
                            },
                            option { value: "", selected: selected_role.is_none(), "Select a role" }
                            for role in roles {
                                option {
                                    value: "{role.id}",
                                    selected: selected_role == Some(role.id),
                                    "{role.name}"
                                }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        r#type: "submit",
                        disabled: !can_submit,
                        loading: submitting,
                        onclick: |_| {},
                        if submitting { "Registering..." } else { "Register" }
                    }
                }
            }
        }
    }
}
