//! Login form view -- shared by the artist and admin login pages.

use crate::components::{
    Button, ButtonSize, ButtonVariant, ErrorBanner, TextInput, TextInputSize, TextInputType,
};
use crate::stores::SessionError;
use dioxus::prelude::*;

/// Pure view component for a login form.
///
/// Rejected credentials render inline above the form; transport failures
/// render as a banner with a retry button that re-submits.
#[component]
pub fn LoginFormView(
    title: String,
    email: String,
    password: String,
    /// True while the login call is in flight.
    submitting: bool,
    /// Failure from the last attempt, if any.
    error: Option<SessionError>,

    on_email_change: EventHandler<String>,
    on_password_change: EventHandler<String>,
    on_submit: EventHandler<()>,
    /// Retry for transport failures (e.g. re-verify). Falls back to submit.
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    let can_submit = !submitting && !email.is_empty() && !password.is_empty();
    let retryable = error.as_ref().map(|e| e.is_retryable()).unwrap_or(false);
    let error_message = error.as_ref().map(|e| e.message().to_string());

    rsx! {
        div { class: "max-w-md mx-auto bg-neutral-800/40 rounded-lg p-8",
            h1 { class: "text-2xl font-bold text-white mb-6", "{title}" }

            if let Some(message) = error_message {
                if retryable {
                    div { class: "mb-4",
                        ErrorBanner {
                            heading: "Could not sign in".to_string(),
                            detail: message.clone(),
                            button_label: "Try again".to_string(),
                            on_retry: move |_| {
                                match on_retry {
                                    Some(handler) => handler.call(()),
                                    None => on_submit.call(()),
                                }
                            },
                        }
                    }
                } else {
                    p { class: "text-sm text-red-400 mb-4", "{message}" }
                }
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
                        label { class: "block text-sm font-medium text-gray-300 mb-1", "Email" }
                        TextInput {
                            value: email,
                            on_input: move |v| on_email_change.call(v),
                            size: TextInputSize::Medium,
                            input_type: TextInputType::Email,
                            placeholder: "you@example.com",
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
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        r#type: "submit",
                        disabled: !can_submit,
                        loading: submitting,
                        onclick: |_| {},
                        if submitting { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
