//! Reusable text input component

use dioxus::prelude::*;

/// Text input size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextInputSize {
    Small,
    Medium,
}

/// Input type rendered into the `type` attribute
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextInputType {
    Text,
    Email,
    Password,
}

impl TextInputType {
    fn as_attr(self) -> &'static str {
        match self {
            TextInputType::Text => "text",
            TextInputType::Email => "email",
            TextInputType::Password => "password",
        }
    }
}

/// Reusable text input with consistent styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    size: TextInputSize,
    #[props(default = TextInputType::Text)] input_type: TextInputType,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
) -> Element {
    let padding = match size {
        TextInputSize::Small => "px-2.5 py-1.5 text-sm",
        TextInputSize::Medium => "px-3 py-2",
    };

    let base = "w-full bg-neutral-800/60 rounded focus:outline-none focus:ring-1 focus:ring-red-600/50 text-gray-200 placeholder-gray-500";

    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    rsx! {
        input {
            r#type: input_type.as_attr(),
            class: "{base} {padding} {disabled_class}",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            disabled,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
