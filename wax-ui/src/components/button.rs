//! Reusable button components

use dioxus::prelude::*;

/// Chromeless button - accessibility and click handling without styling.
/// Used by the nav bar and toasts where the visual variants don't fit.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            disabled,
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Red accent - the label's primary action color
    Primary,
    /// Gray background - secondary/cancel actions
    Secondary,
    /// Red outline - destructive actions
    Danger,
    /// Text only with hover
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
}

/// Reusable button with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] r#type: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-red-700 hover:bg-red-600 text-white",
        ButtonVariant::Secondary => "bg-neutral-700 hover:bg-neutral-600 text-gray-100",
        ButtonVariant::Danger => "border border-red-700 text-red-400 hover:bg-red-900/30",
        ButtonVariant::Ghost => "text-gray-300 hover:text-white",
    };

    let size_class = match size {
        ButtonSize::Small => "px-3 py-1.5 text-sm",
        ButtonSize::Medium => "px-4 py-2",
    };

    let disabled_class = if is_disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    rsx! {
        button {
            class: "rounded font-medium transition-colors {variant_class} {size_class} {disabled_class}",
            r#type,
            disabled: is_disabled,
            aria_disabled: if is_disabled { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
