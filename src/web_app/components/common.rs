// web_app/components/common.rs - Reusable UI components
//
// Small building blocks shared by the product form and table.
// Philosophy: stateless components that receive all data via props.

use leptos::prelude::*;

use crate::web_app::form::{Field, FieldError};

/// Color of a button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Warning,
    Danger,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-indigo-600 hover:bg-indigo-500",
            ButtonVariant::Warning => "bg-yellow-500 hover:bg-yellow-400",
            ButtonVariant::Danger => "bg-red-500 hover:bg-red-400",
        }
    }
}

/// Styled button
#[component]
pub fn Button(
    /// Button label
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    #[prop(optional)]
    variant: ButtonVariant,
    /// Additional CSS classes (sizing, margins)
    #[prop(default = "px-4 py-2")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=format!("rounded-md text-white shadow-sm {} {}", variant.class(), class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Ring color of an input depending on whether it shows an error
pub fn input_class(has_error: bool) -> String {
    let ring = if has_error { "ring-red-500" } else { "ring-gray-300" };
    format!(
        "block w-full rounded-md py-1.5 shadow-sm ring-1 {} focus:ring-2 focus:ring-indigo-600",
        ring
    )
}

/// Labelled input bound to one product field, with its inline error
#[component]
pub fn FormField(
    field: Field,
    /// Current raw value
    #[prop(into)]
    value: Signal<String>,
    /// Error to display, if the field is touched and invalid
    #[prop(into)]
    error: Signal<Option<FieldError>>,
    on_input: Callback<(Field, String)>,
    on_blur: Callback<Field>,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.key() class="block text-sm font-medium text-gray-900">
                {field.label()}
            </label>
            <input
                id=field.key()
                name=field.key()
                type=field.input_type()
                class=move || input_class(error.with(Option::is_some))
                prop:value=move || value.get()
                on:input=move |ev| on_input.run((field, event_target_value(&ev)))
                on:blur=move |_| on_blur.run(field)
            />
            {move || error.get().map(|e| view! {
                <div class="text-red-500 text-sm">{e.to_string()}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_class_ring() {
        let invalid = input_class(true);
        assert!(invalid.contains("ring-red-500"));
        assert!(!invalid.contains("ring-gray-300"));

        let valid = input_class(false);
        assert!(valid.contains("ring-gray-300"));
        assert!(valid.contains("focus:ring-indigo-600"));
    }

    #[test]
    fn test_button_variants() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert!(ButtonVariant::Primary.class().contains("bg-indigo-600"));
        assert!(ButtonVariant::Warning.class().contains("bg-yellow-500"));
        assert!(ButtonVariant::Danger.class().contains("bg-red-500"));
    }
}
