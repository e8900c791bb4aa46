use leptos::prelude::*;

/// Input component with label, error and helper text support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Validation error; shown instead of the helper text
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Helper text shown under the field when there is no error
    #[prop(optional, into)]
    helper_text: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Focus the field on mount
    #[prop(optional)]
    autofocus: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let has_error = move || error.get().is_some();
    let hint = move || error.get().or_else(|| helper_text.get());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || {
                    if has_error() {
                        "form__input form__input--error"
                    } else {
                        "form__input"
                    }
                }
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                autofocus=autofocus
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || hint().map(|text| view! {
                <span class=if has_error() { "form__hint form__hint--error" } else { "form__hint" }>
                    {text}
                </span>
            })}
        </div>
    }
}
