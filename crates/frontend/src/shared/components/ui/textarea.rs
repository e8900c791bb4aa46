use leptos::prelude::*;

/// Textarea component with label, error and helper text support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
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
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
    let has_error = move || error.get().is_some();
    let hint = move || error.get().or_else(|| helper_text.get());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class=move || {
                    if has_error() {
                        "form__textarea form__textarea--error"
                    } else {
                        "form__textarea"
                    }
                }
                rows=textarea_rows
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
            {move || hint().map(|text| view! {
                <span class=if has_error() { "form__hint form__hint--error" } else { "form__hint" }>
                    {text}
                </span>
            })}
        </div>
    }
}
