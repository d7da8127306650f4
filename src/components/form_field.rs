//! Labelled input bound to one field of a [`FormState`].

use leptos::prelude::*;

use crate::state::form::FormState;
use crate::util::validation::Field;

/// Text input with live validation feedback.
///
/// Every keystroke runs through [`FormState::with_input`], so the field's
/// error updates as the user types. `secret` inputs render as passwords with
/// a show/hide toggle.
#[component]
pub fn FormField(
    form: RwSignal<FormState>,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] secret: bool,
) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let current_type = move || if secret && !revealed.get() { "password" } else { input_type };
    let error = move || form.with(|s| s.error(field).map(str::to_owned));

    view! {
        <label class=move || if error().is_some() { "form-field form-field--invalid" } else { "form-field" }>
            <span class="form-field__label">{label}</span>
            <div class="form-field__control">
                <input
                    class="form-field__input"
                    name=field.as_str()
                    type=current_type
                    prop:value=move || form.with(|s| s.values.get(field).to_owned())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|s| *s = s.with_input(field, value));
                    }
                />
                <Show when=move || secret>
                    <button
                        type="button"
                        class="form-field__toggle"
                        on:click=move |_| revealed.update(|r| *r = !*r)
                    >
                        {move || if revealed.get() { "Hide" } else { "Show" }}
                    </button>
                </Show>
            </div>
            <Show when=move || error().is_some()>
                <p class="form-field__error">{move || error().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}
