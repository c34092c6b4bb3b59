use contracts::shared::validation::ValidationError;
use leptos::prelude::*;

/// First error reported for `field`, if any.
pub fn error_for(errors: &[ValidationError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.clone())
}

/// Inline validation message under a form field.
#[component]
pub fn FieldError(errors: RwSignal<Vec<ValidationError>>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|list| error_for(list, field))
            .map(|message| view! { <p class="form-error">{message}</p> })
    }
}
