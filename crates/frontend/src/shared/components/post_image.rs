use leptos::prelude::*;

use crate::shared::api::use_api;

/// Image source after a load attempt: the resolved URL until it fails once,
/// then the placeholder for good.
pub fn image_source<'a>(resolved: &'a str, placeholder: &'a str, failed: bool) -> &'a str {
    if failed {
        placeholder
    } else {
        resolved
    }
}

/// `<img>` for a media reference with a one-shot fallback to the placeholder.
///
/// If the placeholder itself fails, nothing further is tried.
#[component]
pub fn PostImage(
    /// Raw media reference from the backend; `None` shows the placeholder
    #[prop(into)]
    reference: Option<String>,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let api = use_api();
    let resolved = api.config().media_url(reference.as_deref());
    let placeholder = api.config().placeholder_image_url();
    let failed = RwSignal::new(false);

    let src = move || image_source(&resolved, &placeholder, failed.get()).to_string();

    view! {
        <img
            src=src
            alt=alt
            class=class
            on:error=move |_| {
                if !failed.get_untracked() {
                    failed.set(true);
                }
            }
        />
    }
}
