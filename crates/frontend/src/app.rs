use crate::routes::routes::AppRoutes;
use crate::shared::api::ApiClient;
use leptos::prelude::*;

#[component]
pub fn App(api: ApiClient) -> impl IntoView {
    // Every access-layer call reads the client (and its base URL) from context.
    provide_context(api);

    view! {
        <AppRoutes />
    }
}
