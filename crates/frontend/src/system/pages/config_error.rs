use leptos::prelude::*;
use thaw::*;

use crate::shared::api::ConfigError;

/// Mounted instead of the application when the backend address is unusable.
#[component]
pub fn ConfigErrorPage(error: ConfigError) -> impl IntoView {
    view! {
        <div class="page config-error">
            <MessageBar intent=MessageBarIntent::Error>
                <div>
                    <strong>"The application is not configured."</strong>
                    <p>{error.to_string()}</p>
                </div>
            </MessageBar>
        </div>
    }
}
