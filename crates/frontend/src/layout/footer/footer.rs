use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <span>{format!("© {} Blog. All rights reserved.", year)}</span>
            <div class="footer__links">
                <A href="/about">"About"</A>
                <A href="/contact">"Contact"</A>
            </div>
        </footer>
    }
}
