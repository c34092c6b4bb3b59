use leptos::prelude::*;
use leptos_router::components::A;

/// Top navigation entries: (href, label)
const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/create-post", "New Post"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/">
                    <span class="header__title">"Blog"</span>
                </A>
            </div>
            <nav class="header__nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! { <A href=*href>{*label}</A> })
                    .collect_view()}
            </nav>
        </header>
    }
}
