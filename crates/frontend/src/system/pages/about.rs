use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::page_header::PageHeader;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about">
            <PageHeader
                title="About Us"
                subtitle="A community blog about software and the people who build it."
            />
            <p>
                "We publish tutorials, deep dives and field notes written by engineers. "
                "Anyone can contribute: write a post, add a cover image and tag it so readers can find it."
            </p>
            <p>
                "Have feedback or a story to pitch? "
                <A href="/contact">"Get in touch"</A>
                "."
            </p>
        </div>
    }
}
