use leptos::prelude::*;

/// Heading block at the top of a content page.
///
/// `children`, when given, render to the right of the heading (page actions
/// such as "New Post").
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {subtitle.map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
            </div>
            {children.map(|actions| view! {
                <div class="page-header__actions">{actions()}</div>
            })}
        </section>
    }
}
