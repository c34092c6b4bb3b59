use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_post::ui::details::PostDetails;
use crate::domain::a001_post::ui::edit::PostEditor;
use crate::domain::a001_post::ui::list::PostList;
use crate::domain::a002_contact::ui::ContactPage;
use crate::layout::Shell;
use crate::system::pages::about::AboutPage;
use crate::system::pages::not_found::NotFoundPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=PostList />
                    <Route path=path!("/blog/:slug") view=PostDetails />
                    <Route path=path!("/create-post") view=PostEditor />
                    <Route path=path!("/edit-post/:slug") view=PostEditor />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/about") view=AboutPage />
                </Routes>
            </Shell>
        </Router>
    }
}
