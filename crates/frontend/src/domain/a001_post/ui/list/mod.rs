use contracts::domain::a001_post::aggregate::{collect_tags, Post};
use contracts::domain::a001_post::mock::mock_posts;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a001_post::model;
use crate::shared::api::{use_api, ApiError};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::post_card::PostCard;

/// Number of posts promoted to the "Featured" row.
const FEATURED_COUNT: usize = 3;

/// Posts to display after the listing call settles, and whether they are the
/// offline samples.
pub fn listing_or_mock(outcome: Result<Vec<Post>, ApiError>) -> (Vec<Post>, bool) {
    match outcome {
        Ok(posts) => (posts, false),
        Err(_) => (mock_posts(), true),
    }
}

pub fn filter_posts(posts: &[Post], query: &str, tag: Option<&str>) -> Vec<Post> {
    posts
        .iter()
        .filter(|p| p.matches(query, tag))
        .cloned()
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn PostList() -> impl IntoView {
    let api = use_api();
    let (posts, set_posts) = signal::<Vec<Post>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (using_mock, set_using_mock) = signal(false);
    let search_query = RwSignal::new(String::new());
    let selected_tag = RwSignal::new(None::<String>);

    spawn_local(async move {
        let (list, mock) = listing_or_mock(model::fetch_posts(&api).await);
        set_posts.set(list);
        set_using_mock.set(mock);
        set_loading.set(false);
    });

    let tags = move || posts.with(|p| collect_tags(p));
    let featured = move || {
        posts.with(|p| p.iter().take(FEATURED_COUNT).cloned().collect::<Vec<_>>())
    };
    let filtered = move || {
        let query = search_query.get();
        let tag = selected_tag.get();
        posts.with(|p| filter_posts(p, &query, tag.as_deref()))
    };

    view! {
        <div class="page post-list">
            <PageHeader
                title="Welcome to Our Blog"
                subtitle="Discover the latest articles, insights, and stories from our community."
            >
                <A href="/create-post">"Write a Post"</A>
            </PageHeader>

            <Show when=move || using_mock.get()>
                <MessageBar intent=MessageBarIntent::Warning>
                    <div>
                        "Failed to load posts from API. Displaying mock data. "
                        "You can continue browsing with sample content."
                    </div>
                </MessageBar>
            </Show>

            <div class="post-list__filters">
                <Input value=search_query placeholder="Search posts..." />
                <div class="post-list__tags">
                    <button
                        class=move || tag_class(selected_tag.get().is_none())
                        on:click=move |_| selected_tag.set(None)
                    >
                        "All"
                    </button>
                    {move || {
                        tags()
                            .into_iter()
                            .map(|tag| {
                                let value = tag.clone();
                                let active = tag.clone();
                                view! {
                                    <button
                                        class=move || {
                                            tag_class(selected_tag.get().as_deref() == Some(active.as_str()))
                                        }
                                        on:click=move |_| selected_tag.set(Some(value.clone()))
                                    >
                                        {tag}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <Show when=move || !featured().is_empty()>
                <section class="post-list__featured">
                    <h2>"Featured Posts"</h2>
                    <div class="post-grid">
                        {move || {
                            featured()
                                .into_iter()
                                .map(|post| view! { <PostCard post=post /> })
                                .collect_view()
                        }}
                    </div>
                </section>
            </Show>

            <section class="post-list__latest">
                <h2>"Latest Posts"</h2>
                {move || {
                    if loading.get() {
                        view! {
                            <Flex gap=FlexGap::Small>
                                <Spinner />
                                <span>"Loading posts..."</span>
                            </Flex>
                        }
                        .into_any()
                    } else {
                        let visible = filtered();
                        if visible.is_empty() {
                            view! { <p class="empty">"No posts found."</p> }.into_any()
                        } else {
                            view! {
                                <div class="post-grid">
                                    {visible
                                        .into_iter()
                                        .map(|post| view! { <PostCard post=post /> })
                                        .collect_view()}
                                </div>
                            }
                            .into_any()
                        }
                    }
                }}
            </section>
        </div>
    }
}

fn tag_class(active: bool) -> &'static str {
    if active {
        "tag-filter tag-filter--active"
    } else {
        "tag-filter"
    }
}
