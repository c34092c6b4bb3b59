use contracts::domain::a001_post::aggregate::Post;
use leptos::prelude::*;
use leptos_router::components::A;

use super::post_image::PostImage;
use crate::shared::date_utils::format_post_date;

/// Listing card: cover image, title link, excerpt, date and tags.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = format!("/blog/{}", post.slug);
    let date = post.published_at.as_deref().map(format_post_date);
    let reading = format!("{} min read", post.reading_time_minutes());
    let reference = post.image_reference().map(str::to_string);
    let title = post.title;
    let image_alt = title.clone();
    let excerpt = post.excerpt;
    let tags = post.tags;

    view! {
        <article class="post-card">
            <A href=href.clone()>
                <PostImage reference=reference.clone() alt=image_alt.clone() class="post-card__image" />
            </A>
            <div class="post-card__body">
                <div class="post-card__meta">
                    {date.map(|d| view! { <time>{d}</time> })}
                    <span>{reading}</span>
                </div>
                <h3 class="post-card__title">
                    <A href=href>{title.clone()}</A>
                </h3>
                <p class="post-card__excerpt">{excerpt}</p>
                <div class="post-card__tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="tag">{tag}</span> })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
