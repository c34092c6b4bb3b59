use contracts::domain::a001_post::aggregate::Post;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use super::view_model::PostDetailsViewModel;
use crate::shared::api::use_api;
use crate::shared::components::post_card::PostCard;
use crate::shared::components::post_image::PostImage;
use crate::shared::date_utils::format_post_date;

#[component]
pub fn PostDetails() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let vm = PostDetailsViewModel::new(use_api());

    Effect::new({
        let vm = vm.clone();
        move |_| {
            let slug = params.read().get("slug").unwrap_or_default();
            vm.load(slug);
        }
    });

    let deleted = vm.deleted;
    Effect::new(move |_| {
        if deleted.get() {
            navigate("/", Default::default());
        }
    });

    let vm_clone = vm.clone();

    view! {
        <div class="page post-details">
            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <div>{e}</div>
                    </MessageBar>
                })
            }

            {
                let vm = vm_clone.clone();
                move || {
                    if vm.loading.get() {
                        return view! {
                            <Flex gap=FlexGap::Small>
                                <Spinner />
                                <span>"Loading post..."</span>
                            </Flex>
                        }
                        .into_any();
                    }
                    match vm.post.get() {
                        Some(post) => view! { <PostArticle vm=vm.clone() post=post /> }.into_any(),
                        None => view! { <A href="/">"Back to all posts"</A> }.into_any(),
                    }
                }
            }

            {
                let vm = vm_clone.clone();
                move || {
                    let related = vm.related.get();
                    (!related.is_empty()).then(|| view! {
                        <section class="post-details__related">
                            <h2>"Related Posts"</h2>
                            <div class="post-grid">
                                {related
                                    .into_iter()
                                    .map(|p| view! { <PostCard post=p /> })
                                    .collect_view()}
                            </div>
                        </section>
                    })
                }
            }
        </div>
    }
}

#[component]
fn PostArticle(vm: PostDetailsViewModel, post: Post) -> impl IntoView {
    let edit_href = format!("/edit-post/{}", post.slug);
    let date = post.published_at.as_deref().map(format_post_date);
    let reading = format!("{} min read", post.reading_time_minutes());
    let reference = post.image_reference().map(str::to_string);
    let title = post.title.clone();
    let confirm_delete = vm.confirm_delete;
    let deleting = vm.deleting;

    view! {
        <article>
            <header class="post-details__header">
                <div>
                    <h1>{post.title.clone()}</h1>
                    <div class="post-details__meta">
                        {date.map(|d| view! { <time>{d}</time> })}
                        <span>{reading}</span>
                    </div>
                </div>
                <div class="post-details__actions">
                    <A href=edit_href>"Edit"</A>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| confirm_delete.set(true)
                    >
                        "Delete"
                    </Button>
                </div>
            </header>

            <PostImage reference=reference alt=post.title.clone() class="post-details__cover" />
            <div class="post-details__content" inner_html=post.content.clone()></div>

            <div class="post-details__tags">
                {post
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                    .collect_view()}
            </div>

            <Show when=move || confirm_delete.get()>
                <div class="modal-backdrop">
                    <div class="modal">
                        <h3>"Delete Post"</h3>
                        <p>
                            "Are you sure you want to delete \"" {title.clone()}
                            "\"? This action cannot be undone."
                        </p>
                        <div class="modal__actions">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=deleting
                                on_click=move |_| confirm_delete.set(false)
                            >
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=deleting
                                on_click={
                                    let vm = vm.clone();
                                    move |_| vm.delete_command()
                                }
                            >
                                {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </article>
    }
}
