use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;
use wasm_bindgen::JsCast;

use super::view_model::PostEditorViewModel;
use crate::shared::api::use_api;
use crate::shared::components::field_errors::FieldError;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::post_image::PostImage;
use contracts::domain::a001_post::form::{CoverImage, COVER_IMAGE_TYPES};

#[component]
pub fn PostEditor() -> impl IntoView {
    let slug = use_params_map().read_untracked().get("slug");
    let vm = PostEditorViewModel::new(use_api(), slug);
    vm.load_if_needed();

    let navigate = use_navigate();
    let saved_slug = vm.saved_slug;
    Effect::new(move |_| {
        if let Some(slug) = saved_slug.get() {
            navigate(&format!("/blog/{}", slug), Default::default());
        }
    });

    let (heading, action) = if vm.is_edit_mode() {
        ("Edit Post", "Update Post")
    } else {
        ("Create New Post", "Publish Post")
    };

    let errors = vm.errors;
    let submitting = vm.submitting;
    let loading = vm.loading;
    let preview = vm.preview;
    let existing_image = vm.existing_image;
    let vm_clone = vm.clone();

    let on_file = {
        let vm = vm_clone.clone();
        move |ev: web_sys::Event| {
            let file = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            match file {
                Some(file) => vm.select_image(file),
                None => vm.clear_image(),
            }
        }
    };

    view! {
        <div class="page post-editor">
            <PageHeader title=heading />

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <div>{e}</div>
                    </MessageBar>
                })
            }

            <Show when=move || loading.get()>
                <Flex gap=FlexGap::Small>
                    <Spinner />
                    <span>"Loading post..."</span>
                </Flex>
            </Show>

            <form
                class="post-editor__form"
                on:submit={
                    let vm = vm_clone.clone();
                    move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        vm.submit_command();
                    }
                }
            >
                <div class="form-group">
                    <label>"Title"</label>
                    <Input value=vm.title placeholder="Enter post title" />
                    <FieldError errors=errors field="title" />
                </div>

                <div class="form-group">
                    <label>"Excerpt"</label>
                    <Textarea value=vm.excerpt placeholder="Brief summary of your post" />
                    <FieldError errors=errors field="excerpt" />
                </div>

                <div class="form-group">
                    <label>"Content"</label>
                    <Textarea value=vm.content placeholder="Write your post content here" />
                    <FieldError errors=errors field="content" />
                </div>

                <div class="form-group">
                    <label>"Tags"</label>
                    <Input value=vm.tags placeholder="Comma-separated, e.g. rust, web" />
                </div>

                <div class="form-group">
                    <label>"Cover Image"</label>
                    <input type="file" accept=COVER_IMAGE_TYPES.join(",") on:change=on_file />
                    <FieldError errors=errors field=CoverImage::FIELD />
                    {move || match preview.get() {
                        Some(url) => view! {
                            <img class="post-editor__preview" src=url alt="Cover preview" />
                        }
                        .into_any(),
                        None => existing_image
                            .get()
                            .map(|reference| view! {
                                <PostImage
                                    reference=Some(reference)
                                    alt="Current cover image"
                                    class="post-editor__preview"
                                />
                            })
                            .into_any(),
                    }}
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || submitting.get() || loading.get())
                >
                    {move || if submitting.get() { "Saving..." } else { action }}
                </Button>
            </form>
        </div>
    }
}
