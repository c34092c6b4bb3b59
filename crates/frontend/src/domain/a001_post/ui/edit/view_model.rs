use contracts::domain::a001_post::form::{validate_cover_image, CoverImage, PostForm};
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::domain::a001_post::model;
use crate::shared::api::ApiClient;

/// Read a chosen file into memory. Size and type are checked first so an
/// oversized file is never read.
pub async fn read_cover_image(file: web_sys::File) -> Result<CoverImage, ValidationError> {
    let content_type = file.type_();
    validate_cover_image(&content_type, file.size() as usize)?;

    let buffer = JsFuture::from(file.array_buffer()).await.map_err(|e| {
        ValidationError::new(CoverImage::FIELD, format!("Could not read image: {:?}", e))
    })?;
    let array = js_sys::Uint8Array::new(&buffer);
    let mut bytes = vec![0; array.length() as usize];
    array.copy_to(&mut bytes);

    Ok(CoverImage {
        file_name: file.name(),
        content_type,
        bytes,
    })
}

/// Where to go after a save. The response slug wins; an update whose
/// response carries no slug stays on the edited one.
pub fn saved_slug(returned: String, editing: Option<&str>) -> String {
    match editing {
        Some(slug) if returned.is_empty() => slug.to_string(),
        _ => returned,
    }
}

/// ViewModel for the post editor. `slug` is `None` when creating.
#[derive(Clone)]
pub struct PostEditorViewModel {
    api: ApiClient,
    pub slug: Option<String>,
    pub title: RwSignal<String>,
    pub excerpt: RwSignal<String>,
    pub content: RwSignal<String>,
    pub tags: RwSignal<String>,
    /// Image reference of the stored post, shown until a new file is picked
    pub existing_image: RwSignal<Option<String>>,
    pub image: RwSignal<Option<CoverImage>>,
    /// Object URL of the newly picked file
    pub preview: RwSignal<Option<String>>,
    pub errors: RwSignal<Vec<ValidationError>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    /// Slug of the saved post; set once the backend accepted the form
    pub saved_slug: RwSignal<Option<String>>,
}

impl PostEditorViewModel {
    pub fn new(api: ApiClient, slug: Option<String>) -> Self {
        Self {
            api,
            slug,
            title: RwSignal::new(String::new()),
            excerpt: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            tags: RwSignal::new(String::new()),
            existing_image: RwSignal::new(None),
            image: RwSignal::new(None),
            preview: RwSignal::new(None),
            errors: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            submitting: RwSignal::new(false),
            saved_slug: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.slug.is_some()
    }

    pub fn form(&self) -> PostForm {
        PostForm {
            title: self.title.get_untracked(),
            excerpt: self.excerpt.get_untracked(),
            content: self.content.get_untracked(),
            tags: self.tags.get_untracked(),
        }
    }

    fn fill(&self, form: PostForm) {
        self.title.set(form.title);
        self.excerpt.set(form.excerpt);
        self.content.set(form.content);
        self.tags.set(form.tags);
    }

    /// Prefill the form when editing an existing post
    pub fn load_if_needed(&self) {
        let Some(slug) = self.slug.clone() else {
            return;
        };
        let vm = self.clone();
        vm.loading.set(true);
        spawn_local(async move {
            match model::fetch_post(&vm.api, &slug).await {
                Ok(post) => {
                    vm.existing_image
                        .set(post.image_reference().map(str::to_string));
                    vm.fill(PostForm::from_post(&post));
                }
                Err(e) => vm.error.set(Some(format!("Failed to load post: {}", e))),
            }
            vm.loading.set(false);
        });
    }

    /// Validate and load a picked file. A rejected file clears the selection.
    pub fn select_image(&self, file: web_sys::File) {
        let preview_url = web_sys::Url::create_object_url_with_blob(&file).ok();
        let vm = self.clone();
        spawn_local(async move {
            vm.clear_image();
            match read_cover_image(file).await {
                Ok(image) => {
                    vm.errors.update(|list| list.retain(|e| e.field != CoverImage::FIELD));
                    vm.image.set(Some(image));
                    vm.preview.set(preview_url);
                }
                Err(err) => {
                    if let Some(url) = preview_url {
                        let _ = web_sys::Url::revoke_object_url(&url);
                    }
                    vm.errors.update(|list| {
                        list.retain(|e| e.field != CoverImage::FIELD);
                        list.push(err);
                    });
                }
            }
        });
    }

    pub fn clear_image(&self) {
        if let Some(url) = self.preview.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
        self.preview.set(None);
        self.image.set(None);
    }

    /// Validate, then create or update. Nothing is sent while the form has
    /// errors.
    pub fn submit_command(&self) {
        let form = self.form();
        if let Err(errors) = form.validate() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(Vec::new());
        self.error.set(None);

        let vm = self.clone();
        vm.submitting.set(true);
        spawn_local(async move {
            let image = vm.image.get_untracked();
            let outcome = match vm.slug.as_deref() {
                Some(slug) => model::update_post(&vm.api, slug, &form, image.as_ref()).await,
                None => model::create_post(&vm.api, &form, image.as_ref()).await,
            };
            vm.submitting.set(false);
            match outcome {
                Ok(post) => vm.saved_slug.set(Some(saved_slug(post.slug, vm.slug.as_deref()))),
                Err(e) => vm.error.set(Some(format!("Failed to save post: {}", e))),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_slug() {
        assert_eq!(saved_slug("new-post".into(), None), "new-post");
        assert_eq!(saved_slug("renamed".into(), Some("old")), "renamed");
        assert_eq!(saved_slug(String::new(), Some("old")), "old");
    }
}
