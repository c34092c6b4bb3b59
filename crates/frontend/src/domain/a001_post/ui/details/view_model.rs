use contracts::domain::a001_post::aggregate::Post;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::domain::a001_post::model;
use crate::shared::api::{ApiClient, ApiError};

/// Message shown when the post itself cannot be loaded.
pub fn load_error_message(err: &ApiError) -> String {
    if err.is_not_found() {
        "Post not found.".to_string()
    } else {
        format!("Failed to load post: {}", err)
    }
}

/// Everything the post page shows for one slug.
#[derive(Debug, Clone, PartialEq)]
pub struct PostPage {
    pub post: Result<Post, ApiError>,
    /// Empty when the post failed or the related call failed
    pub related: Vec<Post>,
}

/// Fetch the post, then its related posts. A failing related call keeps the
/// post with no related posts.
pub async fn load_page(api: &ApiClient, slug: &str) -> PostPage {
    match model::fetch_post(api, slug).await {
        Ok(post) => PostPage {
            post: Ok(post),
            related: model::fetch_related(api, slug).await.unwrap_or_default(),
        },
        Err(err) => PostPage {
            post: Err(err),
            related: Vec::new(),
        },
    }
}

/// Numbers page loads so a load that finishes after a newer one started is
/// dropped instead of overwriting the newer post.
#[derive(Debug, Clone, Default)]
pub struct LoadGeneration(Arc<AtomicU64>);

impl LoadGeneration {
    /// Start a load; every earlier ticket becomes stale.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

/// ViewModel for the post page
#[derive(Clone)]
pub struct PostDetailsViewModel {
    api: ApiClient,
    pub post: RwSignal<Option<Post>>,
    pub related: RwSignal<Vec<Post>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub confirm_delete: RwSignal<bool>,
    pub deleting: RwSignal<bool>,
    /// Set once the backend confirmed the deletion.
    pub deleted: RwSignal<bool>,
    loads: LoadGeneration,
}

impl PostDetailsViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            post: RwSignal::new(None),
            related: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            confirm_delete: RwSignal::new(false),
            deleting: RwSignal::new(false),
            deleted: RwSignal::new(false),
            loads: LoadGeneration::default(),
        }
    }

    /// Show the page for `slug`. The previous post is cleared right away;
    /// results of an older, still running load are discarded.
    pub fn load(&self, slug: String) {
        let api = self.api.clone();
        let loads = self.loads.clone();
        let post = self.post;
        let related = self.related;
        let loading = self.loading;
        let error = self.error;

        let ticket = loads.next();
        loading.set(true);
        error.set(None);
        post.set(None);
        related.set(Vec::new());
        spawn_local(async move {
            let page = load_page(&api, &slug).await;
            if !loads.is_current(ticket) {
                return;
            }
            match page.post {
                Ok(p) => {
                    post.set(Some(p));
                    related.set(page.related);
                }
                Err(e) => error.set(Some(load_error_message(&e))),
            }
            loading.set(false);
        });
    }

    /// Delete the current post; `deleted` flips once the backend confirms.
    pub fn delete_command(&self) {
        let Some(slug) = self.post.with_untracked(|p| p.as_ref().map(|p| p.slug.clone())) else {
            return;
        };

        let api = self.api.clone();
        let error = self.error;
        let deleting = self.deleting;
        let confirm_delete = self.confirm_delete;
        let deleted = self.deleted;

        deleting.set(true);
        spawn_local(async move {
            let outcome = model::delete_post(&api, &slug).await;
            deleting.set(false);
            confirm_delete.set(false);
            match outcome {
                Ok(()) => deleted.set(true),
                Err(e) => error.set(Some(format!("Failed to delete post: {}", e))),
            }
        });
    }
}
