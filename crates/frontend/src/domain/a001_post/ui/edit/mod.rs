//! Create / edit post page
//!
//! - view_model.rs: form state, image selection and submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::PostEditor;
pub use view_model::PostEditorViewModel;
