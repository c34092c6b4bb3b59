//! Single post page
//!
//! - view_model.rs: load/delete commands and page state
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::PostDetails;
pub use view_model::PostDetailsViewModel;
