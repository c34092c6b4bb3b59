//! Data contracts shared between the blog frontend and the REST backend.

pub mod domain;
pub mod shared;
