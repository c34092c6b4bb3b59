pub mod a001_post;
pub mod a002_contact;
