pub mod field_errors;
pub mod page_header;
pub mod post_card;
pub mod post_image;
