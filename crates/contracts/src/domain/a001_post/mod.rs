pub mod aggregate;
pub mod form;
pub mod mock;
