pub mod about;
pub mod config_error;
pub mod not_found;
