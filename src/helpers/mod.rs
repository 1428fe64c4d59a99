pub mod config_helper;
pub mod text_helper;
pub mod random_picker;
