pub mod keywords;
pub mod catalog;
pub mod templates;
