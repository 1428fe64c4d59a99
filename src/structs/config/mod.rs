pub mod config;
pub mod engine_config;
pub mod output_config;
