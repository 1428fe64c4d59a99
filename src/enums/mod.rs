pub mod commands;
pub mod prompt_type;
pub mod content_kind;
pub mod tone;
pub mod prompt_length;
pub mod intent;
pub mod compose_mode;
pub mod output_format;
