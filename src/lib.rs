//! Rule-based prompt generation, enhancement and rewriting.
//!
//! [`PromptEngine`] is the entry point: it analyzes the raw input, picks an
//! intent, style or language from keyword tables, and fills a per-kind
//! template. Nothing leaves the process.

pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod workers;

pub use enums::compose_mode::ComposeMode;
pub use enums::content_kind::ContentKind;
pub use enums::prompt_length::PromptLength;
pub use enums::prompt_type::PromptType;
pub use errors::{PromptError, PromptResult};
pub use services::prompt_engine::PromptEngine;
pub use structs::analysis::Analysis;
pub use structs::prompt_request::PromptRequest;
pub use structs::prompt_response::{PromptMetadata, PromptResponse};
