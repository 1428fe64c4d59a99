pub mod cli;
pub mod prompt_args;
pub mod config;
pub mod prompt_request;
pub mod prompt_response;
pub mod analysis;
pub mod validation_result;
pub mod batch_summary;
