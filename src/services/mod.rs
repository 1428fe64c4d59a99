pub mod analyzer;
pub mod composer;
pub mod extractor;
pub mod performance;
pub mod prompt_engine;
