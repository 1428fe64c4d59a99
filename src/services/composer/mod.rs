//! Template assembly for generated, enhanced and rewritten prompts.
//!
//! Each content kind has its own module with the three render paths. The
//! functions are pure apart from the random source handed to image generation.

mod code;
mod image;
mod text;

use rand::Rng;
use crate::enums::content_kind::ContentKind;
use crate::enums::prompt_length::PromptLength;
use crate::errors::PromptResult;
use crate::structs::analysis::Analysis;
use crate::structs::prompt_request::PromptRequest;

pub(crate) const DEFAULT_TONE: &str = "professional";

/// Optional dials borrowed from a request; blanks already filtered out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposeParams<'a> {
    pub category: Option<&'a str>,
    pub tone: Option<&'a str>,
    pub format: Option<&'a str>,
    pub length: PromptLength,
    pub goal: Option<&'a str>,
}

impl<'a> ComposeParams<'a> {
    pub fn from_request(request: &'a PromptRequest) -> Self {
        Self {
            category: request.category(),
            tone: request.tone(),
            format: request.format(),
            length: request.length.unwrap_or_default(),
            goal: request.goal(),
        }
    }

    pub(crate) fn tone_or_default(&self) -> &'a str {
        self.tone.unwrap_or(DEFAULT_TONE)
    }
}

pub struct Composer;

impl Composer {
    /// Builds a full prompt from a short seed.
    pub fn generate<R>(kind: ContentKind, input: &str, params: &ComposeParams<'_>, rng: &mut R) -> PromptResult<String>
    where
        R: Rng + ?Sized,
    {
        match kind {
            ContentKind::Text => Ok(text::generate(input, params)),
            ContentKind::Image => image::generate(input, params, rng),
            ContentKind::Code => Ok(code::generate(input, params)),
        }
    }

    /// Augments an existing prompt according to its own analysis.
    pub fn enhance(kind: ContentKind, input: &str, analysis: &Analysis, params: &ComposeParams<'_>) -> String {
        let prompt = input.trim();
        match kind {
            ContentKind::Text => text::enhance(prompt, analysis, params),
            ContentKind::Image => image::enhance(prompt, analysis, params),
            ContentKind::Code => code::enhance(prompt, analysis, params),
        }
    }

    /// Restates the core content under the requested tone, format and length.
    pub fn rewrite(kind: ContentKind, input: &str, params: &ComposeParams<'_>) -> String {
        match kind {
            ContentKind::Text => text::rewrite(input, params),
            ContentKind::Image => image::rewrite(input, params),
            ContentKind::Code => code::rewrite(input, params),
        }
    }
}

/// Core content for rewriting, falling back to the trimmed input when
/// stripping leaves nothing.
pub(crate) fn core_or_input(input: &str, kind: ContentKind) -> String {
    let core = crate::services::extractor::Extractor::extract_core_content(input, kind);
    if core.is_empty() {
        input.trim().to_string()
    } else {
        core
    }
}
