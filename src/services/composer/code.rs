use crate::constants::catalog::{length_descriptor, tone_code_style};
use crate::constants::templates::{CODE_ENHANCE_CHECKLIST, CODE_REQUIREMENTS};
use crate::enums::content_kind::ContentKind;
use crate::services::composer::{core_or_input, ComposeParams};
use crate::services::extractor::Extractor;
use crate::structs::analysis::Analysis;

pub(super) fn generate(input: &str, params: &ComposeParams<'_>) -> String {
    let seed = input.trim();

    let language = match params.category {
        Some(category) => Extractor::map_category_to_language(category).to_string(),
        None => Extractor::determine_code_language(seed),
    };
    let code_style = tone_code_style(params.tone_or_default());

    let format_clause = params
        .format
        .map(|format| format!("Implement this as a {}. ", format))
        .unwrap_or_default();
    let purpose = params
        .goal
        .map(|goal| format!("The code should be optimized for {}. ", goal))
        .unwrap_or_default();

    format!(
        "Write {code_style} {language} code that implements {seed}. {format_clause}{purpose}\n\n{CODE_REQUIREMENTS}\n\nThe code should follow modern {language} conventions and best practices, be maintainable, and scalable for future enhancements."
    )
}

pub(super) fn enhance(prompt: &str, analysis: &Analysis, params: &ComposeParams<'_>) -> String {
    let mut enhanced = prompt.to_string();

    if analysis.has_suggestion_containing("requirements") {
        enhanced = format!("{}\n\n{}", enhanced, CODE_ENHANCE_CHECKLIST);
    }

    if let Some(format) = params.format {
        enhanced = format!("{}\n\nImplement this using {}", enhanced, format);
    }

    if let Some(tone) = params.tone {
        enhanced = format!(
            "Create {} code that implements the following requirements:\n\n{}",
            tone_code_style(tone),
            enhanced
        );
    }

    enhanced
}

/// The language comes from `format` when given, else from the full input,
/// since stripping removes the "in <language>" clause from the core.
pub(super) fn rewrite(input: &str, params: &ComposeParams<'_>) -> String {
    let content = core_or_input(input, ContentKind::Code);
    let code_style = tone_code_style(params.tone_or_default());
    let complexity = length_descriptor(params.length, ContentKind::Code);

    let language = match params.format {
        Some(format) => format.to_string(),
        None => Extractor::determine_code_language(input),
    };

    format!("Write {code_style} {language} code that is {complexity} to implement: {content}")
}
