use rand::Rng;
use crate::constants::catalog::{aspect_ratio, length_descriptor, tone_mood, tone_visuals, DEFAULT_ASPECT_RATIO};
use crate::constants::templates::{
    IMAGE_DEFAULT_STYLE_KEYWORDS, IMAGE_DETAILS, IMAGE_FIXED_LIGHTING, IMAGE_PERSPECTIVES,
    IMAGE_QUALITY_SUFFIX, IMAGE_STYLES, IMAGE_TECHNICAL_KEYWORDS, IMAGE_VERSION_FLAGS,
};
use crate::enums::content_kind::ContentKind;
use crate::errors::PromptResult;
use crate::helpers::random_picker::{pick_many, pick_one};
use crate::services::composer::{core_or_input, ComposeParams};
use crate::services::extractor::Extractor;
use crate::structs::analysis::Analysis;

const DETAIL_COUNT: usize = 2;

pub(super) fn generate<R>(input: &str, params: &ComposeParams<'_>, rng: &mut R) -> PromptResult<String>
where
    R: Rng + ?Sized,
{
    let subject = input.trim();

    let style = match params.category {
        Some(category) => Extractor::map_category_to_style(category),
        None => pick_one(IMAGE_STYLES, rng)?,
    };

    let mood_lighting = format!("{} lighting", tone_mood(params.tone_or_default()));
    let lighting_pool: Vec<&str> = std::iter::once(mood_lighting.as_str())
        .chain(IMAGE_FIXED_LIGHTING.iter().copied())
        .collect();

    let lighting = pick_one(&lighting_pool, rng)?;
    let perspective = pick_one(IMAGE_PERSPECTIVES, rng)?;
    let details = pick_many(IMAGE_DETAILS, DETAIL_COUNT, rng)?.join(", ");

    let ratio = params.format.map_or(DEFAULT_ASPECT_RATIO, aspect_ratio);
    let purpose = params
        .goal
        .map(|goal| format!("designed to {}, ", goal))
        .unwrap_or_default();

    Ok(format!(
        "Create a {style} image of {subject}, {purpose}with {lighting}, {perspective} perspective, {details}, {IMAGE_QUALITY_SUFFIX} {ratio} {IMAGE_VERSION_FLAGS}"
    ))
}

pub(super) fn enhance(prompt: &str, analysis: &Analysis, params: &ComposeParams<'_>) -> String {
    let mut enhanced = prompt.to_string();

    if analysis.has_suggestion_containing("style") || params.tone.is_some() {
        let style_keywords = params.tone.map_or(IMAGE_DEFAULT_STYLE_KEYWORDS, tone_visuals);
        enhanced = format!("{}, {}", enhanced, style_keywords);
    }

    if analysis.has_suggestion_containing("technical") {
        enhanced = format!("{}, {}", enhanced, IMAGE_TECHNICAL_KEYWORDS);
    }

    if let Some(format) = params.format {
        enhanced = format!("{} {}", enhanced, aspect_ratio(format));
    }

    if analysis.has_suggestion_containing("quality") || !enhanced.contains("--q") {
        enhanced = format!("{} {}", enhanced, IMAGE_VERSION_FLAGS);
    }

    enhanced
}

pub(super) fn rewrite(input: &str, params: &ComposeParams<'_>) -> String {
    let content = core_or_input(input, ContentKind::Image);
    let detail = length_descriptor(params.length, ContentKind::Image);
    let visuals = tone_visuals(params.tone_or_default());
    let ratio = params.format.map_or(DEFAULT_ASPECT_RATIO, aspect_ratio);

    format!("Create a {detail} image of {content}, with {visuals}, perfect composition {ratio} {IMAGE_VERSION_FLAGS}")
}
