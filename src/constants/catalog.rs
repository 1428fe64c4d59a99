use crate::enums::content_kind::ContentKind;
use crate::enums::intent::Intent;
use crate::enums::prompt_length::PromptLength;
use crate::enums::tone::Tone;

pub const DEFAULT_IMAGE_STYLE: &str = "high-quality image";
pub const DEFAULT_CODE_LANGUAGE: &str = "JavaScript";
pub const DEFAULT_ASPECT_RATIO: &str = "--ar 16:9";
pub const DEFAULT_TEXT_FORMAT: &str = "a well-structured document";
pub const DEFAULT_TONE_ADJECTIVES: &[&str] = &["well-written", "informative"];

const TEXT_CATEGORIES: &[&str] = &[
    "blog_post", "social_media", "email", "academic",
    "creative_writing", "marketing", "technical", "storytelling",
];

const IMAGE_CATEGORIES: &[&str] = &[
    "photography", "illustration", "3d_render", "concept_art",
    "product_design", "ui_design", "character", "landscape",
];

const CODE_CATEGORIES: &[&str] = &[
    "function", "algorithm", "api", "frontend",
    "backend", "database", "refactor", "optimization",
];

const TEXT_FORMATS: &[&str] = &["paragraph", "bullet_points", "numbered_list", "qa_format", "script"];
const IMAGE_FORMATS: &[&str] = &["portrait", "landscape", "square", "panoramic", "close_up"];
const CODE_FORMATS: &[&str] = &["function", "class", "module", "script", "api_endpoint"];

pub fn categories(kind: ContentKind) -> &'static [&'static str] {
    match kind {
        ContentKind::Text => TEXT_CATEGORIES,
        ContentKind::Image => IMAGE_CATEGORIES,
        ContentKind::Code => CODE_CATEGORIES,
    }
}

pub fn formats(kind: ContentKind) -> &'static [&'static str] {
    match kind {
        ContentKind::Text => TEXT_FORMATS,
        ContentKind::Image => IMAGE_FORMATS,
        ContentKind::Code => CODE_FORMATS,
    }
}

pub fn tones() -> Vec<&'static str> {
    Tone::ALL.iter().map(|tone| tone.as_str()).collect()
}

pub fn default_category(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Text => "blog_post",
        ContentKind::Image => "concept_art",
        ContentKind::Code => "function",
    }
}

pub fn category_keywords(kind: ContentKind, category: &str) -> &'static [&'static str] {
    match (kind, category) {
        (ContentKind::Text, "blog_post") => &["blog", "post", "article", "write"],
        (ContentKind::Text, "social_media") => &["social", "post", "facebook", "twitter", "instagram"],
        (ContentKind::Text, "email") => &["email", "newsletter", "message"],
        (ContentKind::Text, "academic") => &["research", "paper", "academic", "study"],
        (ContentKind::Text, "creative_writing") => &["story", "fiction", "creative", "narrative"],
        (ContentKind::Text, "marketing") => &["marketing", "advertisement", "promotion", "ad", "campaign"],
        (ContentKind::Text, "technical") => &["technical", "manual", "documentation", "guide"],
        (ContentKind::Text, "storytelling") => &["story", "storytelling", "tale", "narrative"],

        (ContentKind::Image, "photography") => &["photo", "photographic", "photograph", "realistic"],
        (ContentKind::Image, "illustration") => &["illustration", "illustrate", "drawing", "sketch"],
        (ContentKind::Image, "3d_render") => &["3d", "render", "model", "cgi"],
        (ContentKind::Image, "concept_art") => &["concept", "art", "conceptual", "fantasy"],
        (ContentKind::Image, "product_design") => &["product", "design", "package", "mockup"],
        (ContentKind::Image, "ui_design") => &["ui", "interface", "app", "website", "screen"],
        (ContentKind::Image, "character") => &["character", "person", "portrait", "figure"],
        (ContentKind::Image, "landscape") => &["landscape", "scenery", "nature", "environment"],

        (ContentKind::Code, "function") => &["function", "method", "routine", "calculate"],
        (ContentKind::Code, "algorithm") => &["algorithm", "compute", "process", "solve"],
        (ContentKind::Code, "api") => &["api", "endpoint", "service", "request", "response"],
        (ContentKind::Code, "frontend") => &["frontend", "ui", "interface", "component", "react", "vue"],
        (ContentKind::Code, "backend") => &["backend", "server", "nodejs", "express", "api"],
        (ContentKind::Code, "database") => &["database", "db", "sql", "query", "storage"],
        (ContentKind::Code, "refactor") => &["refactor", "optimize", "clean", "improve"],
        (ContentKind::Code, "optimization") => &["optimize", "performance", "speed", "efficient"],

        _ => &[],
    }
}

/// Text categories bias intent; other kinds always analyze.
pub fn category_intent(category: &str, kind: ContentKind) -> Intent {
    if kind != ContentKind::Text {
        return Intent::Analyze;
    }

    match category {
        "blog_post" => Intent::Analyze,
        "social_media" | "email" | "marketing" => Intent::Persuade,
        "academic" | "technical" => Intent::Explain,
        "creative_writing" | "storytelling" => Intent::Describe,
        _ => Intent::Analyze,
    }
}

pub fn category_style(category: &str) -> &'static str {
    match category {
        "photography" => "photorealistic",
        "illustration" => "digital illustration",
        "3d_render" => "3D rendering",
        "concept_art" => "concept art",
        "product_design" => "professional product photography",
        "ui_design" => "clean UI mockup",
        "character" => "detailed character design",
        "landscape" => "panoramic landscape photography",
        _ => DEFAULT_IMAGE_STYLE,
    }
}

pub fn category_language(category: &str) -> &'static str {
    match category {
        "function" | "api" => "JavaScript",
        "algorithm" => "Python",
        "frontend" | "refactor" => "TypeScript",
        "backend" => "Node.js",
        "database" => "SQL",
        "optimization" => "C++",
        _ => DEFAULT_CODE_LANGUAGE,
    }
}

pub fn text_format_description(format: &str) -> &'static str {
    match format {
        "paragraph" => "flowing paragraphs with logical transitions",
        "bullet_points" => "concise bullet points for quick scanning",
        "numbered_list" => "a sequential numbered list",
        "qa_format" => "a question-and-answer format",
        "script" => "a conversational script",
        _ => DEFAULT_TEXT_FORMAT,
    }
}

pub fn aspect_ratio(format: &str) -> &'static str {
    match format {
        "portrait" => "--ar 3:4",
        "landscape" => "--ar 16:9",
        "square" => "--ar 1:1",
        "panoramic" => "--ar 2:1",
        "close_up" => "--ar 4:3",
        _ => DEFAULT_ASPECT_RATIO,
    }
}

pub fn length_descriptor(length: PromptLength, kind: ContentKind) -> &'static str {
    match (kind, length) {
        (ContentKind::Text, PromptLength::Short) => "concise, to-the-point",
        (ContentKind::Text, PromptLength::Medium) => "comprehensive but focused",
        (ContentKind::Text, PromptLength::Long) => "in-depth, exhaustive",
        (ContentKind::Image, PromptLength::Short) => "simple, minimalist",
        (ContentKind::Image, PromptLength::Medium) => "detailed",
        (ContentKind::Image, PromptLength::Long) => "extremely detailed, intricate",
        (ContentKind::Code, PromptLength::Short) => "concise, focused on core functionality",
        (ContentKind::Code, PromptLength::Medium) => "balanced with clear documentation",
        (ContentKind::Code, PromptLength::Long) => "comprehensive with extensive documentation and error handling",
    }
}

/// Tone adjectives with the fallback used for unknown tone names.
pub fn tone_adjectives(tone: &str) -> &'static [&'static str] {
    Tone::parse(tone).map_or(DEFAULT_TONE_ADJECTIVES, |tone| tone.adjectives())
}

pub fn tone_mood(tone: &str) -> &'static str {
    Tone::parse(tone).map_or("balanced", |tone| tone.mood())
}

pub fn tone_visuals(tone: &str) -> &'static str {
    Tone::parse(tone).map_or("balanced lighting, professional quality", |tone| tone.visuals())
}

pub fn tone_code_style(tone: &str) -> &'static str {
    Tone::parse(tone).map_or("professional", |tone| tone.code_style())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_keywords() {
        for kind in ContentKind::ALL {
            for category in categories(kind) {
                assert!(!category_keywords(kind, category).is_empty(), "{} / {}", kind, category);
            }
        }
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        assert_eq!(category_style("vaporwave"), DEFAULT_IMAGE_STYLE);
        assert_eq!(category_language("shell"), DEFAULT_CODE_LANGUAGE);
        assert_eq!(category_intent("poetry", ContentKind::Text), Intent::Analyze);
        assert_eq!(aspect_ratio("banner"), DEFAULT_ASPECT_RATIO);
        assert_eq!(text_format_description("tweet"), DEFAULT_TEXT_FORMAT);
        assert_eq!(tone_adjectives("grumpy"), DEFAULT_TONE_ADJECTIVES);
        assert_eq!(tone_mood("grumpy"), "balanced");
        assert_eq!(tone_code_style("grumpy"), "professional");
    }

    #[test]
    fn category_intent_only_applies_to_text() {
        assert_eq!(category_intent("academic", ContentKind::Text), Intent::Explain);
        assert_eq!(category_intent("academic", ContentKind::Code), Intent::Analyze);
        assert_eq!(category_intent("marketing", ContentKind::Text), Intent::Persuade);
    }

    #[test]
    fn square_format_maps_to_one_to_one() {
        assert_eq!(aspect_ratio("square"), "--ar 1:1");
        assert_eq!(aspect_ratio("portrait"), "--ar 3:4");
    }
}
