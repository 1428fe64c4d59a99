use crate::enums::content_kind::ContentKind;

/// A type-specific improvement hint and the tag reported when it is unmet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnhancementHint {
    pub tag: &'static str,
    pub text: &'static str,
}

pub const LENGTH_AREA: &str = "length";
pub const STRUCTURE_AREA: &str = "structure";
pub const QUALITY_AREA: &str = "quality_indicators";

pub const LENGTH_SUGGESTION: &str = "Add more details to get better results";
pub const STRUCTURE_SUGGESTION: &str = "Structure your prompt with clear sections";
pub const KEYWORD_SUGGESTION_PREFIX: &str = "Add quality indicators like: ";

pub const MAX_MISSING_KEYWORDS: usize = 3;
pub const MAX_SUGGESTIONS: usize = 4;

const TEXT_KEYWORDS: &[&str] = &[
    "detailed", "comprehensive", "step-by-step", "nuanced",
    "evidence-based", "actionable", "concise", "well-structured",
    "comparative", "analytical", "balanced perspective",
];

const IMAGE_KEYWORDS: &[&str] = &[
    "photorealistic", "high resolution", "detailed", "dramatic lighting",
    "vibrant", "cinematic", "4K", "ultraHD", "professional", "high contrast",
    "depth of field", "rule of thirds", "golden ratio", "symmetrical",
];

const CODE_KEYWORDS: &[&str] = &[
    "optimized", "efficient", "maintainable", "scalable", "well-documented",
    "robust", "clean", "modular", "tested", "secure", "performant",
    "reusable", "object-oriented", "functional", "concurrent",
];

const TEXT_HINTS: &[EnhancementHint] = &[
    EnhancementHint { tag: "audience", text: "Add specific details about the target audience and their needs" },
    EnhancementHint { tag: "tone", text: "Include clear instructions about the desired tone (formal, conversational, etc.)" },
    EnhancementHint { tag: "format", text: "Specify the preferred output format (bullet points, paragraphs, etc.)" },
    EnhancementHint { tag: "examples", text: "Request examples or analogies to illustrate key points" },
    EnhancementHint { tag: "context", text: "Add context about how the information will be used" },
    EnhancementHint { tag: "sources", text: "Request citations or credible sources where relevant" },
];

const IMAGE_HINTS: &[EnhancementHint] = &[
    EnhancementHint { tag: "subject", text: "Specify the subject's position, expression, and action" },
    EnhancementHint { tag: "environment", text: "Define the environment/setting with details on lighting and atmosphere" },
    EnhancementHint { tag: "style", text: "Include style references (photorealistic, anime, oil painting, etc.)" },
    EnhancementHint { tag: "technical", text: "Add technical parameters (camera angle, focal length, depth of field)" },
    EnhancementHint { tag: "palette", text: "Request specific color palette or mood" },
    EnhancementHint { tag: "aspect_ratio", text: "Specify aspect ratio and quality parameters" },
];

const CODE_HINTS: &[EnhancementHint] = &[
    EnhancementHint { tag: "language", text: "Specify the programming language and version" },
    EnhancementHint { tag: "error_handling", text: "Include requirements for error handling and edge cases" },
    EnhancementHint { tag: "documentation", text: "Request code comments and documentation" },
    EnhancementHint { tag: "performance", text: "Define performance expectations or constraints" },
    EnhancementHint { tag: "dependencies", text: "Specify any libraries or frameworks to use/avoid" },
    EnhancementHint { tag: "tests", text: "Request unit tests or examples of usage" },
];

/// Quality keywords in table order; order decides which ones are reported missing.
pub fn quality_keywords(kind: ContentKind) -> &'static [&'static str] {
    match kind {
        ContentKind::Text => TEXT_KEYWORDS,
        ContentKind::Image => IMAGE_KEYWORDS,
        ContentKind::Code => CODE_KEYWORDS,
    }
}

pub fn enhancement_hints(kind: ContentKind) -> &'static [EnhancementHint] {
    match kind {
        ContentKind::Text => TEXT_HINTS,
        ContentKind::Image => IMAGE_HINTS,
        ContentKind::Code => CODE_HINTS,
    }
}

/// Recommended section order for a well-formed prompt of this kind.
pub fn structure_outline(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Text => "Start with context → Present specific requirements → End with preferred format",
        ContentKind::Image => "Subject details → Setting/environment → Style/medium → Technical parameters → Quality modifiers",
        ContentKind::Code => "Problem statement → Specific requirements → Edge cases → Expected output → Additional requirements",
    }
}
