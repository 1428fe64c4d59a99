use once_cell::sync::Lazy;
use regex::Regex;
use crate::constants::catalog::{self, DEFAULT_CODE_LANGUAGE};
use crate::enums::content_kind::ContentKind;
use crate::enums::intent::Intent;
use crate::helpers::text_helper;

static AND_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(.+?)(?:\s+and\s+|&\s*)(.+)").expect("valid conjunction regex"));
static VERSUS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(.+?)(?:\s+vs\.?\s+|\s+versus\s+)(.+)").expect("valid contrast regex"));

static REQUEST_VERBS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:create|generate|write|make|develop|implement|produce|design)\b")
        .expect("valid verb regex")
});
static ARTICLES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:a|an|the)\b").expect("valid article regex"));
static QUALITY_ADJECTIVES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:comprehensive|detailed|step-by-step|complete)\b").expect("valid adjective regex")
});
static IMAGE_FLAGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--ar \d+:\d+|--v \d+\.\d+|--q \d+").expect("valid image flag regex"));
static RESOLUTION_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:high resolution|4k|8k|hd|uhd)\b").expect("valid resolution regex"));
static LANGUAGE_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bin\s+(?:(?:javascript|python|typescript|java|ruby|go|rust|php|swift)\b|c#)")
        .expect("valid language clause regex")
});
static FRAMEWORK_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\busing\s+(?:react|vue|angular|node|express|django|flask|spring)\b")
        .expect("valid framework clause regex")
});
static ORPHAN_COMMAS: Lazy<Regex> = Lazy::new(|| Regex::new(r",(?:\s*,)+").expect("valid comma regex"));

const GUIDE_MARKERS: &[&str] = &["how to", "steps", "guide", "tutorial", "instructions"];
const COMPARE_MARKERS: &[&str] = &["compare", "vs", "versus", "difference"];
const EXPLAIN_MARKERS: &[&str] = &["explain", "what is", "definition", "why is"];

/// Checked in order; the first hit wins.
const KNOWN_LANGUAGES: &[&str] = &[
    "javascript", "typescript", "python", "java", "c#", "c++", "golang", "rust",
    "php", "ruby", "swift", "kotlin", "r", "scala", "dart",
];

pub struct Extractor;

impl Extractor {
    /// Splits "A and B", "A & B", "A vs B" or "A versus B" into its two operands.
    /// Returns an empty list when none of the connectives is present.
    pub fn extract_topics(input: &str) -> Vec<String> {
        let captures = AND_PATTERN
            .captures(input)
            .or_else(|| VERSUS_PATTERN.captures(input));

        match captures {
            Some(caps) => vec![caps[1].trim().to_string(), caps[2].trim().to_string()],
            None => Vec::new(),
        }
    }

    pub fn determine_intent(input: &str) -> Intent {
        let lowercase = input.to_lowercase();
        let mentions = |markers: &[&str]| markers.iter().any(|m| lowercase.contains(m));

        if mentions(GUIDE_MARKERS) {
            Intent::Guide
        } else if mentions(COMPARE_MARKERS) {
            Intent::Compare
        } else if mentions(EXPLAIN_MARKERS) {
            Intent::Explain
        } else {
            Intent::Analyze
        }
    }

    pub fn determine_code_language(input: &str) -> String {
        let lowercase = input.to_lowercase();

        KNOWN_LANGUAGES
            .iter()
            .find(|language| lowercase.contains(*language))
            .map(|language| text_helper::capitalize_first(language))
            .unwrap_or_else(|| DEFAULT_CODE_LANGUAGE.to_string())
    }

    pub fn map_category_to_intent(category: &str, kind: ContentKind) -> Intent {
        catalog::category_intent(category, kind)
    }

    pub fn map_category_to_style(category: &str) -> &'static str {
        catalog::category_style(category)
    }

    pub fn map_category_to_language(category: &str) -> &'static str {
        catalog::category_language(category)
    }

    /// First category, in catalog order, with a keyword hit; otherwise the kind's default.
    pub fn detect_category(input: &str, kind: ContentKind) -> &'static str {
        let lowercase = input.to_lowercase();

        catalog::categories(kind)
            .iter()
            .copied()
            .find(|category| {
                catalog::category_keywords(kind, category)
                    .iter()
                    .any(|keyword| lowercase.contains(keyword))
            })
            .unwrap_or_else(|| catalog::default_category(kind))
    }

    /// Strips request verbs, articles, quality adjectives and kind-specific
    /// noise, leaving the subject of the prompt.
    pub fn extract_core_content(input: &str, kind: ContentKind) -> String {
        let mut core = REQUEST_VERBS.replace_all(input, "").into_owned();
        core = ARTICLES.replace_all(&core, "").into_owned();
        core = QUALITY_ADJECTIVES.replace_all(&core, "").into_owned();

        match kind {
            ContentKind::Image => {
                core = IMAGE_FLAGS.replace_all(&core, "").into_owned();
                core = RESOLUTION_WORDS.replace_all(&core, "").into_owned();
            }
            ContentKind::Code => {
                core = LANGUAGE_CLAUSE.replace_all(&core, "").into_owned();
                core = FRAMEWORK_CLAUSE.replace_all(&core, "").into_owned();
            }
            ContentKind::Text => {}
        }

        // Removing list items like "4K," leaves runs of bare separators behind.
        core = ORPHAN_COMMAS.replace_all(&core, ",").into_owned();
        text_helper::collapse_whitespace(&core)
            .trim_matches(|c: char| c == ',' || c.is_whitespace())
            .to_string()
    }
}
