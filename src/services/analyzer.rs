use crate::constants::keywords::{
    enhancement_hints, quality_keywords, KEYWORD_SUGGESTION_PREFIX, LENGTH_AREA, LENGTH_SUGGESTION,
    MAX_MISSING_KEYWORDS, MAX_SUGGESTIONS, QUALITY_AREA, STRUCTURE_AREA, STRUCTURE_SUGGESTION,
};
use crate::enums::content_kind::ContentKind;
use crate::helpers::text_helper;
use crate::structs::analysis::Analysis;

const MIN_STRENGTH: u32 = 10;
const MAX_STRENGTH: u32 = 100;
const STRUCTURE_BONUS: u32 = 15;
const SPECIFICITY_BONUS: u32 = 15;
const DETAIL_WORD_THRESHOLD: usize = 15;

pub struct Analyzer;

impl Analyzer {
    pub fn analyze(input: &str, kind: ContentKind) -> Analysis {
        let lowercase = input.to_lowercase();
        let word_count = text_helper::word_count(input);
        let has_structure = text_helper::has_structure(input);

        let strength = Self::strength(input);

        let mut improvement_areas = Vec::new();
        let mut suggestions = Vec::new();

        if word_count < DETAIL_WORD_THRESHOLD {
            improvement_areas.push(LENGTH_AREA.to_string());
            suggestions.push(LENGTH_SUGGESTION.to_string());
        }

        if !has_structure {
            improvement_areas.push(STRUCTURE_AREA.to_string());
            suggestions.push(STRUCTURE_SUGGESTION.to_string());
        }

        let missing_keywords = Self::missing_keywords(&lowercase, kind);
        if !missing_keywords.is_empty() {
            improvement_areas.push(QUALITY_AREA.to_string());
            suggestions.push(format!("{}{}", KEYWORD_SUGGESTION_PREFIX, missing_keywords.join(", ")));
        }

        for hint in enhancement_hints(kind) {
            if Self::hint_is_covered(&lowercase, hint.text) {
                continue;
            }
            if !improvement_areas.iter().any(|area| area == hint.tag) {
                improvement_areas.push(hint.tag.to_string());
            }
            suggestions.push(hint.text.to_string());
        }

        suggestions.truncate(MAX_SUGGESTIONS);

        log::debug!(
            "Analyzed {} prompt: words={}, strength={}, areas={:?}",
            kind, word_count, strength, improvement_areas
        );

        Analysis {
            strength,
            missing_keywords,
            improvement_areas,
            suggestions,
        }
    }

    /// Word-count band plus structure and specificity bonuses, clamped to 10..=100.
    pub fn strength(input: &str) -> u8 {
        let base = match text_helper::word_count(input) {
            n if n < 5 => 10,
            n if n < 15 => 30,
            n if n < 30 => 50,
            n if n < 50 => 70,
            _ => 90,
        };

        let mut strength: u32 = base;
        if text_helper::has_structure(input) {
            strength += STRUCTURE_BONUS;
        }
        if text_helper::is_specific(input) {
            strength += SPECIFICITY_BONUS;
        }

        strength.clamp(MIN_STRENGTH, MAX_STRENGTH) as u8
    }

    fn missing_keywords(lowercase: &str, kind: ContentKind) -> Vec<String> {
        quality_keywords(kind)
            .iter()
            .filter(|keyword| !text_helper::contains_ignore_case(lowercase, keyword))
            .take(MAX_MISSING_KEYWORDS)
            .map(|keyword| keyword.to_string())
            .collect()
    }

    // A hint counts as covered when any of its words longer than four
    // characters already occurs in the prompt.
    fn hint_is_covered(lowercase: &str, hint: &str) -> bool {
        hint.to_lowercase()
            .split(' ')
            .any(|word| word.chars().count() > 4 && lowercase.contains(word))
    }
}
