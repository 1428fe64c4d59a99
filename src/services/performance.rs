use crate::constants::keywords::quality_keywords;
use crate::enums::content_kind::ContentKind;
use crate::helpers::text_helper;

const STRUCTURE_BONUS: u32 = 5;
const SPECIFICITY_BONUS: u32 = 5;

/// Rough 0..=100 score for how well a finished prompt is likely to perform.
pub struct PerformanceEstimator;

impl PerformanceEstimator {
    pub fn estimate(prompt: &str, kind: ContentKind) -> u8 {
        let mut score: u32 = match text_helper::word_count(prompt) {
            n if n < 5 => 30,
            n if n < 15 => 50,
            n if n < 30 => 70,
            n if n < 50 => 85,
            _ => 95,
        };

        if text_helper::has_structure(prompt) {
            score += STRUCTURE_BONUS;
        }
        if text_helper::is_specific(prompt) {
            score += SPECIFICITY_BONUS;
        }

        score += match Self::keyword_matches(prompt, kind) {
            n if n >= 5 => 5,
            n if n >= 3 => 3,
            n if n >= 1 => 1,
            _ => 0,
        };

        score.min(100) as u8
    }

    fn keyword_matches(prompt: &str, kind: ContentKind) -> usize {
        let lowercase = prompt.to_lowercase();
        quality_keywords(kind)
            .iter()
            .filter(|keyword| text_helper::contains_ignore_case(&lowercase, keyword))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_plain_prompt_scores_base_band() {
        assert_eq!(PerformanceEstimator::estimate("Write about dogs", ContentKind::Text), 30);
    }

    #[test]
    fn three_keyword_hits_add_three() {
        let prompt = "A detailed, comprehensive and concise summary";
        assert_eq!(PerformanceEstimator::estimate(prompt, ContentKind::Text), 53);
    }

    #[test]
    fn keyword_tables_are_per_kind() {
        let prompt = "An optimized, efficient parser";
        assert_eq!(PerformanceEstimator::estimate(prompt, ContentKind::Code), 31);
        assert_eq!(PerformanceEstimator::estimate(prompt, ContentKind::Text), 30);
    }

    fn words(count: usize) -> String {
        vec!["abcdefghij"; count].join(" ")
    }

    #[test]
    fn word_count_bands() {
        assert_eq!(PerformanceEstimator::estimate(&words(14), ContentKind::Text), 55);
        assert_eq!(PerformanceEstimator::estimate(&words(15), ContentKind::Text), 75);
        assert_eq!(PerformanceEstimator::estimate(&words(29), ContentKind::Text), 75);
        assert_eq!(PerformanceEstimator::estimate(&words(30), ContentKind::Text), 90);
        assert_eq!(PerformanceEstimator::estimate(&words(49), ContentKind::Text), 90);
        assert_eq!(PerformanceEstimator::estimate(&words(50), ContentKind::Text), 100);
    }

    #[test]
    fn five_keyword_hits_beat_three() {
        let five = "detailed comprehensive step-by-step nuanced actionable";
        let three = "detailed comprehensive step-by-step overview guidebook";
        assert_eq!(PerformanceEstimator::estimate(five, ContentKind::Text), 60);
        assert_eq!(PerformanceEstimator::estimate(three, ContentKind::Text), 58);
    }

    #[test]
    fn bonuses_clamp_at_one_hundred() {
        let prompt = format!(
            "Goal: {} detailed comprehensive step-by-step nuanced actionable",
            vec!["x"; 50].join(" ")
        );
        assert_eq!(PerformanceEstimator::estimate(&prompt, ContentKind::Text), 100);
    }
}
