use serde::{Deserialize, Serialize};

/// Heuristic read of a raw prompt. Depends only on the input text and content kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// 10..=100
    pub strength: u8,
    pub missing_keywords: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Analysis {
    /// Case-insensitive; `needle` is expected in lowercase.
    pub fn has_suggestion_containing(&self, needle: &str) -> bool {
        self.suggestions.iter().any(|s| s.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_lookup_ignores_case() {
        let analysis = Analysis {
            suggestions: vec!["Structure your prompt with clear sections".to_string()],
            ..Default::default()
        };
        assert!(analysis.has_suggestion_containing("structure"));
        assert!(!analysis.has_suggestion_containing("audience"));
    }
}
