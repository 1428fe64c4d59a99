use serde::{Deserialize, Serialize};

/// What a text prompt is trying to get out of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Guide,
    Compare,
    Explain,
    Analyze,
    // Only reachable through category mapping; rendered with the analyze template.
    Persuade,
    Describe,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guide => "guide",
            Self::Compare => "compare",
            Self::Explain => "explain",
            Self::Analyze => "analyze",
            Self::Persuade => "persuade",
            Self::Describe => "describe",
        }
    }
}
