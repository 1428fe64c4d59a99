use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ComposeMode {
    Generate,
    Enhance,
    Rewrite,
}

impl ComposeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Enhance => "enhance",
            Self::Rewrite => "rewrite",
        }
    }

    /// Gerund used in wrapped error messages ("Error enhancing prompt: ...").
    pub fn gerund(&self) -> &'static str {
        match self {
            Self::Generate => "generating",
            Self::Enhance => "enhancing",
            Self::Rewrite => "rewriting",
        }
    }

    /// Operation phrase used in the too-short validation message.
    pub fn too_short_operation(&self) -> &'static str {
        match self {
            Self::Generate => "generate a meaningful prompt",
            Self::Enhance => "enhance",
            Self::Rewrite => "rewrite",
        }
    }
}

impl Default for ComposeMode {
    fn default() -> Self {
        ComposeMode::Enhance
    }
}
