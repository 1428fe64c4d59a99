use std::fmt;
use std::str::FromStr;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use crate::enums::content_kind::ContentKind;
use crate::errors::{PromptError, PromptResult};

/// Content type as offered to users; `Chat` has no engine support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PromptType {
    Text,
    Image,
    Code,
    Chat,
}

impl PromptType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Code => "code",
            Self::Chat => "chat",
        }
    }

    /// Narrow to a kind the engine has tables for.
    pub fn engine_kind(&self) -> PromptResult<ContentKind> {
        match self {
            Self::Text => Ok(ContentKind::Text),
            Self::Image => Ok(ContentKind::Image),
            Self::Code => Ok(ContentKind::Code),
            Self::Chat => Err(PromptError::unsupported_type(self.as_str())),
        }
    }
}

impl fmt::Display for PromptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptType {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "code" => Ok(Self::Code),
            "chat" => Ok(Self::Chat),
            other => Err(PromptError::unsupported_type(other)),
        }
    }
}
