use serde::{Deserialize, Serialize};
use crate::errors::PromptError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_areas: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_performance: Option<u8>,
}

/// Outcome of a facade call. A set `error` with `result` echoing the input
/// means the call failed softly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponse {
    pub result: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PromptMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PromptResponse {
    pub fn success(result: String, metadata: PromptMetadata) -> Self {
        Self {
            result,
            metadata: Some(metadata),
            ..Default::default()
        }
    }

    pub fn failure(original_input: &str, error: &PromptError) -> Self {
        Self {
            result: original_input.to_string(),
            error: Some(error.to_string()),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn estimated_performance(&self) -> Option<u8> {
        self.metadata.as_ref().and_then(|m| m.estimated_performance)
    }
}
