use serde::{Deserialize, Serialize};
use crate::enums::prompt_length::PromptLength;
use crate::enums::prompt_type::PromptType;

/// Input to every engine operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    pub input: String,

    #[serde(rename = "type")]
    pub prompt_type: PromptType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<PromptLength>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

impl PromptRequest {
    pub fn new(input: impl Into<String>, prompt_type: PromptType) -> Self {
        Self {
            input: input.into(),
            prompt_type,
            category: None,
            tone: None,
            format: None,
            length: None,
            goal: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_length(mut self, length: PromptLength) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    // Blank optional strings count as absent.
    pub(crate) fn category(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }

    pub(crate) fn tone(&self) -> Option<&str> {
        non_blank(self.tone.as_deref())
    }

    pub(crate) fn format(&self) -> Option<&str> {
        non_blank(self.format.as_deref())
    }

    pub(crate) fn goal(&self) -> Option<&str> {
        non_blank(self.goal.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let request: PromptRequest = serde_json::from_str(
            r#"{"input":"sunset over mountains","type":"image","format":"square","length":"long"}"#,
        )
        .unwrap();

        assert_eq!(request.prompt_type, PromptType::Image);
        assert_eq!(request.format(), Some("square"));
        assert_eq!(request.length, Some(PromptLength::Long));
        assert_eq!(request.tone(), None);
    }

    #[test]
    fn missing_type_is_rejected() {
        let parsed = serde_json::from_str::<PromptRequest>(r#"{"input":"hello world"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let parsed = serde_json::from_str::<PromptRequest>(r#"{"input":"hello world","type":"video"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn blank_options_are_ignored() {
        let request = PromptRequest::new("dogs", PromptType::Text).with_tone("   ").with_goal("");
        assert_eq!(request.tone(), None);
        assert_eq!(request.goal(), None);
    }
}
