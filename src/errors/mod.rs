use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, Error, PartialEq)]
pub enum PromptError {
    // Engine errors
    #[error("Input is too short to {operation}")]
    InputTooShort {
        operation: String,
    },
    #[error("Prompt type '{prompt_type}' is not supported by the enhancement engine")]
    UnsupportedType {
        prompt_type: String,
    },
    #[error("Error {mode} prompt: {reason}")]
    Composition {
        mode: String,
        reason: String,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Validation errors
    #[error("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'")]
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Parser errors
    #[error("Parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl PromptError {
    pub fn input_too_short(operation: &str) -> Self {
        Self::InputTooShort {
            operation: operation.to_string(),
        }
    }

    pub fn unsupported_type(prompt_type: &str) -> Self {
        Self::UnsupportedType {
            prompt_type: prompt_type.to_string(),
        }
    }

    pub fn composition(mode: &str, reason: &str) -> Self {
        Self::Composition {
            mode: mode.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Engine errors are advisory: the caller still gets a usable result string.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InputTooShort { .. } => true,
            Self::UnsupportedType { .. } => true,
            Self::Composition { .. } => true,
            Self::ValidationError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::ConfigurationFileError { .. } => false,
            Self::ParseError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::Composition { .. } => ErrorSeverity::High,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::UnsupportedType { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::InputTooShort { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ParseError { content_type, line_number, reason } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                msg.push_str("\n💡 Check the format and syntax of the input");
                msg
            }
            Self::UnsupportedType { prompt_type } => {
                format!("Prompt type '{}' is not supported by the enhancement engine\n💡 Use one of: text, image, code", prompt_type)
            }
            other => other.to_string(),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for promptp operations
pub type PromptResult<T> = Result<T, PromptError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &PromptError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - adjust the input and retry");
        }
    }
}

impl From<std::io::Error> for PromptError {
    fn from(error: std::io::Error) -> Self {
        PromptError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for PromptError {
    fn from(error: serde_json::Error) -> Self {
        PromptError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for PromptError {
    fn from(error: toml::de::Error) -> Self {
        PromptError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_too_short_message_names_the_operation() {
        let error = PromptError::input_too_short("enhance");
        assert_eq!(error.to_string(), "Input is too short to enhance");
        assert!(error.is_recoverable());
        assert_eq!(error.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn composition_message_uses_mode_prefix() {
        let error = PromptError::composition("rewriting", "empty candidate pool");
        assert_eq!(error.to_string(), "Error rewriting prompt: empty candidate pool");
    }

    #[test]
    fn user_message_includes_suggestion() {
        let error = PromptError::validation_error("engine.tone", "grumpy", "known tone", Some("Use 'professional'"));
        let message = error.user_message();
        assert!(message.contains("engine.tone"));
        assert!(message.contains("💡 Suggestion: Use 'professional'"));
    }

    #[test]
    fn toml_errors_convert_to_parse_errors() {
        let parsed: Result<toml::Value, _> = toml::from_str("engine = [");
        let error: PromptError = parsed.unwrap_err().into();
        assert!(matches!(error, PromptError::ParseError { ref content_type, .. } if content_type == "TOML"));
        assert!(!error.is_recoverable());
    }

    #[test]
    fn severities_are_ordered() {
        assert!(ErrorSeverity::Critical > ErrorSeverity::High);
        assert!(ErrorSeverity::Medium > ErrorSeverity::Low);
    }
}
