use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_output_format")]
    pub format: String,

    #[serde(default = "ConfigHelper::default_show_suggestions")]
    pub show_suggestions: bool,

    #[serde(default = "ConfigHelper::default_show_metadata")]
    pub show_metadata: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ConfigHelper::default_output_format(),
            show_suggestions: ConfigHelper::default_show_suggestions(),
            show_metadata: ConfigHelper::default_show_metadata(),
        }
    }
}
