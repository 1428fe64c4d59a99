use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EngineConfig {
    #[serde(default = "ConfigHelper::default_prompt_type")]
    pub default_type: String,

    #[serde(default)]
    pub tone: Option<String>,

    #[serde(default = "ConfigHelper::default_length")]
    pub length: String,

    /// Pins the image-prompt random picks when set.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_type: ConfigHelper::default_prompt_type(),
            tone: None,
            length: ConfigHelper::default_length(),
            seed: None,
        }
    }
}
