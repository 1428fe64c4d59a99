use serde::{Deserialize, Serialize};
use crate::structs::config::engine_config::EngineConfig;
use crate::structs::config::output_config::OutputConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
