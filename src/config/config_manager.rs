use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, SAMPLE_CONFIG};
use crate::enums::output_format::OutputFormat;
use crate::enums::prompt_length::PromptLength;
use crate::enums::prompt_type::PromptType;
use crate::enums::tone::Tone;
use crate::errors::{PromptError, PromptResult};
use crate::structs::config::config::Config;
use crate::structs::validation_result::ValidationResult;

pub struct ConfigManager;

impl ConfigManager {
    /// `$PROMPTP_CONFIG` when set, else `~/.promptp/config.toml`.
    pub fn config_path() -> PromptResult<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| PromptError::config_error(
                "Could not determine the home directory",
                None,
                Some(&format!("Set {} to the config file path", CONFIG_PATH_ENV)),
            ))
    }

    pub fn load() -> PromptResult<Config> {
        Self::load_from(&Self::config_path()?)
    }

    /// A missing file is not an error; defaults apply.
    pub fn load_from(path: &Path) -> PromptResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::debug!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| PromptError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config() -> PromptResult<PathBuf> {
        let path = Self::config_path()?;
        Self::create_sample_config_at(&path)?;
        Ok(path)
    }

    /// Refuses to overwrite an existing file.
    pub fn create_sample_config_at(path: &Path) -> PromptResult<()> {
        if path.exists() {
            return Err(PromptError::ConfigurationFileError {
                path: path.display().to_string(),
                reason: "file already exists".to_string(),
            });
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        match config.engine.default_type.parse::<PromptType>() {
            Ok(PromptType::Chat) => errors.push(PromptError::validation_error(
                "engine.default_type",
                "chat",
                "text, image or code",
                Some("The engine has no chat tables; pick another default type"),
            )),
            Ok(_) => {}
            Err(_) => errors.push(PromptError::validation_error(
                "engine.default_type",
                &config.engine.default_type,
                "text, image or code",
                None,
            )),
        }

        if let Some(tone) = &config.engine.tone {
            if Tone::parse(tone).is_none() {
                errors.push(PromptError::validation_error(
                    "engine.tone",
                    tone,
                    "known tone",
                    Some("Run 'promptp catalog' to list tones"),
                ));
            }
        }

        if PromptLength::parse(&config.engine.length).is_none() {
            errors.push(PromptError::validation_error(
                "engine.length",
                &config.engine.length,
                "short, medium or long",
                None,
            ));
        }

        if OutputFormat::parse(&config.output.format).is_none() {
            errors.push(PromptError::validation_error(
                "output.format",
                &config.output.format,
                "text or json",
                None,
            ));
        }

        if config.engine.seed.is_some() {
            warnings.push("engine.seed is set: image prompts will repeat for identical input".to_string());
        }

        ValidationResult::from_findings(errors, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn sample_config_round_trips_and_validates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        ConfigManager::create_sample_config_at(&path).unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config.engine.tone.as_deref(), Some("professional"));
        assert!(ConfigManager::validate_config(&config).is_valid);

        assert!(ConfigManager::create_sample_config_at(&path).is_err());
    }

    #[test]
    fn bad_values_are_reported_per_field() {
        let mut config = Config::default();
        config.engine.default_type = "chat".to_string();
        config.engine.tone = Some("grumpy".to_string());
        config.output.format = "yaml".to_string();

        let result = ConfigManager::validate_config(&config);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
    }
}
