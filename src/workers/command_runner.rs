use std::fs;
use std::path::Path;
use std::time::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "parallel-processing")]
use rayon::prelude::*;
use serde::Serialize;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::compose_mode::ComposeMode;
use crate::enums::content_kind::ContentKind;
use crate::enums::output_format::OutputFormat;
use crate::enums::prompt_length::PromptLength;
use crate::enums::prompt_type::PromptType;
use crate::errors::{PromptError, PromptResult};
use crate::logger::response_printer::ResponsePrinter;
use crate::services::prompt_engine::PromptEngine;
use crate::structs::batch_summary::BatchSummary;
use crate::structs::config::config::Config;
use crate::structs::prompt_args::PromptArgs;
use crate::structs::prompt_request::PromptRequest;
use crate::structs::prompt_response::PromptResponse;

pub struct CommandRunner {
    start_time: Option<Instant>,
    config: Option<Config>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
            config: None,
        }
    }

    /// Uses `config` instead of reading the config file.
    pub fn with_config(config: Config) -> Self {
        Self {
            start_time: None,
            config: Some(config),
        }
    }

    pub fn run_command(&mut self, command: Commands) -> PromptResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Generate { args } => self.compose_command(ComposeMode::Generate, args),
            Commands::Enhance { args } => self.compose_command(ComposeMode::Enhance, args),
            Commands::Rewrite { args } => self.compose_command(ComposeMode::Rewrite, args),
            Commands::Analyze { input, prompt_type, json } => self.analyze_command(input, prompt_type, json),
            Commands::Batch { file, mode, prompt_type, seed, json } => {
                self.batch_command(&file, mode, prompt_type, seed, json)
            }
            Commands::Catalog { prompt_type } => self.catalog_command(prompt_type),
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn compose_command(&mut self, mode: ComposeMode, args: PromptArgs) -> PromptResult<()> {
        let config = self.config()?.clone();
        let request = Self::build_request(&args, &config)?;
        let engine = Self::engine(args.seed.or(config.engine.seed));

        log::debug!("🛠️  Running {} for a {} prompt", mode.as_str(), request.prompt_type);
        let response = engine.respond(mode, &request);

        if Self::wants_json(args.json, &config) {
            Self::print_json(&response)?;
        } else {
            ResponsePrinter::print_response(&response, &config.output);
        }

        Ok(())
    }

    fn analyze_command(&mut self, input: String, prompt_type: Option<PromptType>, json: bool) -> PromptResult<()> {
        let config = self.config()?.clone();
        let prompt_type = Self::resolve_type(prompt_type, &config)?;
        let request = PromptRequest::new(input, prompt_type);

        let analysis = PromptEngine::new().analyze_prompt(&request)?;

        if Self::wants_json(json, &config) {
            Self::print_json(&analysis)?;
        } else {
            ResponsePrinter::print_analysis(&analysis, prompt_type.engine_kind()?);
        }

        Ok(())
    }

    fn batch_command(
        &mut self,
        file: &Path,
        mode: ComposeMode,
        prompt_type: Option<PromptType>,
        seed: Option<u64>,
        json: bool,
    ) -> PromptResult<()> {
        let config = self.config()?.clone();
        let prompt_type = Self::resolve_type(prompt_type, &config)?;

        let content = fs::read_to_string(file).map_err(|e| {
            PromptError::system_error(&format!("reading {}", file.display()), &e.to_string())
        })?;

        let requests: Vec<PromptRequest> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let mut request = PromptRequest::new(line, prompt_type);
                request.tone = config.engine.tone.clone();
                request.length = PromptLength::parse(&config.engine.length);
                request
            })
            .collect();

        log::info!("📦 Processing {} prompts from {} ({})", requests.len(), file.display(), mode.as_str());

        let engine = PromptEngine::new();
        let responses = Self::run_batch(&engine, mode, &requests, seed.or(config.engine.seed));
        let summary = BatchSummary::from_responses(mode, &responses);

        if Self::wants_json(json, &config) {
            Self::print_json(&serde_json::json!({
                "results": responses,
                "summary": summary,
            }))?;
        } else {
            for (index, response) in responses.iter().enumerate() {
                println!("\n#{} {}", index + 1, requests[index].input);
                ResponsePrinter::print_response(response, &config.output);
            }
            summary.print_summary();
        }

        Ok(())
    }

    /// Each item gets its own seeded RNG, so results do not depend on scheduling.
    pub fn run_batch(
        engine: &PromptEngine,
        mode: ComposeMode,
        requests: &[PromptRequest],
        seed: Option<u64>,
    ) -> Vec<PromptResponse> {
        let respond = |(index, request): (usize, &PromptRequest)| match seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
                engine.respond_with(mode, request, &mut rng)
            }
            None => engine.respond_with(mode, request, &mut rand::thread_rng()),
        };

        #[cfg(feature = "parallel-processing")]
        let responses = requests.par_iter().enumerate().map(respond).collect();

        #[cfg(not(feature = "parallel-processing"))]
        let responses = requests.iter().enumerate().map(respond).collect();

        responses
    }

    fn catalog_command(&self, prompt_type: Option<PromptType>) -> PromptResult<()> {
        let kinds = match prompt_type {
            Some(prompt_type) => vec![prompt_type.engine_kind()?],
            None => ContentKind::ALL.to_vec(),
        };

        ResponsePrinter::print_catalog(&kinds);
        Ok(())
    }

    fn init_command(&self) -> PromptResult<()> {
        log::info!("🚀 Initializing promptp configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("📝 Edit {} to change the defaults.", path.display());
                log::info!("🔧 Run 'promptp validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&mut self) -> PromptResult<()> {
        log::info!("🔍 Validating configuration...");
        let config = self.config()?;
        let result = ConfigManager::validate_config(config);
        result.print_summary();

        if result.is_valid {
            Ok(())
        } else {
            Err(PromptError::config_error(
                &format!("{} invalid setting(s)", result.errors.len()),
                None,
                Some("Fix the fields listed above"),
            ))
        }
    }

    fn config(&mut self) -> PromptResult<&Config> {
        if self.config.is_none() {
            let loaded = ConfigManager::load().map_err(|e| {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'promptp init' to create a configuration file.");
                e
            })?;
            self.config = Some(loaded);
        }

        Ok(self.config.get_or_insert_with(Config::default))
    }

    /// Command-line flags win over config values.
    pub fn build_request(args: &PromptArgs, config: &Config) -> PromptResult<PromptRequest> {
        let prompt_type = Self::resolve_type(args.prompt_type, config)?;

        Ok(PromptRequest {
            input: args.input.clone(),
            prompt_type,
            category: args.category.clone(),
            tone: args.tone.clone().or_else(|| config.engine.tone.clone()),
            format: args.format.clone(),
            length: args.length.or_else(|| PromptLength::parse(&config.engine.length)),
            goal: args.goal.clone(),
        })
    }

    fn resolve_type(prompt_type: Option<PromptType>, config: &Config) -> PromptResult<PromptType> {
        match prompt_type {
            Some(prompt_type) => Ok(prompt_type),
            None => config.engine.default_type.parse::<PromptType>().map_err(|_| {
                PromptError::config_error(
                    &format!("unknown default type '{}'", config.engine.default_type),
                    Some("engine.default_type"),
                    Some("Use text, image or code"),
                )
            }),
        }
    }

    fn engine(seed: Option<u64>) -> PromptEngine {
        match seed {
            Some(seed) => PromptEngine::with_seed(seed),
            None => PromptEngine::new(),
        }
    }

    fn wants_json(flag: bool, config: &Config) -> bool {
        flag || OutputFormat::parse(&config.output.format) == Some(OutputFormat::Json)
    }

    fn print_json<T: Serialize>(value: &T) -> PromptResult<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str) -> PromptArgs {
        PromptArgs {
            input: input.to_string(),
            prompt_type: None,
            category: None,
            tone: None,
            format: None,
            length: None,
            goal: None,
            seed: None,
            json: false,
        }
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.engine.default_type = "image".to_string();
        config.engine.tone = Some("casual".to_string());
        config.engine.length = "long".to_string();

        let from_config = CommandRunner::build_request(&args("a fox"), &config).unwrap();
        assert_eq!(from_config.prompt_type, PromptType::Image);
        assert_eq!(from_config.tone.as_deref(), Some("casual"));
        assert_eq!(from_config.length, Some(PromptLength::Long));

        let mut explicit = args("a fox");
        explicit.prompt_type = Some(PromptType::Code);
        explicit.tone = Some("technical".to_string());
        let from_flags = CommandRunner::build_request(&explicit, &config).unwrap();
        assert_eq!(from_flags.prompt_type, PromptType::Code);
        assert_eq!(from_flags.tone.as_deref(), Some("technical"));
    }

    #[test]
    fn unknown_default_type_is_a_config_error() {
        let mut config = Config::default();
        config.engine.default_type = "video".to_string();
        let error = CommandRunner::build_request(&args("a fox"), &config).unwrap_err();
        assert!(matches!(error, PromptError::ConfigurationError { .. }));
    }

    #[test]
    fn seeded_batch_is_order_independent_per_item() {
        let engine = PromptEngine::new();
        let requests: Vec<PromptRequest> = ["a fox in snow", "a ship at sea", "a quiet library"]
            .iter()
            .map(|input| PromptRequest::new(*input, PromptType::Image))
            .collect();

        let first = CommandRunner::run_batch(&engine, ComposeMode::Generate, &requests, Some(17));
        let second = CommandRunner::run_batch(&engine, ComposeMode::Generate, &requests, Some(17));
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|response| !response.is_error()));
    }
}
