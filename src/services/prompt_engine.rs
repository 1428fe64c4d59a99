use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::constants::catalog;
use crate::enums::compose_mode::ComposeMode;
use crate::enums::content_kind::ContentKind;
use crate::errors::{PromptError, PromptResult};
use crate::services::analyzer::Analyzer;
use crate::services::composer::{ComposeParams, Composer};
use crate::services::extractor::Extractor;
use crate::services::performance::PerformanceEstimator;
use crate::structs::analysis::Analysis;
use crate::structs::prompt_request::PromptRequest;
use crate::structs::prompt_response::{PromptMetadata, PromptResponse};

const MIN_INPUT_CHARS: usize = 3;

/// Entry point for generating, enhancing and rewriting prompts.
///
/// The engine holds no mutable state and can be shared across threads. Failures
/// never surface as `Err`; they come back as a response whose `error` is set and
/// whose `result` is the untouched input.
#[derive(Debug, Clone, Default)]
pub struct PromptEngine {
    seed: Option<u64>,
}

impl PromptEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call without an explicit random source reuses this seed, so
    /// image prompts become reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn generate_prompt(&self, request: &PromptRequest) -> PromptResponse {
        self.respond(ComposeMode::Generate, request)
    }

    pub fn enhance_prompt(&self, request: &PromptRequest) -> PromptResponse {
        self.respond(ComposeMode::Enhance, request)
    }

    pub fn rewrite_prompt(&self, request: &PromptRequest) -> PromptResponse {
        self.respond(ComposeMode::Rewrite, request)
    }

    pub fn generate_prompt_with<R: Rng + ?Sized>(&self, request: &PromptRequest, rng: &mut R) -> PromptResponse {
        self.respond_with(ComposeMode::Generate, request, rng)
    }

    pub fn enhance_prompt_with<R: Rng + ?Sized>(&self, request: &PromptRequest, rng: &mut R) -> PromptResponse {
        self.respond_with(ComposeMode::Enhance, request, rng)
    }

    pub fn rewrite_prompt_with<R: Rng + ?Sized>(&self, request: &PromptRequest, rng: &mut R) -> PromptResponse {
        self.respond_with(ComposeMode::Rewrite, request, rng)
    }

    /// Runs `mode` with the engine's seed, or thread-local entropy when unseeded.
    pub fn respond(&self, mode: ComposeMode, request: &PromptRequest) -> PromptResponse {
        match self.seed {
            Some(seed) => self.respond_with(mode, request, &mut StdRng::seed_from_u64(seed)),
            None => self.respond_with(mode, request, &mut rand::thread_rng()),
        }
    }

    pub fn respond_with<R>(&self, mode: ComposeMode, request: &PromptRequest, rng: &mut R) -> PromptResponse
    where
        R: Rng + ?Sized,
    {
        match Self::compose_response(mode, request, rng) {
            Ok(response) => response,
            Err(error) => {
                log::warn!("Failed to {} prompt: {}", mode.as_str(), error);
                PromptResponse::failure(&request.input, &error)
            }
        }
    }

    /// Heuristic analysis of the raw input, without composing anything.
    pub fn analyze_prompt(&self, request: &PromptRequest) -> PromptResult<Analysis> {
        let kind = request.prompt_type.engine_kind()?;
        Ok(Analyzer::analyze(&request.input, kind))
    }

    pub fn estimate_performance(prompt: &str, kind: ContentKind) -> u8 {
        PerformanceEstimator::estimate(prompt, kind)
    }

    pub fn categories(kind: ContentKind) -> &'static [&'static str] {
        catalog::categories(kind)
    }

    pub fn formats(kind: ContentKind) -> &'static [&'static str] {
        catalog::formats(kind)
    }

    pub fn tones() -> Vec<&'static str> {
        catalog::tones()
    }

    fn compose_response<R>(mode: ComposeMode, request: &PromptRequest, rng: &mut R) -> PromptResult<PromptResponse>
    where
        R: Rng + ?Sized,
    {
        Self::validate_input(mode, &request.input)?;
        let kind = request.prompt_type.engine_kind()?;
        let params = ComposeParams::from_request(request);

        let response = match mode {
            ComposeMode::Generate => {
                let result = Composer::generate(kind, &request.input, &params, rng)
                    .map_err(|error| Self::rewrap(mode, error))?;
                let category = params
                    .category
                    .unwrap_or_else(|| Extractor::detect_category(&request.input, kind));

                let metadata = PromptMetadata {
                    category: Some(category.to_string()),
                    estimated_performance: Some(PerformanceEstimator::estimate(&result, kind)),
                    ..Default::default()
                };
                PromptResponse::success(result, metadata)
            }
            ComposeMode::Enhance => {
                let analysis = Analyzer::analyze(&request.input, kind);
                let result = Composer::enhance(kind, &request.input, &analysis, &params);

                let metadata = PromptMetadata {
                    strength: Some(analysis.strength),
                    improvement_areas: Some(analysis.improvement_areas),
                    estimated_performance: Some(PerformanceEstimator::estimate(&result, kind)),
                    ..Default::default()
                };
                PromptResponse {
                    suggestions: Some(analysis.suggestions),
                    ..PromptResponse::success(result, metadata)
                }
            }
            ComposeMode::Rewrite => {
                let result = Composer::rewrite(kind, &request.input, &params);
                let metadata = PromptMetadata {
                    estimated_performance: Some(PerformanceEstimator::estimate(&result, kind)),
                    ..Default::default()
                };
                PromptResponse::success(result, metadata)
            }
        };

        log::debug!(
            "{} {} prompt: {} chars, estimated performance {:?}",
            mode.gerund(),
            kind,
            response.result.chars().count(),
            response.estimated_performance()
        );

        Ok(response)
    }

    fn validate_input(mode: ComposeMode, input: &str) -> PromptResult<()> {
        if input.trim().chars().count() < MIN_INPUT_CHARS {
            return Err(PromptError::input_too_short(mode.too_short_operation()));
        }
        Ok(())
    }

    // Composition faults raised below the facade carry a generic mode.
    fn rewrap(mode: ComposeMode, error: PromptError) -> PromptError {
        match error {
            PromptError::Composition { reason, .. } => PromptError::composition(mode.gerund(), &reason),
            other => other,
        }
    }
}
