use serde::{Deserialize, Serialize};
use crate::enums::compose_mode::ComposeMode;
use crate::structs::prompt_response::PromptResponse;

/// Totals over one batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub mode: Option<ComposeMode>,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub average_performance: Option<f64>,
}

impl BatchSummary {
    pub fn from_responses(mode: ComposeMode, responses: &[PromptResponse]) -> Self {
        let scores: Vec<u32> = responses
            .iter()
            .filter(|response| !response.is_error())
            .filter_map(|response| response.estimated_performance().map(u32::from))
            .collect();

        let failed = responses.iter().filter(|response| response.is_error()).count();
        let average_performance = if scores.is_empty() {
            None
        } else {
            Some(f64::from(scores.iter().sum::<u32>()) / scores.len() as f64)
        };

        Self {
            mode: Some(mode),
            total: responses.len(),
            succeeded: responses.len() - failed,
            failed,
            average_performance,
        }
    }

    pub fn print_summary(&self) {
        println!("\n📊 Batch Summary");
        println!("═══════════════════════════════════════");
        if let Some(mode) = self.mode {
            println!("   Mode: {}", mode.as_str());
        }
        println!("   Prompts: {}", self.total);
        println!("   ✅ Succeeded: {}", self.succeeded);
        if self.failed > 0 {
            println!("   ❌ Failed: {}", self.failed);
        }
        if let Some(average) = self.average_performance {
            println!("   📈 Average estimated performance: {:.1}/100", average);
        }
    }
}
