use crate::constants::keywords::structure_outline;
use crate::enums::content_kind::ContentKind;
use crate::services::prompt_engine::PromptEngine;
use crate::structs::analysis::Analysis;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::prompt_response::PromptResponse;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub struct ResponsePrinter;

impl ResponsePrinter {
    pub fn print_response(response: &PromptResponse, output: &OutputConfig) {
        if let Some(error) = &response.error {
            println!("❌ {}", error);
            return;
        }

        println!("\n✨ Prompt");
        println!("{}", RULE);
        println!("{}", response.result);
        println!("{}", RULE);

        if output.show_suggestions {
            if let Some(suggestions) = response.suggestions.as_ref().filter(|s| !s.is_empty()) {
                println!("\n💡 Suggestions:");
                for suggestion in suggestions {
                    println!("   • {}", suggestion);
                }
            }
        }

        if output.show_metadata {
            if let Some(metadata) = &response.metadata {
                println!("\n📊 Metadata:");
                if let Some(category) = &metadata.category {
                    println!("   Category: {}", category);
                }
                if let Some(strength) = metadata.strength {
                    println!("   Input strength: {}/100", strength);
                }
                if let Some(areas) = metadata.improvement_areas.as_ref().filter(|a| !a.is_empty()) {
                    println!("   Improvement areas: {}", areas.join(", "));
                }
                if let Some(score) = metadata.estimated_performance {
                    println!("   Estimated performance: {}/100 ({})", score, Self::score_label(score));
                }
            }
        }
    }

    pub fn print_analysis(analysis: &Analysis, kind: ContentKind) {
        println!("\n🔍 {} prompt analysis", kind);
        println!("{}", RULE);
        println!("   Strength: {}/100 ({})", analysis.strength, Self::score_label(analysis.strength));

        if !analysis.missing_keywords.is_empty() {
            println!("   Missing keywords: {}", analysis.missing_keywords.join(", "));
        }
        if !analysis.improvement_areas.is_empty() {
            println!("   Improvement areas: {}", analysis.improvement_areas.join(", "));
        }
        if !analysis.suggestions.is_empty() {
            println!("\n💡 Suggestions:");
            for (i, suggestion) in analysis.suggestions.iter().enumerate() {
                println!("   {}. {}", i + 1, suggestion);
            }
        }

        println!("\n🧭 Recommended structure: {}", structure_outline(kind));
    }

    pub fn print_catalog(kinds: &[ContentKind]) {
        for kind in kinds {
            println!("\n📚 {}", kind);
            println!("   Categories: {}", PromptEngine::categories(*kind).join(", "));
            println!("   Formats: {}", PromptEngine::formats(*kind).join(", "));
        }
        println!("\n🎨 Tones: {}", PromptEngine::tones().join(", "));
    }

    pub fn score_label(score: u8) -> &'static str {
        match score {
            85..=100 => "🟢 STRONG",
            60..=84 => "🟡 GOOD",
            35..=59 => "🟠 FAIR",
            _ => "🔴 WEAK",
        }
    }
}
