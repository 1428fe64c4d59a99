use crate::constants::catalog::{length_descriptor, text_format_description, tone_adjectives};
use crate::constants::templates::{TEXT_AUDIENCE_CLAUSE, TEXT_STRUCTURE_CHECKLIST};
use crate::enums::content_kind::ContentKind;
use crate::enums::intent::Intent;
use crate::services::composer::{core_or_input, ComposeParams};
use crate::services::extractor::Extractor;
use crate::structs::analysis::Analysis;

pub(super) fn generate(input: &str, params: &ComposeParams<'_>) -> String {
    let seed = input.trim();
    let topics = Extractor::extract_topics(seed);
    let topic_phrase = if topics.is_empty() { seed.to_string() } else { topics.join(", ") };

    // An explicit category beats the free-text heuristics.
    let intent = params
        .category
        .map(|category| Extractor::map_category_to_intent(category, ContentKind::Text))
        .unwrap_or_else(|| Extractor::determine_intent(seed));

    let adjectives = tone_adjectives(params.tone_or_default()).join(", ");

    let format_clause = params
        .format
        .map(|format| format!("Format your response as {}. ", text_format_description(format)))
        .unwrap_or_default();

    let goal_clause = params
        .goal
        .map(|goal| format!("The purpose of this content is to {}. ", goal))
        .unwrap_or_default();

    log::debug!("Generating text prompt with intent={}", intent.as_str());

    match intent {
        Intent::Explain => format!(
            "Provide a {adjectives} explanation of {topic_phrase} that covers the fundamental concepts, historical context, and real-world applications. Include concrete examples, address common misconceptions, and explain the significance and implications. {format_clause}{goal_clause}Structure your response with clear headings, bullet points for key insights, and conclude with future trends or developments."
        ),
        Intent::Compare => format!(
            "Present a {adjectives} comparison of {topic_phrase}, analyzing their similarities and differences across multiple dimensions including features, benefits, limitations, and use cases. Use a balanced approach that fairly represents each option, supported by factual evidence and expert perspectives. {format_clause}{goal_clause}Include a comparative table for easy reference, and conclude with recommendations for different scenarios or user needs."
        ),
        Intent::Guide => format!(
            "Create a {adjectives} step-by-step guide on {topic_phrase} that is suitable for beginners but includes advanced tips for experienced users. Include prerequisites, common pitfalls to avoid, troubleshooting advice, and practical examples for each step. {format_clause}{goal_clause}Format the response with numbered steps, code snippets or examples where relevant, and visual descriptions. Conclude with next steps for further learning or practice."
        ),
        Intent::Analyze | Intent::Persuade | Intent::Describe => format!(
            "Write a {adjectives} analysis of {topic_phrase} covering key aspects, current trends, challenges, and opportunities. Include relevant statistics, expert insights, and case studies to support your points. {format_clause}{goal_clause}Structure your response with clear headings, use bullet points for key takeaways, and conclude with practical implications and future outlook."
        ),
    }
}

pub(super) fn enhance(prompt: &str, analysis: &Analysis, params: &ComposeParams<'_>) -> String {
    let mut enhanced = prompt.to_string();

    if analysis.has_suggestion_containing("structure") {
        enhanced = format!(
            "{}\n\nPlease provide a {} response that is:\n{}",
            enhanced,
            params.tone.unwrap_or("comprehensive"),
            TEXT_STRUCTURE_CHECKLIST
        );
    }

    if analysis.has_suggestion_containing("audience") {
        enhanced = format!("{}\n\n{}", enhanced, TEXT_AUDIENCE_CLAUSE);
    }

    if let Some(format) = params.format {
        enhanced = format!("{}\n\nFormat the response as {}", enhanced, text_format_description(format));
    }

    if let Some(tone) = params.tone {
        enhanced = format!(
            "Create a {} analysis on the following topic:\n\n{}",
            tone_adjectives(tone).join(", "),
            enhanced
        );
    }

    enhanced
}

pub(super) fn rewrite(input: &str, params: &ComposeParams<'_>) -> String {
    let content = core_or_input(input, ContentKind::Text);
    let adjectives = tone_adjectives(params.tone_or_default()).join(", ");
    let length = length_descriptor(params.length, ContentKind::Text);

    let format_part = params
        .format
        .map(|format| format!("Format the response as {}. ", text_format_description(format)))
        .unwrap_or_default();

    format!(
        "Write a {length}, {adjectives} piece about {content}. {format_part}Include relevant details, examples, and insights to provide a comprehensive understanding of the topic."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::prompt_length::PromptLength;
    use crate::services::analyzer::Analyzer;

    #[test]
    fn compare_template_joins_topics() {
        let prompt = generate("Python vs JavaScript", &ComposeParams::default());
        assert!(prompt.starts_with(
            "Present a authoritative, well-researched, objective comparison of Python, JavaScript, analyzing"
        ));
    }

    #[test]
    fn guide_template_with_format_and_goal() {
        let params = ComposeParams {
            tone: Some("casual"),
            format: Some("numbered_list"),
            goal: Some("help new bakers"),
            ..Default::default()
        };
        let prompt = generate("how to bake sourdough", &params);
        assert!(prompt.starts_with("Create a conversational, accessible, relatable step-by-step guide on how to bake sourdough"));
        assert!(prompt.contains(
            "Format your response as a sequential numbered list. The purpose of this content is to help new bakers. Format the response with numbered steps"
        ));
    }

    #[test]
    fn category_overrides_detected_intent() {
        let params = ComposeParams { category: Some("academic"), ..Default::default() };
        let prompt = generate("how to measure dark matter", &params);
        assert!(prompt.starts_with("Provide a "));
        assert!(prompt.contains("explanation of how to measure dark matter"));
    }

    #[test]
    fn persuasive_categories_use_analysis_template() {
        let params = ComposeParams { category: Some("marketing"), ..Default::default() };
        assert!(generate("our new running shoe", &params).starts_with("Write a "));
    }

    #[test]
    fn enhance_fires_structure_block_then_tone_prefix() {
        let analysis = Analyzer::analyze("Write about dogs", ContentKind::Text);
        let params = ComposeParams { tone: Some("friendly"), format: Some("bullet_points"), ..Default::default() };
        let enhanced = enhance("Write about dogs", &analysis, &params);

        assert!(enhanced.starts_with("Create a approachable, helpful, clear analysis on the following topic:\n\nWrite about dogs\n\n"));
        assert!(enhanced.contains("Please provide a friendly response that is:\n- Well-structured with clear headings"));
        assert!(enhanced.ends_with("Format the response as concise bullet points for quick scanning"));
    }

    #[test]
    fn enhance_adds_audience_clause_when_suggested() {
        let analysis = Analyzer::analyze("Summarize remote work", ContentKind::Text);
        assert!(analysis.has_suggestion_containing("audience"));
        let enhanced = enhance("Summarize remote work", &analysis, &ComposeParams::default());
        assert!(enhanced.contains("Please provide a comprehensive response that is:"));
        assert!(enhanced.ends_with(TEXT_AUDIENCE_CLAUSE));
    }

    #[test]
    fn rewrite_uses_length_descriptor() {
        let params = ComposeParams { length: PromptLength::Short, tone: Some("minimalist"), ..Default::default() };
        let prompt = rewrite("Create a comprehensive guide to Python generators", &params);
        assert_eq!(
            prompt,
            "Write a concise, to-the-point, concise, essential, focused piece about guide to Python generators. Include relevant details, examples, and insights to provide a comprehensive understanding of the topic."
        );
    }
}
