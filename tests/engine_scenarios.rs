use promptp::services::extractor::Extractor;
use promptp::{ContentKind, PromptEngine, PromptLength, PromptRequest, PromptType};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn generate_rejects_two_character_input() {
    let response = PromptEngine::new().generate_prompt(&PromptRequest::new("ab", PromptType::Text));
    assert_eq!(response.result, "ab");
    assert_eq!(
        response.error.as_deref(),
        Some("Input is too short to generate a meaningful prompt")
    );
}

#[test]
fn generate_accepts_three_characters() {
    let response = PromptEngine::new().generate_prompt(&PromptRequest::new("abc", PromptType::Code));
    assert!(response.error.is_none());
    assert!(response.result.starts_with("Write production-quality JavaScript code that implements abc."));
}

#[test]
fn square_image_prompt_carries_ratio_and_version_flags() {
    let request = PromptRequest::new("sunset over mountains", PromptType::Image).with_format("square");
    let response = PromptEngine::new().generate_prompt_with(&request, &mut StdRng::seed_from_u64(1));
    assert!(response.result.contains("--ar 1:1"));
    assert!(response.result.ends_with("--v 5.1 --q 2"));
}

#[test]
fn same_seed_gives_identical_image_prompts() {
    let engine = PromptEngine::new();
    let request = PromptRequest::new("an astronaut riding a horse", PromptType::Image).with_tone("creative");
    let first = engine.generate_prompt_with(&request, &mut StdRng::seed_from_u64(2024));
    let second = engine.generate_prompt_with(&request, &mut StdRng::seed_from_u64(2024));
    assert_eq!(first, second);
}

#[test]
fn enhancing_a_bare_text_prompt_adds_structure() {
    let response = PromptEngine::new().enhance_prompt(&PromptRequest::new("Write about dogs", PromptType::Text));
    assert!(response.result.contains("Well-structured with clear headings"));
    let strength = response.metadata.and_then(|m| m.strength).unwrap();
    assert!((10..=50).contains(&strength));
}

#[test]
fn code_analysis_lists_first_three_table_keywords() {
    let analysis = PromptEngine::new()
        .analyze_prompt(&PromptRequest::new("sort a list of numbers", PromptType::Code))
        .unwrap();
    assert_eq!(analysis.missing_keywords, vec!["optimized", "efficient", "maintainable"]);
}

#[test]
fn chat_requests_are_unsupported() {
    let response = PromptEngine::new().enhance_prompt(&PromptRequest::new("Let's talk about tea", PromptType::Chat));
    assert_eq!(response.result, "Let's talk about tea");
    assert!(response.error.unwrap().contains("'chat' is not supported"));
}

#[test]
fn intent_detection_examples() {
    use promptp::enums::intent::Intent;
    assert_eq!(Extractor::determine_intent("How to bake bread"), Intent::Guide);
    assert_eq!(Extractor::determine_intent("Python vs JavaScript"), Intent::Compare);
}

#[test]
fn core_content_keeps_subject_words_in_order() {
    let core = Extractor::extract_core_content("Create a comprehensive guide to Python generators", ContentKind::Text);
    let words: Vec<&str> = core.split_whitespace().collect();
    assert!(!words.iter().any(|w| w.eq_ignore_ascii_case("create") || w.eq_ignore_ascii_case("comprehensive")));
    let guide = words.iter().position(|w| *w == "guide").unwrap();
    let python = words.iter().position(|w| *w == "Python").unwrap();
    let generators = words.iter().position(|w| *w == "generators").unwrap();
    assert!(guide < python && python < generators);
}

#[test]
fn rewrite_reflects_tone_format_and_length() {
    let request = PromptRequest::new("Write a detailed article about urban gardening", PromptType::Text)
        .with_tone("enthusiastic")
        .with_format("qa_format")
        .with_length(PromptLength::Long);
    let response = PromptEngine::new().rewrite_prompt(&request);
    assert_eq!(
        response.result,
        "Write a in-depth, exhaustive, energetic, passionate, engaging piece about article about urban gardening. Format the response as a question-and-answer format. Include relevant details, examples, and insights to provide a comprehensive understanding of the topic."
    );
    assert!(response.metadata.unwrap().estimated_performance.is_some());
}

#[test]
fn responses_serialize_with_camel_case_keys() {
    let response = PromptEngine::new().enhance_prompt(&PromptRequest::new("A castle at dusk", PromptType::Image));
    let json = serde_json::to_value(&response).unwrap();
    assert!(json["metadata"]["improvementAreas"].is_array());
    assert!(json["metadata"]["estimatedPerformance"].is_number());
    assert!(json.get("error").is_none());
}

#[test]
fn wire_requests_deserialize_into_engine_calls() {
    let request: PromptRequest =
        serde_json::from_str(r#"{"input":"a REST endpoint for orders","type":"code","category":"api","tone":"technical"}"#)
            .unwrap();
    let response = PromptEngine::new().generate_prompt(&request);
    assert!(response.result.starts_with("Write highly optimized JavaScript code"));
    assert_eq!(response.metadata.unwrap().category.as_deref(), Some("api"));
}
