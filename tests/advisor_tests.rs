/// Unit tests for input validation, configuration, and the typed summary record

mod common;

use common::{wrapped_in_prose, SAMPLE_SUMMARY};
use health_advisor::{
    analyze_symptoms, answer_question, extract_json, normalize_list_fields, translate_summary,
    validate_symptoms, AdvisorConfig, AdvisorError, HealthSummary, SUPPORTED_LANGUAGES,
};

fn offline_config() -> AdvisorConfig {
    // Points at a closed port so an accidental network call fails fast
    AdvisorConfig {
        gemini_api_key: "test-key".to_string(),
        model: "gemini-1.5-flash".to_string(),
        api_base_url: "http://127.0.0.1:9".to_string(),
    }
}

#[test]
fn test_validate_rejects_short_input() {
    assert!(matches!(
        validate_symptoms("ab"),
        Err(AdvisorError::InvalidInput(_))
    ));
}

#[test]
fn test_validate_rejects_whitespace_padded_short_input() {
    // "  a  " trims to a single character
    assert!(validate_symptoms("  a  ").is_err());
}

#[test]
fn test_validate_rejects_empty_input() {
    assert!(validate_symptoms("").is_err());
}

#[test]
fn test_validate_counts_characters_not_bytes() {
    // Two Devanagari characters occupy six bytes but are still too short
    assert!(matches!(
        validate_symptoms("दर"),
        Err(AdvisorError::InvalidInput(_))
    ));
    // Five characters in the same script pass
    assert!(validate_symptoms("बुखार").is_ok());
}

#[test]
fn test_validate_accepts_minimum_length() {
    assert_eq!(validate_symptoms("flu").unwrap(), "flu");
}

#[test]
fn test_validate_trims_input() {
    assert_eq!(validate_symptoms("  fever  ").unwrap(), "fever");
}

#[tokio::test]
async fn test_analysis_rejects_short_input_before_any_call() {
    let config = offline_config();
    let result = analyze_symptoms(&config, "ok", None).await;
    assert!(matches!(result, Err(AdvisorError::InvalidInput(_))));
}

#[tokio::test]
async fn test_question_rejects_empty_input_before_any_call() {
    let config = offline_config();
    let result = answer_question(&config, "   ").await;
    assert!(matches!(result, Err(AdvisorError::InvalidInput(_))));
}

#[tokio::test]
async fn test_translation_rejects_empty_target_language() {
    let config = offline_config();
    let summary = HealthSummary::default();
    let result = translate_summary(&config, &summary, "  ").await;
    assert!(matches!(result, Err(AdvisorError::InvalidInput(_))));
}

#[test]
fn test_summary_deserializes_from_normalized_record() {
    let reply = wrapped_in_prose(SAMPLE_SUMMARY);
    let mut record = extract_json(&reply).unwrap();
    normalize_list_fields(&mut record);

    let summary: HealthSummary = serde_json::from_value(record).unwrap();
    assert_eq!(summary.disease, "Common Cold");
    assert_eq!(summary.alternative_medicines, vec!["Ibuprofen", "Aspirin"]);
    assert_eq!(summary.home_remedies.len(), 2);
    assert!(summary.translated_language.is_none());
}

#[test]
fn test_summary_defaults_missing_fields() {
    let record = serde_json::json!({"Disease": "Flu"});
    let summary: HealthSummary = serde_json::from_value(record).unwrap();
    assert_eq!(summary.disease, "Flu");
    assert!(summary.recommended_medicine.is_empty());
    assert!(summary.side_effects.is_empty());
}

#[test]
fn test_summary_serializes_with_original_keys() {
    let summary = HealthSummary {
        disease: "Flu".to_string(),
        side_effects: vec!["Nausea".to_string()],
        ..Default::default()
    };
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["Disease"], "Flu");
    assert_eq!(value["Side Effects"][0], "Nausea");
    // Absent translation marker is skipped entirely
    assert!(value.get("translatedLanguage").is_none());
}

#[test]
fn test_config_builds_generate_content_url() {
    let config = offline_config();
    assert_eq!(
        config.generate_content_url(),
        "http://127.0.0.1:9/v1beta/models/gemini-1.5-flash:generateContent"
    );
}

#[test]
fn test_supported_languages_start_with_english() {
    assert_eq!(SUPPORTED_LANGUAGES.len(), 10);
    assert_eq!(SUPPORTED_LANGUAGES[0].code, "english");
    assert!(SUPPORTED_LANGUAGES.iter().any(|l| l.code == "hindi"));
}

#[test]
fn test_error_messages_are_user_facing() {
    let extraction = AdvisorError::Extraction(anyhow::anyhow!("boom"));
    assert_eq!(
        extraction.to_string(),
        "Unable to process the AI response. Please try again or rephrase your symptoms."
    );

    let invalid = AdvisorError::InvalidInput("Please enter a question".to_string());
    assert_eq!(invalid.to_string(), "Please enter a question");
}
