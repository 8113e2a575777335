/// Core advisor pipeline - extracted for reuse between the HTTP server and tests
/// This module contains the full request flow:
/// - Input validation
/// - Prompt construction
/// - Gemini API calls
/// - JSON extraction and field normalization

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::prompts::{
    build_analysis_prompt, build_question_prompt, build_translation_prompt,
    ANALYSIS_SYSTEM_PROMPT, QUESTION_SYSTEM_PROMPT, TRANSLATION_SYSTEM_PROMPT,
};
use crate::shared::{call_gemini, extract_json, normalize_list_fields};

/// Minimum trimmed length of a symptom description before any model call is made
pub const MIN_SYMPTOM_LEN: usize = 3;

/// Raw model replies are truncated to this many characters in logs
const LOG_TRUNCATE_LEN: usize = 500;

/// Errors surfaced by the advisor pipeline
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("AI credits exhausted. Please add credits to continue.")]
    CreditsExhausted,
    #[error("network error calling the model API: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model API error: {0}")]
    Upstream(String),
    #[error("Unable to process the AI response. Please try again or rephrase your symptoms.")]
    Extraction(#[source] anyhow::Error),
}

/// Advisor configuration
pub struct AdvisorConfig {
    pub gemini_api_key: String,
    pub model: String,
    pub api_base_url: String,
}

impl AdvisorConfig {
    pub fn from_env() -> Result<Self, AdvisorError> {
        let gemini_api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            AdvisorError::Config("GEMINI_API_KEY environment variable not set".to_string())
        })?;

        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());

        let api_base_url = std::env::var("GEMINI_API_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());

        Ok(Self {
            gemini_api_key,
            model,
            api_base_url,
        })
    }

    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base_url, self.model
        )
    }
}

/// Structured medical summary returned by the analysis endpoint
/// Field names mirror the JSON keys the prompt template demands
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthSummary {
    #[serde(rename = "Disease", default)]
    pub disease: String,
    #[serde(rename = "Recommended Medicine", default)]
    pub recommended_medicine: String,
    #[serde(rename = "Alternative Medicines", default)]
    pub alternative_medicines: Vec<String>,
    #[serde(rename = "Dosage", default)]
    pub dosage: String,
    #[serde(rename = "Precautions", default)]
    pub precautions: String,
    #[serde(rename = "Side Effects", default)]
    pub side_effects: Vec<String>,
    #[serde(rename = "When to Consult a Doctor", default)]
    pub when_to_consult_a_doctor: String,
    #[serde(rename = "Home Remedies", default)]
    pub home_remedies: Vec<String>,
    #[serde(rename = "Symptom Description", default)]
    pub symptom_description: String,
    #[serde(rename = "Lifestyle Tips", default)]
    pub lifestyle_tips: Vec<String>,
    #[serde(rename = "Disclaimer", default)]
    pub disclaimer: String,
    #[serde(
        rename = "translatedLanguage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub translated_language: Option<String>,
}

/// A language offered for analysis output and translation
#[derive(Debug, Clone, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language { code: "english", name: "English" },
    Language { code: "hindi", name: "Hindi" },
    Language { code: "tamil", name: "Tamil" },
    Language { code: "telugu", name: "Telugu" },
    Language { code: "marathi", name: "Marathi" },
    Language { code: "bengali", name: "Bengali" },
    Language { code: "gujarati", name: "Gujarati" },
    Language { code: "kannada", name: "Kannada" },
    Language { code: "malayalam", name: "Malayalam" },
    Language { code: "punjabi", name: "Punjabi" },
];

/// Reject symptom descriptions that are too short to analyze
/// Runs before any external call is made
pub fn validate_symptoms(input: &str) -> Result<&str, AdvisorError> {
    let trimmed = input.trim();
    if trimmed.chars().count() < MIN_SYMPTOM_LEN {
        return Err(AdvisorError::InvalidInput(format!(
            "Please enter a valid symptom description (at least {MIN_SYMPTOM_LEN} characters)"
        )));
    }
    Ok(trimmed)
}

fn truncate_for_log(text: &str) -> String {
    if text.len() > LOG_TRUNCATE_LEN {
        let cut = text
            .char_indices()
            .take_while(|(i, _)| *i < LOG_TRUNCATE_LEN)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &text[..cut])
    } else {
        text.to_string()
    }
}

/// Analyze a free-text symptom description into a structured summary
pub async fn analyze_symptoms(
    config: &AdvisorConfig,
    symptoms: &str,
    language: Option<&str>,
) -> Result<HealthSummary, AdvisorError> {
    let symptoms = validate_symptoms(symptoms)?;
    let client = reqwest::Client::new();

    let start = std::time::Instant::now();
    info!("processing analysis request for symptoms: {symptoms}");

    let prompt = build_analysis_prompt(symptoms, language);
    let raw = call_gemini(&client, config, Some(ANALYSIS_SYSTEM_PROMPT), &prompt).await?;
    info!("received model response: {}", truncate_for_log(&raw));

    let mut record = extract_json(&raw).map_err(AdvisorError::Extraction)?;
    normalize_list_fields(&mut record);

    let summary: HealthSummary = serde_json::from_value(record)
        .map_err(|e| AdvisorError::Extraction(anyhow::Error::new(e)))?;

    info!(
        "analysis completed in {:.2} seconds",
        start.elapsed().as_secs_f64()
    );
    Ok(summary)
}

/// Answer a free-form health question with a plain-text reply
pub async fn answer_question(
    config: &AdvisorConfig,
    question: &str,
) -> Result<String, AdvisorError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(AdvisorError::InvalidInput(
            "Please enter a question".to_string(),
        ));
    }
    let client = reqwest::Client::new();

    info!("processing health question: {question}");
    let prompt = build_question_prompt(question);
    let answer = call_gemini(&client, config, Some(QUESTION_SYSTEM_PROMPT), &prompt).await?;
    info!("received model response: {}", truncate_for_log(&answer));
    Ok(answer)
}

/// Translate an existing summary into another language, preserving its structure
pub async fn translate_summary(
    config: &AdvisorConfig,
    summary: &HealthSummary,
    target_language: &str,
) -> Result<HealthSummary, AdvisorError> {
    let target_language = target_language.trim();
    if target_language.is_empty() {
        return Err(AdvisorError::InvalidInput(
            "Please select a target language".to_string(),
        ));
    }
    let client = reqwest::Client::new();

    info!("translating summary to {target_language}");
    let summary_json = serde_json::to_string_pretty(summary)
        .map_err(|e| AdvisorError::Extraction(anyhow::Error::new(e)))?;
    let prompt = build_translation_prompt(&summary_json, target_language);
    let raw = call_gemini(&client, config, Some(TRANSLATION_SYSTEM_PROMPT), &prompt).await?;
    info!("received model response: {}", truncate_for_log(&raw));

    let mut record = extract_json(&raw).map_err(AdvisorError::Extraction)?;
    normalize_list_fields(&mut record);

    let mut translated: HealthSummary = serde_json::from_value(record)
        .map_err(|e| AdvisorError::Extraction(anyhow::Error::new(e)))?;
    translated.translated_language = Some(target_language.to_string());
    Ok(translated)
}
