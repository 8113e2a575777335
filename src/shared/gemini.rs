/// Gemini API integration module
/// Handles communication with the generateContent REST endpoint

use serde::{Deserialize, Serialize};

use crate::advisor::{AdvisorConfig, AdvisorError};

/// Gemini generateContent request
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    #[serde(
        rename = "systemInstruction",
        skip_serializing_if = "Option::is_none"
    )]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
    #[serde(rename = "safetySettings")]
    pub safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

impl Content {
    pub fn from_text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "topK")]
    pub top_k: i32,
    #[serde(rename = "topP")]
    pub top_p: f32,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: i32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            top_k: 32,
            top_p: 1.0,
            max_output_tokens: 1024,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

pub fn default_safety_settings() -> Vec<SafetySetting> {
    [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ]
    .iter()
    .map(|category| SafetySetting {
        category: (*category).to_string(),
        threshold: "BLOCK_MEDIUM_AND_ABOVE".to_string(),
    })
    .collect()
}

/// Gemini generateContent response
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

/// Call the Gemini API and return the first candidate's text
pub async fn call_gemini(
    client: &reqwest::Client,
    config: &AdvisorConfig,
    system_prompt: Option<&str>,
    prompt: &str,
) -> Result<String, AdvisorError> {
    let request = GeminiRequest {
        system_instruction: system_prompt.map(Content::from_text),
        contents: vec![Content::from_text(prompt)],
        generation_config: GenerationConfig::default(),
        safety_settings: default_safety_settings(),
    };

    let response = client
        .post(config.generate_content_url())
        .header("x-goog-api-key", &config.gemini_api_key)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(match status.as_u16() {
            429 => AdvisorError::RateLimited,
            402 => AdvisorError::CreditsExhausted,
            _ => AdvisorError::Upstream(format!("{status}: {error_text}")),
        });
    }

    let gemini_response: GeminiResponse = response.json().await?;

    gemini_response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.first())
        .map(|part| part.text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AdvisorError::Upstream("empty response from model".to_string()))
}
