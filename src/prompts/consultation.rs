/// Prompt templates for symptom analysis, health Q&A, and translation

pub const ANALYSIS_SYSTEM_PROMPT: &str =
    "You are a highly knowledgeable and reliable AI medical assistant. Your role is to \
     provide general health-related guidance and suggestions for informational and \
     educational purposes based on user-reported symptoms.";

pub const QUESTION_SYSTEM_PROMPT: &str =
    "You are a helpful medical assistant AI. Provide informative, evidence-based answers \
     about health topics. Include disclaimers when appropriate. Always encourage \
     consulting healthcare professionals for medical advice.";

pub const TRANSLATION_SYSTEM_PROMPT: &str =
    "You are a professional medical translator. Translate health information accurately \
     while preserving medical terminology meaning.";

/// Build the symptom-analysis prompt demanding a pure-JSON reply
pub fn build_analysis_prompt(symptoms: &str, language: Option<&str>) -> String {
    let language_clause = match language {
        Some(lang) if !lang.trim().is_empty() && !lang.trim().eq_ignore_ascii_case("english") => {
            format!("\nPlease provide all responses in {} language.\n", lang.trim())
        }
        _ => String::new(),
    };

    format!(
        r#"Based on the following symptoms: "{symptoms}", generate a helpful and structured medical summary in valid JSON format.

Always provide an answer - do not defer by saying "I cannot provide that" or "consult a doctor." If unsure, offer a likely or commonly associated response based on general medical knowledge. Assume the goal is to give helpful, non-critical advice, and include typical suggestions known from reliable health sources.

Ensure the response follows this exact JSON format (use double quotes, no trailing commas, no markdown formatting):

{{
  "Disease": "",
  "Recommended Medicine": "",
  "Alternative Medicines": [],
  "Dosage": "",
  "Precautions": "",
  "Side Effects": [],
  "When to Consult a Doctor": "",
  "Home Remedies": [],
  "Symptom Description": "",
  "Lifestyle Tips": [],
  "Disclaimer": "This information is for educational purposes only and not a substitute for professional medical advice. Always consult a healthcare provider for diagnosis and treatment."
}}
{language_clause}
Important instructions:

1. Always respond in pure JSON, no additional explanations or formatting.
2. Use realistic, non-exaggerated values based on commonly available over-the-counter medications or natural remedies.
3. If multiple possibilities exist for a symptom, choose the most probable condition.
4. All list fields like "Alternative Medicines", "Side Effects", "Home Remedies", and "Lifestyle Tips" must return an array of strings.
5. Never return empty or null values - if no specific info is known, provide general suggestions.
"#
    )
}

/// Build the free-form health question prompt
pub fn build_question_prompt(question: &str) -> String {
    format!("Question: {question}")
}

/// Build the translation prompt for an existing structured summary
pub fn build_translation_prompt(summary_json: &str, target_language: &str) -> String {
    format!(
        "Translate the following health information to {target_language}. Keep the exact \
         same JSON structure but translate all values. Return ONLY valid JSON:\n\n\
         {summary_json}\n\n\
         IMPORTANT: Return ONLY valid JSON with the same structure. Do not add any additional text."
    )
}
