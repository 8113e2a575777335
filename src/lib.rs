/// AI Health Advisor library
/// Exposes the symptom-analysis pipeline for reuse in the HTTP server and tests

pub mod advisor;
pub mod prompts;
pub mod shared;

pub use advisor::{
    analyze_symptoms, answer_question, translate_summary, validate_symptoms, AdvisorConfig,
    AdvisorError, HealthSummary, Language, SUPPORTED_LANGUAGES,
};
pub use shared::{call_gemini, extract_json, normalize_list_fields};
