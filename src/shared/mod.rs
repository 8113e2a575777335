/// Shared plumbing for the advisor pipeline

pub mod extract;
pub mod gemini;

pub use extract::{extract_json, normalize_list_fields, LIST_FIELDS};
pub use gemini::{call_gemini, GeminiRequest, GeminiResponse, GenerationConfig, SafetySetting};
