/// Prompts module
/// Centralized management of all model prompts

pub mod consultation;

pub use consultation::{
    build_analysis_prompt, build_question_prompt, build_translation_prompt,
    ANALYSIS_SYSTEM_PROMPT, QUESTION_SYSTEM_PROMPT, TRANSLATION_SYSTEM_PROMPT,
};
