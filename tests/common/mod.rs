#![allow(dead_code)]

//! Shared helpers for integration tests

/// A well-formed summary the way the prompt template asks for it
pub const SAMPLE_SUMMARY: &str = r#"{
  "Disease": "Common Cold",
  "Recommended Medicine": "Paracetamol",
  "Alternative Medicines": ["Ibuprofen", "Aspirin"],
  "Dosage": "500mg every 6 hours",
  "Precautions": "Stay hydrated. Avoid cold drinks.",
  "Side Effects": ["Drowsiness"],
  "When to Consult a Doctor": "If fever persists beyond 3 days",
  "Home Remedies": ["Warm salt water gargle", "Honey with ginger"],
  "Symptom Description": "Runny nose, sneezing, mild fever",
  "Lifestyle Tips": ["Rest well", "Drink warm fluids"],
  "Disclaimer": "This information is for educational purposes only."
}"#;

pub fn wrapped_in_prose(json: &str) -> String {
    format!("Here is the structured summary you asked for:\n\n{json}\n\nTake care!")
}

pub fn wrapped_in_fence(json: &str) -> String {
    format!("Sure!\n```json\n{json}\n```\n")
}
