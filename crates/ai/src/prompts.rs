//! Prompt construction for patient-notes summarization.
//!
//! The contract with the provider is a single templated prompt; all model
//! behaviour beyond it is the provider's concern.

/// System prompt establishing the summarizer persona.
pub const SYSTEM_PROMPT: &str = "You are an expert medical summarizer. Summarize patient notes \
so doctors can quickly understand the patient's medical history and make informed decisions. \
Respond with a JSON object containing a single \"summary\" string field.";

/// User prompt template over the patient notes.
pub fn make_summary_prompt(patient_notes: &str) -> String {
    format!(
        "Please summarize the following patient notes.\n\nPatient Notes:\n{}",
        patient_notes
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prompt_embeds_the_notes_verbatim() {
        let notes = "History of mild asthma. Needs urgent surgical consultation.";
        let prompt = make_summary_prompt(notes);
        assert!(prompt.contains(notes));
        assert!(prompt.starts_with("Please summarize"));
    }
}
