//! Unbucketed terms: inverted quality and raw medication use.

use somno_core::choice::Choice;
use somno_core::models::questionnaire::QuestionnaireRecord;

use crate::error::ScoringError;

/// Invert the 1–4 quality rating so that lower is better: 4 → 1, 1 → 4.
pub fn quality_term(record: &QuestionnaireRecord) -> Result<u8, ScoringError> {
    let quality = record
        .sleep_quality
        .ok_or(ScoringError::MissingRequiredField("sleep_quality"))?;
    Ok(4 - quality.value() + 1)
}

pub fn medication(record: &QuestionnaireRecord) -> Result<u8, ScoringError> {
    record
        .medication_use
        .map(Choice::value)
        .ok_or(ScoringError::MissingRequiredField("medication_use"))
}
