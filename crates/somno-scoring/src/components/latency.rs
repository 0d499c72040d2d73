use somno_core::choice::Choice;
use somno_core::models::questionnaire::QuestionnaireRecord;

use crate::error::ScoringError;

/// Recode minutes-to-sleep into a 0–3 sub-score.
///
/// Zero minutes is not treated as instant sleep: it falls through to the
/// worst bucket along with an hour or more.
pub fn recode(minutes: u32) -> u8 {
    match minutes {
        1..=14 => 0,
        15..=29 => 1,
        30..=59 => 2,
        _ => 3,
    }
}

/// Bucket the recoded latency plus the "could not fall asleep within 30
/// minutes" frequency.
pub fn combine(falling_asleep: u8, recoded: u8) -> u8 {
    match u32::from(falling_asleep) + u32::from(recoded) {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        _ => 3,
    }
}

pub fn score(record: &QuestionnaireRecord) -> Result<u8, ScoringError> {
    let minutes = record
        .time_to_sleep
        .ok_or(ScoringError::MissingRequiredField("time_to_sleep"))?;
    let falling_asleep = record.difficulty_falling_asleep.map_or(0, Choice::value);
    Ok(combine(falling_asleep, recode(minutes)))
}
