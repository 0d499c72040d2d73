use somno_core::choice::Choice;
use somno_core::models::questionnaire::QuestionnaireRecord;

pub fn bucket(sum: u32) -> u8 {
    match sum {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        _ => 3,
    }
}

/// Daytime sleepiness frequency plus difficulty keeping up enthusiasm.
/// Unanswered items count as zero.
pub fn sum(record: &QuestionnaireRecord) -> u32 {
    let sleepiness = record.daytime_sleepiness.map_or(0, Choice::value);
    let enthusiasm = record.enthusiasm_difficulty.map_or(0, Choice::value);
    u32::from(sleepiness) + u32::from(enthusiasm)
}

pub fn score(record: &QuestionnaireRecord) -> u8 {
    bucket(sum(record))
}
