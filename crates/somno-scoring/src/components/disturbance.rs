use somno_core::choice::sum_present;
use somno_core::models::questionnaire::QuestionnaireRecord;

pub fn bucket(sum: u32) -> u8 {
    match sum {
        0 => 0,
        1..=8 => 1,
        9..=17 => 2,
        _ => 3,
    }
}

/// Sum of the nine disturbance answers and the "other reason" frequency.
/// Unanswered items count as zero.
pub fn sum(record: &QuestionnaireRecord) -> u32 {
    sum_present(&record.disturbances())
}

pub fn score(record: &QuestionnaireRecord) -> u8 {
    bucket(sum(record))
}
