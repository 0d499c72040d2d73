use somno_core::models::questionnaire::QuestionnaireRecord;

/// Bucket reported hours of actual sleep.
///
/// 7h or more scores 0, above 6h scores 1, 5h to 6h scores 2. Anything
/// shorter, including zero or negative hours, lands in the worst bucket.
pub fn bucket(sleep_hours: f64) -> u8 {
    if sleep_hours >= 7.0 {
        0
    } else if sleep_hours > 6.0 {
        1
    } else if sleep_hours >= 5.0 {
        2
    } else {
        3
    }
}

pub fn score(record: &QuestionnaireRecord) -> u8 {
    if record.sleep_hours <= 0.0 {
        tracing::debug!(
            sleep_hours = record.sleep_hours,
            "non-positive sleep hours, scoring worst duration"
        );
    }
    bucket(record.sleep_hours)
}
