use somno_core::clock::{as_hours, time_in_bed};
use somno_core::models::questionnaire::QuestionnaireRecord;

use crate::error::ScoringError;

pub fn bucket(percentage: f64) -> u8 {
    if percentage >= 85.0 {
        0
    } else if percentage >= 75.0 {
        1
    } else if percentage >= 65.0 {
        2
    } else {
        3
    }
}

/// Share of the time in bed reported as sleep, as a percentage.
///
/// Fails with [`ScoringError::DegenerateInterval`] when bedtime and wakeup
/// time coincide, since there is no interval to divide by.
pub fn percentage(record: &QuestionnaireRecord) -> Result<f64, ScoringError> {
    let bedtime = record
        .bedtime
        .ok_or(ScoringError::MissingRequiredField("bedtime"))?;
    let wakeup_time = record
        .wakeup_time
        .ok_or(ScoringError::MissingRequiredField("wakeup_time"))?;

    let in_bed = time_in_bed(bedtime, wakeup_time);
    if in_bed.is_zero() {
        tracing::warn!(%bedtime, %wakeup_time, "zero time in bed, efficiency undefined");
        return Err(ScoringError::DegenerateInterval {
            bedtime,
            wakeup_time,
        });
    }

    Ok(record.sleep_hours / as_hours(in_bed) * 100.0)
}

pub fn score(record: &QuestionnaireRecord) -> Result<u8, ScoringError> {
    let efficiency = percentage(record)?;
    tracing::debug!(efficiency, "sleep efficiency computed");
    Ok(bucket(efficiency))
}
